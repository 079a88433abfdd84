//! Recitation count and recitation time repositories.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{RecitationCountEntity, RecitationTimeEntity};
use crate::metrics::QueryTimer;

/// Repository for recitation_counts.
#[derive(Clone)]
pub struct RecitationCountRepository {
    pool: PgPool,
}

impl RecitationCountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        count_value: i32,
        description: Option<&str>,
    ) -> Result<RecitationCountEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_recitation_count");
        let result = sqlx::query_as::<_, RecitationCountEntity>(
            r#"
            INSERT INTO recitation_counts (count_value, description)
            VALUES ($1, $2)
            RETURNING id, count_value, description, created_at
            "#,
        )
        .bind(count_value)
        .bind(description)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RecitationCountEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_recitation_count_by_id");
        let result = sqlx::query_as::<_, RecitationCountEntity>(
            "SELECT id, count_value, description, created_at FROM recitation_counts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All counts, smallest first.
    pub async fn list(&self) -> Result<Vec<RecitationCountEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_recitation_counts");
        let result = sqlx::query_as::<_, RecitationCountEntity>(
            r#"
            SELECT id, count_value, description, created_at
            FROM recitation_counts
            ORDER BY count_value, created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: Uuid,
        count_value: Option<i32>,
        description: Option<&str>,
    ) -> Result<Option<RecitationCountEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_recitation_count");
        let result = sqlx::query_as::<_, RecitationCountEntity>(
            r#"
            UPDATE recitation_counts
            SET
                count_value = COALESCE($2, count_value),
                description = COALESCE($3, description)
            WHERE id = $1
            RETURNING id, count_value, description, created_at
            "#,
        )
        .bind(id)
        .bind(count_value)
        .bind(description)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_recitation_count");
        let result = sqlx::query("DELETE FROM recitation_counts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|r| r.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_recitation_counts");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM recitation_counts")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }
}

/// Repository for recitation_times.
#[derive(Clone)]
pub struct RecitationTimeRepository {
    pool: PgPool,
}

impl RecitationTimeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<RecitationTimeEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_recitation_time");
        let result = sqlx::query_as::<_, RecitationTimeEntity>(
            r#"
            INSERT INTO recitation_times (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RecitationTimeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_recitation_time_by_id");
        let result = sqlx::query_as::<_, RecitationTimeEntity>(
            "SELECT id, name, description, created_at FROM recitation_times WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn list(&self) -> Result<Vec<RecitationTimeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_recitation_times");
        let result = sqlx::query_as::<_, RecitationTimeEntity>(
            "SELECT id, name, description, created_at FROM recitation_times ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<RecitationTimeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_recitation_time");
        let result = sqlx::query_as::<_, RecitationTimeEntity>(
            r#"
            UPDATE recitation_times
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description)
            WHERE id = $1
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_recitation_time");
        let result = sqlx::query("DELETE FROM recitation_times WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|r| r.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_recitation_times");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM recitation_times")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }
}
