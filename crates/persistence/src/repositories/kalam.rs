//! Kalam and time range repositories.

use chrono::NaiveTime;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{KalamEntity, TimeRangeEntity};
use crate::metrics::QueryTimer;

/// Repository for kalams.
#[derive(Clone)]
pub struct KalamRepository {
    pool: PgPool,
}

impl KalamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        planet: Option<&str>,
        description: Option<&str>,
        is_auspicious: bool,
    ) -> Result<KalamEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_kalam");
        let result = sqlx::query_as::<_, KalamEntity>(
            r#"
            INSERT INTO kalams (name, planet, description, is_auspicious)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, planet, description, is_auspicious, created_at
            "#,
        )
        .bind(name)
        .bind(planet)
        .bind(description)
        .bind(is_auspicious)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<KalamEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_kalam_by_id");
        let result = sqlx::query_as::<_, KalamEntity>(
            r#"
            SELECT id, name, planet, description, is_auspicious, created_at
            FROM kalams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn list(&self) -> Result<Vec<KalamEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_kalams");
        let result = sqlx::query_as::<_, KalamEntity>(
            r#"
            SELECT id, name, planet, description, is_auspicious, created_at
            FROM kalams
            ORDER BY name
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
        name: Option<&str>,
        planet: Option<&str>,
        description: Option<&str>,
        is_auspicious: Option<bool>,
    ) -> Result<Option<KalamEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_kalam");
        let result = sqlx::query_as::<_, KalamEntity>(
            r#"
            UPDATE kalams
            SET
                name = COALESCE($2, name),
                planet = COALESCE($3, planet),
                description = COALESCE($4, description),
                is_auspicious = COALESCE($5, is_auspicious)
            WHERE id = $1
            RETURNING id, name, planet, description, is_auspicious, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(planet)
        .bind(description)
        .bind(is_auspicious)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_kalam");
        let result = sqlx::query("DELETE FROM kalams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|r| r.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_kalams");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM kalams")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }
}

/// Repository for time_ranges.
#[derive(Clone)]
pub struct TimeRangeRepository {
    pool: PgPool,
}

impl TimeRangeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        start_time: NaiveTime,
        end_time: NaiveTime,
        description: Option<&str>,
    ) -> Result<TimeRangeEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_time_range");
        let result = sqlx::query_as::<_, TimeRangeEntity>(
            r#"
            INSERT INTO time_ranges (start_time, end_time, description)
            VALUES ($1, $2, $3)
            RETURNING id, start_time, end_time, description, created_at
            "#,
        )
        .bind(start_time)
        .bind(end_time)
        .bind(description)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TimeRangeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_time_range_by_id");
        let result = sqlx::query_as::<_, TimeRangeEntity>(
            "SELECT id, start_time, end_time, description, created_at FROM time_ranges WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All ranges in clock order.
    pub async fn list(&self) -> Result<Vec<TimeRangeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_time_ranges");
        let result = sqlx::query_as::<_, TimeRangeEntity>(
            r#"
            SELECT id, start_time, end_time, description, created_at
            FROM time_ranges
            ORDER BY start_time, end_time
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
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        description: Option<&str>,
    ) -> Result<Option<TimeRangeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_time_range");
        let result = sqlx::query_as::<_, TimeRangeEntity>(
            r#"
            UPDATE time_ranges
            SET
                start_time = COALESCE($2, start_time),
                end_time = COALESCE($3, end_time),
                description = COALESCE($4, description)
            WHERE id = $1
            RETURNING id, start_time, end_time, description, created_at
            "#,
        )
        .bind(id)
        .bind(start_time)
        .bind(end_time)
        .bind(description)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_time_range");
        let result = sqlx::query("DELETE FROM time_ranges WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|r| r.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_time_ranges");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM time_ranges")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }
}
