//! Category repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::CategoryEntity;
use crate::metrics::QueryTimer;

/// Repository for category-related database operations.
#[derive(Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<CategoryEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_category");
        let result = sqlx::query_as::<_, CategoryEntity>(
            r#"
            INSERT INTO categories (name, description)
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

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CategoryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_category_by_id");
        let result = sqlx::query_as::<_, CategoryEntity>(
            r#"
            SELECT id, name, description, created_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All categories ordered by name.
    pub async fn list(&self) -> Result<Vec<CategoryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_categories");
        let result = sqlx::query_as::<_, CategoryEntity>(
            r#"
            SELECT id, name, description, created_at
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partial update; `None` keeps the stored value.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<CategoryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_category");
        let result = sqlx::query_as::<_, CategoryEntity>(
            r#"
            UPDATE categories
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

    /// Returns the number of rows deleted.
    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_category");
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|r| r.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_categories");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Names matching an already-escaped ILIKE pattern.
    pub async fn find_names_by_prefix(
        &self,
        pattern: &str,
        limit: i64,
    ) -> Result<Vec<String>, sqlx::Error> {
        let timer = QueryTimer::new("find_category_names_by_prefix");
        let result = sqlx::query_scalar::<_, String>(
            r#"
            SELECT name
            FROM categories
            WHERE name ILIKE $1
            ORDER BY name
            LIMIT $2
            "#,
        )
        .bind(pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
