//! Language repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::LanguageEntity;
use crate::metrics::QueryTimer;

const LANGUAGE_COLUMNS: &str =
    "id, code, name, native_name, direction, is_active, sort_order, created_at";

/// Input for inserting a language.
#[derive(Debug, Clone)]
pub struct LanguageInput<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub native_name: Option<&'a str>,
    pub direction: &'a str,
    pub is_active: bool,
    pub sort_order: i32,
}

/// Optional field set for a partial language update.
#[derive(Debug, Clone, Default)]
pub struct LanguageUpdate<'a> {
    pub code: Option<&'a str>,
    pub name: Option<&'a str>,
    pub native_name: Option<&'a str>,
    pub direction: Option<&'a str>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

/// Repository for language-related database operations.
#[derive(Clone)]
pub struct LanguageRepository {
    pool: PgPool,
}

impl LanguageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &LanguageInput<'_>) -> Result<LanguageEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_language");
        let result = sqlx::query_as::<_, LanguageEntity>(&format!(
            r#"
            INSERT INTO languages (code, name, native_name, direction, is_active, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {LANGUAGE_COLUMNS}
            "#
        ))
        .bind(input.code)
        .bind(input.name)
        .bind(input.native_name)
        .bind(input.direction)
        .bind(input.is_active)
        .bind(input.sort_order)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<LanguageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_language_by_id");
        let result = sqlx::query_as::<_, LanguageEntity>(&format!(
            "SELECT {LANGUAGE_COLUMNS} FROM languages WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Every language including inactive ones.
    pub async fn list(&self) -> Result<Vec<LanguageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_languages");
        let result = sqlx::query_as::<_, LanguageEntity>(&format!(
            "SELECT {LANGUAGE_COLUMNS} FROM languages ORDER BY sort_order, name"
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn list_active(&self) -> Result<Vec<LanguageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_active_languages");
        let result = sqlx::query_as::<_, LanguageEntity>(&format!(
            "SELECT {LANGUAGE_COLUMNS} FROM languages WHERE is_active = true ORDER BY sort_order, name"
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: Uuid,
        update: &LanguageUpdate<'_>,
    ) -> Result<Option<LanguageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_language");
        let result = sqlx::query_as::<_, LanguageEntity>(&format!(
            r#"
            UPDATE languages
            SET
                code = COALESCE($2, code),
                name = COALESCE($3, name),
                native_name = COALESCE($4, native_name),
                direction = COALESCE($5, direction),
                is_active = COALESCE($6, is_active),
                sort_order = COALESCE($7, sort_order)
            WHERE id = $1
            RETURNING {LANGUAGE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(update.code)
        .bind(update.name)
        .bind(update.native_name)
        .bind(update.direction)
        .bind(update.is_active)
        .bind(update.sort_order)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Fails with a foreign key violation while translations reference the
    /// language.
    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_language");
        let result = sqlx::query("DELETE FROM languages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|r| r.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_languages");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM languages")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }
}
