//! Mantra translation repository for database operations.

use domain::models::TranslationContent;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::TranslationWithLanguageEntity;
use crate::metrics::QueryTimer;

/// Projection over a translation row `t` joined with its language `l`.
const TRANSLATION_WITH_LANGUAGE: &str = r#"
    t.id, t.mantra_id, t.language_id, t.text, t.transliteration, t.pronunciation_guide,
    t.meaning, t.benefits, t.usage_notes, t.created_at, t.updated_at,
    l.code AS language_code, l.name AS language_name,
    l.native_name AS language_native_name, l.direction AS language_direction
"#;

/// Repository for translation-related database operations.
#[derive(Clone)]
pub struct TranslationRepository {
    pool: PgPool,
}

impl TranslationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Translations of a mantra in language display order.
    pub async fn list_for_mantra(
        &self,
        mantra_id: Uuid,
    ) -> Result<Vec<TranslationWithLanguageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_translations_for_mantra");
        let result = sqlx::query_as::<_, TranslationWithLanguageEntity>(&format!(
            r#"
            SELECT {TRANSLATION_WITH_LANGUAGE}
            FROM mantra_translations t
            JOIN languages l ON l.id = t.language_id
            WHERE t.mantra_id = $1
            ORDER BY l.sort_order, l.name
            "#
        ))
        .bind(mantra_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Inserts a translation. Fails with a unique violation if the mantra
    /// already has one in this language.
    pub async fn create(
        &self,
        mantra_id: Uuid,
        language_id: Uuid,
        content: &TranslationContent,
    ) -> Result<TranslationWithLanguageEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_translation");
        let result = sqlx::query_as::<_, TranslationWithLanguageEntity>(&format!(
            r#"
            WITH t AS (
                INSERT INTO mantra_translations
                    (mantra_id, language_id, text, transliteration, pronunciation_guide,
                     meaning, benefits, usage_notes)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING *
            )
            SELECT {TRANSLATION_WITH_LANGUAGE}
            FROM t
            JOIN languages l ON l.id = t.language_id
            "#
        ))
        .bind(mantra_id)
        .bind(language_id)
        .bind(&content.text)
        .bind(&content.transliteration)
        .bind(&content.pronunciation_guide)
        .bind(&content.meaning)
        .bind(&content.benefits)
        .bind(&content.usage_notes)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Replaces the content of a translation belonging to `mantra_id`.
    pub async fn update(
        &self,
        id: Uuid,
        mantra_id: Uuid,
        content: &TranslationContent,
    ) -> Result<Option<TranslationWithLanguageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_translation");
        let result = sqlx::query_as::<_, TranslationWithLanguageEntity>(&format!(
            r#"
            WITH t AS (
                UPDATE mantra_translations
                SET
                    text = $3,
                    transliteration = $4,
                    pronunciation_guide = $5,
                    meaning = $6,
                    benefits = $7,
                    usage_notes = $8
                WHERE id = $1 AND mantra_id = $2
                RETURNING *
            )
            SELECT {TRANSLATION_WITH_LANGUAGE}
            FROM t
            JOIN languages l ON l.id = t.language_id
            "#
        ))
        .bind(id)
        .bind(mantra_id)
        .bind(&content.text)
        .bind(&content.transliteration)
        .bind(&content.pronunciation_guide)
        .bind(&content.meaning)
        .bind(&content.benefits)
        .bind(&content.usage_notes)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Creates or replaces the mantra's translation in one language.
    pub async fn upsert_for_language(
        &self,
        mantra_id: Uuid,
        language_id: Uuid,
        content: &TranslationContent,
    ) -> Result<TranslationWithLanguageEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_translation_for_language");
        let result = sqlx::query_as::<_, TranslationWithLanguageEntity>(&format!(
            r#"
            WITH t AS (
                INSERT INTO mantra_translations
                    (mantra_id, language_id, text, transliteration, pronunciation_guide,
                     meaning, benefits, usage_notes)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (mantra_id, language_id) DO UPDATE
                SET
                    text = EXCLUDED.text,
                    transliteration = EXCLUDED.transliteration,
                    pronunciation_guide = EXCLUDED.pronunciation_guide,
                    meaning = EXCLUDED.meaning,
                    benefits = EXCLUDED.benefits,
                    usage_notes = EXCLUDED.usage_notes
                RETURNING *
            )
            SELECT {TRANSLATION_WITH_LANGUAGE}
            FROM t
            JOIN languages l ON l.id = t.language_id
            "#
        ))
        .bind(mantra_id)
        .bind(language_id)
        .bind(&content.text)
        .bind(&content.transliteration)
        .bind(&content.pronunciation_guide)
        .bind(&content.meaning)
        .bind(&content.benefits)
        .bind(&content.usage_notes)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: Uuid, mantra_id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_translation");
        let result = sqlx::query("DELETE FROM mantra_translations WHERE id = $1 AND mantra_id = $2")
            .bind(id)
            .bind(mantra_id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|r| r.rows_affected())
    }

    pub async fn delete_for_language(
        &self,
        mantra_id: Uuid,
        language_id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_translation_for_language");
        let result = sqlx::query(
            "DELETE FROM mantra_translations WHERE mantra_id = $1 AND language_id = $2",
        )
        .bind(mantra_id)
        .bind(language_id)
        .execute(&self.pool)
        .await;
        timer.record();
        result.map(|r| r.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_translations");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM mantra_translations")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }
}
