//! Mantra translation entity joined with its language.

use chrono::{DateTime, Utc};
use domain::models::{LanguageSummary, TextDirection, Translation, TranslationWithLanguage};
use sqlx::FromRow;
use uuid::Uuid;

/// Row from mantra_translations joined with languages.
#[derive(Debug, Clone, FromRow)]
pub struct TranslationWithLanguageEntity {
    pub id: Uuid,
    pub mantra_id: Uuid,
    pub language_id: Uuid,
    pub text: String,
    pub transliteration: Option<String>,
    pub pronunciation_guide: Option<String>,
    pub meaning: Option<String>,
    pub benefits: Vec<String>,
    pub usage_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub language_code: String,
    pub language_name: String,
    pub language_native_name: Option<String>,
    pub language_direction: String,
}

impl From<TranslationWithLanguageEntity> for TranslationWithLanguage {
    fn from(entity: TranslationWithLanguageEntity) -> Self {
        Self {
            language: LanguageSummary {
                id: entity.language_id,
                code: entity.language_code,
                name: entity.language_name,
                native_name: entity.language_native_name,
                direction: TextDirection::parse(&entity.language_direction).unwrap_or_default(),
            },
            translation: Translation {
                id: entity.id,
                mantra_id: entity.mantra_id,
                language_id: entity.language_id,
                text: entity.text,
                transliteration: entity.transliteration,
                pronunciation_guide: entity.pronunciation_guide,
                meaning: entity.meaning,
                benefits: entity.benefits,
                usage_notes: entity.usage_notes,
                created_at: entity.created_at,
                updated_at: entity.updated_at,
            },
        }
    }
}
