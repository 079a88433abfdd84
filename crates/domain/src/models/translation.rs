//! Mantra translation domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::language::TextDirection;

/// A per-language rendition of a mantra.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Translation {
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
}

/// Language fields embedded in translation responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageSummary {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub native_name: Option<String>,
    pub direction: TextDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationWithLanguage {
    #[serde(flatten)]
    pub translation: Translation,
    pub language: LanguageSummary,
}

/// Body fields shared by every translation write.
#[derive(Debug, Clone, Default, Deserialize, Validate, PartialEq)]
pub struct TranslationContent {
    #[validate(
        length(min = 1, max = 20000, message = "Text must be 1-20000 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub text: String,

    #[validate(length(max = 20000))]
    pub transliteration: Option<String>,

    #[validate(length(max = 5000))]
    pub pronunciation_guide: Option<String>,

    #[validate(length(max = 20000))]
    pub meaning: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_benefits"))]
    pub benefits: Vec<String>,

    #[validate(length(max = 5000))]
    pub usage_notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTranslationRequest {
    pub language_id: Uuid,

    #[serde(flatten)]
    #[validate(nested)]
    pub content: TranslationContent,
}

/// Full replacement of a translation's content. The language is fixed once
/// created.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTranslationRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub content: TranslationContent,
}

/// Unsaved state of one language tab in the translation editor.
///
/// Unlike [`TranslationContent`] the text may be blank, which means the
/// translation for that language should be removed. Field rules apply to the
/// resolved [`TranslationContent`], so the draft itself validates trivially.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TranslationDraft {
    #[serde(default)]
    pub text: String,
    pub transliteration: Option<String>,
    pub pronunciation_guide: Option<String>,
    pub meaning: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub usage_notes: Option<String>,
}

/// What saving a draft amounts to.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationAction {
    Upsert(TranslationContent),
    Delete,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl TranslationDraft {
    /// Resolves the draft into a write. Blank optional fields become `None`
    /// and blank benefit lines are dropped.
    pub fn resolve(self) -> TranslationAction {
        let text = self.text.trim();
        if text.is_empty() {
            return TranslationAction::Delete;
        }

        TranslationAction::Upsert(TranslationContent {
            text: text.to_string(),
            transliteration: non_blank(self.transliteration),
            pronunciation_guide: non_blank(self.pronunciation_guide),
            meaning: non_blank(self.meaning),
            benefits: self
                .benefits
                .into_iter()
                .map(|b| b.trim().to_string())
                .filter(|b| !b.is_empty())
                .collect(),
            usage_notes: non_blank(self.usage_notes),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListTranslationsResponse {
    pub translations: Vec<TranslationWithLanguage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranslationResponse {
    pub translation: TranslationWithLanguage,
}

/// Draft save that removed (or found nothing to remove for) a language.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationDeletedResponse {
    pub deleted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}
