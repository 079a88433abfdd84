//! Language entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::TextDirection;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the languages table.
///
/// `direction` is constrained to `ltr`/`rtl` by a CHECK.
#[derive(Debug, Clone, FromRow)]
pub struct LanguageEntity {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub native_name: Option<String>,
    pub direction: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<LanguageEntity> for domain::models::Language {
    fn from(entity: LanguageEntity) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            native_name: entity.native_name,
            direction: TextDirection::parse(&entity.direction).unwrap_or_default(),
            is_active: entity.is_active,
            sort_order: entity.sort_order,
            created_at: entity.created_at,
        }
    }
}
