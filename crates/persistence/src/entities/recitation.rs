//! Recitation count and time entities.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the recitation_counts table.
#[derive(Debug, Clone, FromRow)]
pub struct RecitationCountEntity {
    pub id: Uuid,
    pub count_value: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<RecitationCountEntity> for domain::models::RecitationCount {
    fn from(entity: RecitationCountEntity) -> Self {
        Self {
            id: entity.id,
            count_value: entity.count_value,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}

/// Database row mapping for the recitation_times table.
#[derive(Debug, Clone, FromRow)]
pub struct RecitationTimeEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<RecitationTimeEntity> for domain::models::RecitationTime {
    fn from(entity: RecitationTimeEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}
