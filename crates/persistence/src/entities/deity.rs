//! Deity entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the deities table.
#[derive(Debug, Clone, FromRow)]
pub struct DeityEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub sanskrit_name: Option<String>,
    pub day_of_week: Option<String>,
    pub color: Option<String>,
    pub gemstone: Option<String>,
    pub metal: Option<String>,
    pub element: Option<String>,
    pub direction: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DeityEntity> for domain::models::Deity {
    fn from(entity: DeityEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            sanskrit_name: entity.sanskrit_name,
            day_of_week: entity.day_of_week,
            color: entity.color,
            gemstone: entity.gemstone,
            metal: entity.metal,
            element: entity.element,
            direction: entity.direction,
            image_url: entity.image_url,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }
}
