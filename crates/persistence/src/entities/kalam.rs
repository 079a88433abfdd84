//! Kalam and time range entities.

use chrono::{DateTime, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the kalams table.
#[derive(Debug, Clone, FromRow)]
pub struct KalamEntity {
    pub id: Uuid,
    pub name: String,
    pub planet: Option<String>,
    pub description: Option<String>,
    pub is_auspicious: bool,
    pub created_at: DateTime<Utc>,
}

impl From<KalamEntity> for domain::models::Kalam {
    fn from(entity: KalamEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            planet: entity.planet,
            description: entity.description,
            is_auspicious: entity.is_auspicious,
            created_at: entity.created_at,
        }
    }
}

/// Database row mapping for the time_ranges table.
#[derive(Debug, Clone, FromRow)]
pub struct TimeRangeEntity {
    pub id: Uuid,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TimeRangeEntity> for domain::models::TimeRange {
    fn from(entity: TimeRangeEntity) -> Self {
        Self {
            id: entity.id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}
