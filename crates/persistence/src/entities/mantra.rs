//! Mantra entities (database row mappings).

use chrono::{DateTime, NaiveTime, Utc};
use domain::models::{
    CategorySummary, DeitySummary, KalamSummary, Mantra, MantraWithRelations, PopularMantra,
    RecitationCountSummary, RecitationTimeSummary, RelatedMantra, TimeRangeSummary,
};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the mantras table.
#[derive(Debug, Clone, FromRow)]
pub struct MantraEntity {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub category_id: Option<Uuid>,
    pub deity_id: Option<Uuid>,
    pub count_id: Option<Uuid>,
    pub time_id: Option<Uuid>,
    pub kalam_id: Option<Uuid>,
    pub range_id: Option<Uuid>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MantraEntity> for Mantra {
    fn from(entity: MantraEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            text: entity.text,
            category_id: entity.category_id,
            deity_id: entity.deity_id,
            count_id: entity.count_id,
            time_id: entity.time_id,
            kalam_id: entity.kalam_id,
            range_id: entity.range_id,
            view_count: entity.view_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Mantra row with every referenced entity LEFT JOINed in.
///
/// Joined columns are NULL when the reference is unset.
#[derive(Debug, Clone, FromRow)]
pub struct MantraWithRelationsEntity {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub category_id: Option<Uuid>,
    pub deity_id: Option<Uuid>,
    pub count_id: Option<Uuid>,
    pub time_id: Option<Uuid>,
    pub kalam_id: Option<Uuid>,
    pub range_id: Option<Uuid>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deity_name: Option<String>,
    pub deity_description: Option<String>,
    pub category_name: Option<String>,
    pub category_description: Option<String>,
    pub count_value: Option<i32>,
    pub count_description: Option<String>,
    pub time_name: Option<String>,
    pub time_description: Option<String>,
    pub kalam_name: Option<String>,
    pub kalam_description: Option<String>,
    pub kalam_is_auspicious: Option<bool>,
    pub range_start_time: Option<NaiveTime>,
    pub range_end_time: Option<NaiveTime>,
    pub range_description: Option<String>,
}

impl From<MantraWithRelationsEntity> for MantraWithRelations {
    fn from(e: MantraWithRelationsEntity) -> Self {
        let deity = e.deity_id.zip(e.deity_name).map(|(id, name)| DeitySummary {
            id,
            name,
            description: e.deity_description,
        });
        let category = e
            .category_id
            .zip(e.category_name)
            .map(|(id, name)| CategorySummary {
                id,
                name,
                description: e.category_description,
            });
        let recitation_count =
            e.count_id
                .zip(e.count_value)
                .map(|(id, count_value)| RecitationCountSummary {
                    id,
                    count_value,
                    description: e.count_description,
                });
        let recitation_time = e
            .time_id
            .zip(e.time_name)
            .map(|(id, name)| RecitationTimeSummary {
                id,
                name,
                description: e.time_description,
            });
        let kalam = e.kalam_id.zip(e.kalam_name).map(|(id, name)| KalamSummary {
            id,
            name,
            description: e.kalam_description,
            is_auspicious: e.kalam_is_auspicious.unwrap_or(false),
        });
        let time_range = match (e.range_id, e.range_start_time, e.range_end_time) {
            (Some(id), Some(start_time), Some(end_time)) => Some(TimeRangeSummary {
                id,
                start_time,
                end_time,
                description: e.range_description,
            }),
            _ => None,
        };

        Self {
            mantra: Mantra {
                id: e.id,
                title: e.title,
                text: e.text,
                category_id: e.category_id,
                deity_id: e.deity_id,
                count_id: e.count_id,
                time_id: e.time_id,
                kalam_id: e.kalam_id,
                range_id: e.range_id,
                view_count: e.view_count,
                created_at: e.created_at,
                updated_at: e.updated_at,
            },
            deity,
            category,
            recitation_count,
            recitation_time,
            kalam,
            time_range,
        }
    }
}

/// Related mantra card.
#[derive(Debug, Clone, FromRow)]
pub struct RelatedMantraEntity {
    pub id: Uuid,
    pub title: String,
    pub view_count: i64,
    pub deity_name: Option<String>,
    pub category_name: Option<String>,
}

impl From<RelatedMantraEntity> for RelatedMantra {
    fn from(entity: RelatedMantraEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            view_count: entity.view_count,
            deity_name: entity.deity_name,
            category_name: entity.category_name,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct PopularMantraEntity {
    pub id: Uuid,
    pub title: String,
    pub view_count: i64,
}

impl From<PopularMantraEntity> for PopularMantra {
    fn from(entity: PopularMantraEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            view_count: entity.view_count,
        }
    }
}
