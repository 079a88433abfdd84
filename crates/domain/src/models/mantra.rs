//! Mantra domain model.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::serde_helpers::{double_option, empty_string_as_none};
use shared::pagination::Pagination;

/// Represents a mantra in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mantra {
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

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeitySummary {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecitationCountSummary {
    pub id: Uuid,
    pub count_value: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecitationTimeSummary {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KalamSummary {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_auspicious: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeRangeSummary {
    pub id: Uuid,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: Option<String>,
}

/// A mantra together with every entity it references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MantraWithRelations {
    #[serde(flatten)]
    pub mantra: Mantra,
    pub deity: Option<DeitySummary>,
    pub category: Option<CategorySummary>,
    pub recitation_count: Option<RecitationCountSummary>,
    pub recitation_time: Option<RecitationTimeSummary>,
    pub kalam: Option<KalamSummary>,
    pub time_range: Option<TimeRangeSummary>,
}

/// Compact card shown under a mantra's detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedMantra {
    pub id: Uuid,
    pub title: String,
    pub view_count: i64,
    pub deity_name: Option<String>,
    pub category_name: Option<String>,
}

/// Response for a single mantra page.
#[derive(Debug, Clone, Serialize)]
pub struct MantraDetailResponse {
    pub mantra: MantraWithRelations,
    pub related_mantras: Vec<RelatedMantra>,
}

/// Equality filters applied to mantra listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MantraFilters {
    pub category_id: Option<Uuid>,
    pub deity_id: Option<Uuid>,
    pub time_id: Option<Uuid>,
    pub kalam_id: Option<Uuid>,
}

/// Query parameters for the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub deity: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub time: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub kalam: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<i64>,
}

impl SearchQuery {
    pub fn filters(&self) -> MantraFilters {
        MantraFilters {
            category_id: self.category,
            deity_id: self.deity,
            time_id: self.time,
            kalam_id: self.kalam,
        }
    }
}

/// Response for search and filtered listings.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub mantras: Vec<MantraWithRelations>,
    pub total: usize,
}

/// Response for the trending list.
#[derive(Debug, Clone, Serialize)]
pub struct TrendingResponse {
    pub mantras: Vec<MantraWithRelations>,
}

/// Response after recording a page view.
#[derive(Debug, Clone, Serialize)]
pub struct ViewResponse {
    pub success: bool,
    pub view_count: i64,
}

/// Request payload for creating a mantra.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMantraRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: String,

    #[validate(
        length(min = 1, max = 20000, message = "Text must be 1-20000 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub text: String,

    pub category_id: Option<Uuid>,
    pub deity_id: Option<Uuid>,
    pub count_id: Option<Uuid>,
    pub time_id: Option<Uuid>,
    pub kalam_id: Option<Uuid>,
    pub range_id: Option<Uuid>,
}

/// Request payload for updating a mantra (partial update).
///
/// Reference fields distinguish "leave unchanged" (absent) from "clear"
/// (`null`).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMantraRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: Option<String>,

    #[validate(
        length(min = 1, max = 20000, message = "Text must be 1-20000 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub text: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub deity_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub count_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub time_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub kalam_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub range_id: Option<Option<Uuid>>,
}

/// Paged mantra list for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct AdminMantraListResponse {
    pub mantras: Vec<MantraWithRelations>,
    pub pagination: Pagination,
}
