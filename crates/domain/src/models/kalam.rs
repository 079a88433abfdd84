//! Kalam and time range domain models.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// An auspicious or inauspicious period of the day (Rahu Kalam, Gulika
/// Kalam, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Kalam {
    pub id: Uuid,
    pub name: String,
    pub planet: Option<String>,
    pub description: Option<String>,
    pub is_auspicious: bool,
    pub created_at: DateTime<Utc>,
}

/// A time-of-day window recommended for recitation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeRange {
    pub id: Uuid,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateKalamRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: String,

    #[validate(length(max = 50))]
    pub planet: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[serde(default)]
    pub is_auspicious: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateKalamRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(length(max = 50))]
    pub planet: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub is_auspicious: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_create_time_range"))]
pub struct CreateTimeRangeRequest {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

fn validate_create_time_range(request: &CreateTimeRangeRequest) -> Result<(), ValidationError> {
    shared::validation::validate_time_range(request.start_time, request.end_time)
}

/// Partial update. When only one bound changes, the handler checks the
/// resulting window against the stored row.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_update_time_range"))]
pub struct UpdateTimeRangeRequest {
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

fn validate_update_time_range(request: &UpdateTimeRangeRequest) -> Result<(), ValidationError> {
    match (request.start_time, request.end_time) {
        (Some(start), Some(end)) => shared::validation::validate_time_range(start, end),
        _ => Ok(()),
    }
}

impl UpdateTimeRangeRequest {
    /// Returns the window that results from applying this update to `current`.
    pub fn merged_with(&self, current: &TimeRange) -> (NaiveTime, NaiveTime) {
        (
            self.start_time.unwrap_or(current.start_time),
            self.end_time.unwrap_or(current.end_time),
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListKalamsResponse {
    pub kalams: Vec<Kalam>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListTimeRangesResponse {
    pub time_ranges: Vec<TimeRange>,
}
