//! Recitation guidance: how many times and when to chant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Recommended number of repetitions (e.g. 108).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecitationCount {
    pub id: Uuid,
    pub count_value: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Named recitation time (e.g. "Brahma Muhurta").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecitationTime {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRecitationCountRequest {
    #[validate(range(min = 1, max = 1000000, message = "Count value must be between 1 and 1000000"))]
    pub count_value: i32,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRecitationCountRequest {
    #[validate(range(min = 1, max = 1000000, message = "Count value must be between 1 and 1000000"))]
    pub count_value: Option<i32>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRecitationTimeRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRecitationTimeRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListRecitationCountsResponse {
    pub recitation_counts: Vec<RecitationCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListRecitationTimesResponse {
    pub recitation_times: Vec<RecitationTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_value_range() {
        let ok = CreateRecitationCountRequest {
            count_value: 108,
            description: Some("One mala".into()),
        };
        assert!(ok.validate().is_ok());

        let zero = CreateRecitationCountRequest {
            count_value: 0,
            description: None,
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_update_count_partial() {
        let request: UpdateRecitationCountRequest =
            serde_json::from_str(r#"{"count_value": 21}"#).unwrap();
        assert_eq!(request.count_value, Some(21));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_recitation_time_name_required() {
        let request: Result<CreateRecitationTimeRequest, _> =
            serde_json::from_str(r#"{"description": "Dawn"}"#);
        assert!(request.is_err());
    }
}
