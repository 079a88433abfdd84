//! Deity domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A deity mantras are addressed to. Planetary deities (grahas) carry their
/// traditional correspondences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deity {
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

fn default_active() -> bool {
    true
}

/// Request payload for creating a deity.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDeityRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 100))]
    pub sanskrit_name: Option<String>,

    #[validate(length(max = 20))]
    pub day_of_week: Option<String>,

    #[validate(length(max = 50))]
    pub color: Option<String>,

    #[validate(length(max = 50))]
    pub gemstone: Option<String>,

    #[validate(length(max = 50))]
    pub metal: Option<String>,

    #[validate(length(max = 50))]
    pub element: Option<String>,

    #[validate(length(max = 50))]
    pub direction: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CreateDeityRequest {
    /// Minimal request with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sanskrit_name: None,
            day_of_week: None,
            color: None,
            gemstone: None,
            metal: None,
            element: None,
            direction: None,
            image_url: None,
            is_active: true,
        }
    }
}

/// Request payload for updating a deity (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDeityRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 100))]
    pub sanskrit_name: Option<String>,

    #[validate(length(max = 20))]
    pub day_of_week: Option<String>,

    #[validate(length(max = 50))]
    pub color: Option<String>,

    #[validate(length(max = 50))]
    pub gemstone: Option<String>,

    #[validate(length(max = 50))]
    pub metal: Option<String>,

    #[validate(length(max = 50))]
    pub element: Option<String>,

    #[validate(length(max = 50))]
    pub direction: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    pub is_active: Option<bool>,
}

/// Response for listing deities.
#[derive(Debug, Clone, Serialize)]
pub struct ListDeitiesResponse {
    pub deities: Vec<Deity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_deity_defaults_active() {
        let request: CreateDeityRequest = serde_json::from_str(r#"{"name": "Ganesha"}"#).unwrap();
        assert!(request.is_active);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_deity_rejects_bad_image_url() {
        let mut request = CreateDeityRequest::named("Lakshmi");
        request.image_url = Some("not a url".to_string());
        assert!(request.validate().is_err());

        request.image_url = Some("https://cdn.dhivyuga.com/lakshmi.png".to_string());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_deity_deactivate_only() {
        let request: UpdateDeityRequest = serde_json::from_str(r#"{"is_active": false}"#).unwrap();
        assert_eq!(request.is_active, Some(false));
        assert!(request.name.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_deity_rejects_empty_name() {
        let request = UpdateDeityRequest {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
