//! Language domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Writing direction of a language.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    /// Parses from database string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ltr" => Some(TextDirection::Ltr),
            "rtl" => Some(TextDirection::Rtl),
            _ => None,
        }
    }
}

/// A language translations can be written in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Language {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub native_name: Option<String>,
    pub direction: TextDirection,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLanguageRequest {
    #[validate(custom(function = "shared::validation::validate_language_code"))]
    pub code: String,

    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: String,

    #[validate(length(max = 100))]
    pub native_name: Option<String>,

    #[serde(default)]
    pub direction: TextDirection,

    #[serde(default)]
    pub sort_order: i32,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLanguageRequest {
    #[validate(custom(function = "shared::validation::validate_language_code"))]
    pub code: Option<String>,

    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(length(max = 100))]
    pub native_name: Option<String>,

    pub direction: Option<TextDirection>,

    pub sort_order: Option<i32>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListLanguagesResponse {
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageResponse {
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_direction_roundtrip_strings() {
        assert_eq!(TextDirection::Ltr.as_str(), "ltr");
        assert_eq!(TextDirection::Rtl.as_str(), "rtl");
        assert_eq!(TextDirection::parse("rtl"), Some(TextDirection::Rtl));
        assert_eq!(TextDirection::parse("RTL"), None);
    }

    #[test]
    fn test_create_language_defaults() {
        let request: CreateLanguageRequest =
            serde_json::from_str(r#"{"code": "ta", "name": "Tamil", "native_name": "தமிழ்"}"#)
                .unwrap();
        assert_eq!(request.direction, TextDirection::Ltr);
        assert_eq!(request.sort_order, 0);
        assert!(request.is_active);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_language_rejects_bad_code() {
        let request: CreateLanguageRequest =
            serde_json::from_str(r#"{"code": "Tamil", "name": "Tamil"}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_language_rejects_unknown_direction() {
        let result: Result<CreateLanguageRequest, _> =
            serde_json::from_str(r#"{"code": "ur", "name": "Urdu", "direction": "ttb"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_language_serializes_direction_lowercase() {
        let language = Language {
            id: Uuid::nil(),
            code: "ur".into(),
            name: "Urdu".into(),
            native_name: Some("اردو".into()),
            direction: TextDirection::Rtl,
            is_active: true,
            sort_order: 4,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&language).unwrap();
        assert_eq!(json["direction"], "rtl");
        assert_eq!(json["sort_order"], 4);
    }
}
