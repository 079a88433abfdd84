//! Common validation utilities.

use chrono::NaiveTime;
use validator::ValidationError;

/// Maximum number of benefit bullet points on a translation.
pub const MAX_BENEFITS: usize = 20;

/// Maximum length of a single benefit entry.
pub const MAX_BENEFIT_LENGTH: usize = 500;

lazy_static::lazy_static! {
    /// ISO 639 language code with an optional region or script subtag.
    pub static ref LANGUAGE_CODE_REGEX: regex::Regex =
        regex::Regex::new(r"^[a-z]{2,3}(-[A-Za-z]{2,4})?$").unwrap();
}

/// Validates a language code such as `ta`, `en` or `sa-Deva`.
pub fn validate_language_code(code: &str) -> Result<(), ValidationError> {
    if LANGUAGE_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        let mut err = ValidationError::new("language_code");
        err.message = Some("Language code must look like 'en', 'ta' or 'sa-Deva'".into());
        Err(err)
    }
}

/// Validates the benefit list attached to a translation.
pub fn validate_benefits(benefits: &[String]) -> Result<(), ValidationError> {
    if benefits.len() > MAX_BENEFITS {
        let mut err = ValidationError::new("benefits_count");
        err.message = Some(format!("At most {} benefits are allowed", MAX_BENEFITS).into());
        return Err(err);
    }

    for benefit in benefits {
        if benefit.trim().is_empty() {
            let mut err = ValidationError::new("benefit_empty");
            err.message = Some("Benefits must not be empty".into());
            return Err(err);
        }
        if benefit.chars().count() > MAX_BENEFIT_LENGTH {
            let mut err = ValidationError::new("benefit_length");
            err.message = Some(
                format!("Each benefit must be at most {} characters", MAX_BENEFIT_LENGTH).into(),
            );
            return Err(err);
        }
    }

    Ok(())
}

/// Validates that a time window starts before it ends.
pub fn validate_time_range(start: NaiveTime, end: NaiveTime) -> Result<(), ValidationError> {
    if start < end {
        Ok(())
    } else {
        let mut err = ValidationError::new("time_range_order");
        err.message = Some("Start time must be before end time".into());
        Err(err)
    }
}

/// Validates that a string is not just whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}
