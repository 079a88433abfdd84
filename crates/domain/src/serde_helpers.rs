//! Deserialization helpers shared by request and query types.

use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Treats an empty (or whitespace) query string value as absent.
///
/// `?category=` is what HTML forms send for "no selection".
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => T::from_str(s).map(Some).map_err(serde::de::Error::custom),
    }
}

/// Distinguishes a missing field (`None`) from an explicit `null`
/// (`Some(None)`) in partial updates.
///
/// Use together with `#[serde(default)]`.
pub fn double_option<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
