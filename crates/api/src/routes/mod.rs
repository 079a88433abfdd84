//! HTTP route handlers.

pub mod admin;
pub mod admin_catalog;
pub mod admin_languages;
pub mod admin_mantras;
pub mod catalog;
pub mod health;
pub mod mantras;
pub mod search;
pub mod translations;
