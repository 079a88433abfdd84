//! Domain layer for the Dhivyuga catalog.
//!
//! This crate contains:
//! - Domain models and request/response types
//! - Catalog query shaping and seed data
//! - Serde helpers for query strings and partial updates

pub mod models;
pub mod serde_helpers;
pub mod services;
