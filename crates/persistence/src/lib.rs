//! Persistence layer for the Dhivyuga catalog.
//!
//! This crate contains:
//! - Database connection management
//! - SQL migrations (`src/migrations`)
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - Query timing metrics

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
