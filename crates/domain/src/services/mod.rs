//! Domain services for the mantra catalog.
//!
//! Pure logic with no database access.

pub mod catalog;
pub mod seed;
