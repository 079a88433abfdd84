//! Shared utilities and common types for the Dhivyuga backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Verification of bearer tokens issued by the hosted auth provider
//! - Limit/offset pagination helpers
//! - Common validation logic

pub mod jwt;
pub mod pagination;
pub mod validation;
