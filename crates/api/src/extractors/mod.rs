//! Custom Axum extractors.
//!
//! `Path` and `Query` shadow the axum extractors of the same name so that
//! every rejection shares the API's JSON error body.

pub mod admin;
pub mod json;
pub mod path;
pub mod query;

pub use json::ValidatedJson;
pub use path::Path;
pub use query::Query;
