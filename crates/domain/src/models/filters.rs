//! Dropdown data for the search page.

use serde::Serialize;

use super::{Category, Deity, Kalam, RecitationTime};

#[derive(Debug, Clone, Serialize)]
pub struct FiltersResponse {
    pub categories: Vec<Category>,
    pub deities: Vec<Deity>,
    pub recitation_times: Vec<RecitationTime>,
    pub kalams: Vec<Kalam>,
}
