//! Admin dashboard statistics.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::deity::Deity;

/// Number of mantras listed under "popular" on the dashboard.
pub const POPULAR_MANTRAS_LIMIT: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopularMantra {
    pub id: Uuid,
    pub title: String,
    pub view_count: i64,
}

/// Totals shown on the admin landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_mantras: i64,
    pub total_categories: i64,
    pub total_deities: i64,
    pub total_languages: i64,
    pub total_translations: i64,
    pub total_views: i64,
    pub popular_mantras: Vec<PopularMantra>,
}

/// Outcome of seeding the planetary deities. `grahas` lists the rows this
/// call inserted and is omitted when nothing was inserted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedResponse {
    pub message: String,
    pub count: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grahas: Vec<Deity>,
}

impl SeedResponse {
    pub fn seeded(grahas: Vec<Deity>) -> Self {
        Self {
            message: "Grahas seeded successfully".to_string(),
            count: grahas.len() as i64,
            grahas,
        }
    }

    pub fn already_seeded(count: i64) -> Self {
        Self {
            message: "Grahas already exist in database".to_string(),
            count,
            grahas: Vec::new(),
        }
    }
}
