//! Limit/offset pagination utilities.

use serde::{Deserialize, Serialize};

/// Clamps a caller-supplied limit into `1..=max`, falling back to `default`.
///
/// Non-positive values are treated as "not supplied".
pub fn clamp_limit(requested: Option<i64>, default: i64, max: i64) -> i64 {
    match requested {
        Some(n) if n > 0 => n.min(max),
        _ => default.min(max),
    }
}

/// Query parameters for paged admin listings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Resolved page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: i64,
    pub per_page: i64,
    pub limit: i64,
    pub offset: i64,
}

impl PageQuery {
    /// Resolves the query into a limit/offset pair. Pages are 1-based.
    pub fn resolve(&self, default_per_page: i64, max_per_page: i64) -> PageParams {
        let per_page = clamp_limit(self.per_page, default_per_page, max_per_page);
        let page = self.page.filter(|p| *p > 0).unwrap_or(1);
        PageParams {
            page,
            per_page,
            limit: per_page,
            offset: (page - 1).saturating_mul(per_page),
        }
    }
}

/// Pagination block returned with paged listings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(params: PageParams, total: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + params.per_page - 1) / params.per_page
        };
        Self {
            page: params.page,
            per_page: params.per_page,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit_defaults() {
        assert_eq!(clamp_limit(None, 20, 100), 20);
        assert_eq!(clamp_limit(Some(0), 20, 100), 20);
        assert_eq!(clamp_limit(Some(-5), 20, 100), 20);
    }

    #[test]
    fn test_clamp_limit_caps_at_max() {
        assert_eq!(clamp_limit(Some(500), 20, 100), 100);
        assert_eq!(clamp_limit(Some(100), 20, 100), 100);
        assert_eq!(clamp_limit(Some(7), 20, 100), 7);
    }

    #[test]
    fn test_clamp_limit_default_above_max() {
        assert_eq!(clamp_limit(None, 50, 10), 10);
    }

    #[test]
    fn test_page_query_first_page() {
        let params = PageQuery::default().resolve(25, 100);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 25);
        assert_eq!(params.offset, 0);
    }

    #[test]
    fn test_page_query_third_page() {
        let query = PageQuery {
            page: Some(3),
            per_page: Some(10),
        };
        let params = query.resolve(25, 100);
        assert_eq!(params.offset, 20);
        assert_eq!(params.limit, 10);
    }

    #[test]
    fn test_page_query_invalid_page_falls_back() {
        let query = PageQuery {
            page: Some(0),
            per_page: None,
        };
        assert_eq!(query.resolve(25, 100).page, 1);
    }

    #[test]
    fn test_pagination_total_pages() {
        let params = PageQuery::default().resolve(10, 100);
        assert_eq!(Pagination::new(params, 0).total_pages, 0);
        assert_eq!(Pagination::new(params, 10).total_pages, 1);
        assert_eq!(Pagination::new(params, 11).total_pages, 2);
    }

    #[test]
    fn test_pagination_serialization() {
        let params = PageQuery::default().resolve(10, 100);
        let json = serde_json::to_value(Pagination::new(params, 42)).unwrap();
        assert_eq!(json["total"], 42);
        assert_eq!(json["total_pages"], 5);
        assert_eq!(json["per_page"], 10);
    }
}
