//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use forgeline_core::pagination::{clamp_page, clamp_page_size, page_window};
use serde::Deserialize;

/// Generic pagination parameters (`?page=&per_page=`).
///
/// Pages are 1-indexed. Out-of-range values are clamped, not rejected.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PageParams {
    /// Resolve to `(page, per_page, start, end)` with clamping applied.
    ///
    /// `start`/`end` form the inclusive row window handed to a repository.
    pub fn resolve(&self) -> (i64, i64, i64, i64) {
        let page = clamp_page(self.page);
        let per_page = clamp_page_size(self.per_page);
        let (start, end) = page_window(page, per_page);
        (page, per_page, start, end)
    }
}
