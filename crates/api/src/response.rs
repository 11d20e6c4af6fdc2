//! Shared response envelope types for API handlers.
//!
//! Single resources use the `{ "data": ... }` envelope; list endpoints use
//! [`Paginated`], which carries the page window metadata the pagination
//! control needs (total pages and the bounded page-number window).

use forgeline_core::pagination::{page_numbers, total_pages};
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Response envelope for one page of a list.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    /// 1-indexed page this response covers.
    pub page: i64,
    pub per_page: i64,
    /// Exact count of rows matching the filter.
    pub total_count: i64,
    pub total_pages: i64,
    /// The up-to-five page buttons to render for this position.
    pub page_numbers: Vec<i64>,
}

impl<T: Serialize> Paginated<T> {
    /// Assemble a page envelope, deriving `total_pages` and `page_numbers`
    /// from the exact count.
    pub fn new(data: Vec<T>, page: i64, per_page: i64, total_count: i64) -> Self {
        let total_pages = total_pages(total_count, per_page);
        let page_numbers = page_numbers(page, total_pages);
        Paginated {
            data,
            page,
            per_page,
            total_count,
            total_pages,
            page_numbers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_derives_window_metadata() {
        let page: Paginated<i32> = Paginated::new(vec![1, 2, 3], 8, 9, 86);
        assert_eq!(page.total_pages, 10);
        assert_eq!(page.page_numbers, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn empty_result_still_reports_one_page() {
        let page: Paginated<i32> = Paginated::new(vec![], 1, 9, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_numbers, vec![1]);
    }
}
