//! Pagination and list-state helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the API/repository layer and any future CLI or worker tooling.

// ---------------------------------------------------------------------------
// Page size defaults
// ---------------------------------------------------------------------------

/// Default number of rows per page for public list endpoints.
pub const DEFAULT_PAGE_SIZE: i64 = 9;

/// Maximum number of rows per page.
pub const MAX_PAGE_SIZE: i64 = 50;

/// Number of page buttons shown by the pagination control.
pub const PAGE_BUTTON_COUNT: i64 = 5;

// ---------------------------------------------------------------------------
// Window math
// ---------------------------------------------------------------------------

/// Compute the inclusive `[start, end]` row window for a 1-indexed page.
///
/// # Examples
///
/// ```
/// use forgeline_core::pagination::page_window;
/// assert_eq!(page_window(1, 9), (0, 8));
/// assert_eq!(page_window(3, 9), (18, 26));
/// ```
pub fn page_window(page: i64, page_size: i64) -> (i64, i64) {
    let start = (page - 1) * page_size;
    (start, start + page_size - 1)
}

/// Compute the total number of pages for a row count.
///
/// `ceil(total_count / page_size)`, normalized so an empty result set still
/// reports one page (the UI never renders a 0-page control).
///
/// # Examples
///
/// ```
/// use forgeline_core::pagination::total_pages;
/// assert_eq!(total_pages(0, 9), 1);
/// assert_eq!(total_pages(9, 9), 1);
/// assert_eq!(total_pages(10, 9), 2);
/// ```
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    let pages = (total_count + page_size - 1) / page_size;
    pages.max(1)
}

/// Compute the window of page numbers for a bounded page-button control.
///
/// Shows up to [`PAGE_BUTTON_COUNT`] contiguous page numbers centered on the
/// current page where possible:
///
/// - `total_pages <= 5`: all pages;
/// - `page <= 3`: pages `1..=5`;
/// - `page >= total_pages - 2`: the last five;
/// - otherwise: `page-2 ..= page+2`.
///
/// The result is ascending, contains `page`, and never leaves
/// `[1, total_pages]`.
pub fn page_numbers(page: i64, total_pages: i64) -> Vec<i64> {
    if total_pages <= PAGE_BUTTON_COUNT {
        return (1..=total_pages).collect();
    }
    if page <= 3 {
        (1..=PAGE_BUTTON_COUNT).collect()
    } else if page >= total_pages - 2 {
        (total_pages - PAGE_BUTTON_COUNT + 1..=total_pages).collect()
    } else {
        (page - 2..=page + 2).collect()
    }
}

/// Clamp a user-provided page number to valid bounds (1-indexed).
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a user-provided page size to valid bounds.
pub fn clamp_page_size(page_size: Option<i64>) -> i64 {
    page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1).min(MAX_PAGE_SIZE)
}

// ---------------------------------------------------------------------------
// List state
// ---------------------------------------------------------------------------

/// Filter + page state for a paginated list, with a request generation
/// counter.
///
/// Every state change bumps `generation`; a fetch started under an older
/// generation is stale and its result must be discarded via [`is_current`].
/// Changing the filter always resets the page to 1 so a filter change can
/// never leave the list on an out-of-range page.
///
/// [`is_current`]: ListState::is_current
#[derive(Debug, Clone)]
pub struct ListState<F> {
    filter: F,
    page: i64,
    page_size: i64,
    generation: u64,
}

impl<F> ListState<F> {
    /// Create a list state on page 1 with the given filter.
    pub fn new(filter: F, page_size: i64) -> Self {
        Self {
            filter,
            page: 1,
            page_size: page_size.max(1),
            generation: 0,
        }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Replace the active filter, resetting the page to 1.
    ///
    /// Returns the generation token for the fetch this change triggers.
    pub fn set_filter(&mut self, filter: F) -> u64 {
        self.filter = filter;
        self.page = 1;
        self.generation += 1;
        self.generation
    }

    /// Move to another page (floored at 1).
    ///
    /// Returns the generation token for the fetch this change triggers.
    pub fn set_page(&mut self, page: i64) -> u64 {
        self.page = page.max(1);
        self.generation += 1;
        self.generation
    }

    /// The inclusive row window for the current page.
    pub fn window(&self) -> (i64, i64) {
        page_window(self.page, self.page_size)
    }

    /// Whether a response carrying `generation` is still the latest request.
    ///
    /// A `false` result means the filter or page changed while the fetch was
    /// in flight and the response must not be applied.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- page_window ---------------------------------------------------------

    #[test]
    fn window_first_page_starts_at_zero() {
        assert_eq!(page_window(1, 9), (0, 8));
    }

    #[test]
    fn window_advances_by_page_size() {
        assert_eq!(page_window(2, 9), (9, 17));
        assert_eq!(page_window(3, 9), (18, 26));
    }

    #[test]
    fn window_requests_exactly_page_size_rows() {
        for page in 1..=20 {
            for page_size in 1..=12 {
                let (start, end) = page_window(page, page_size);
                assert_eq!(start, (page - 1) * page_size);
                assert_eq!(end - start + 1, page_size);
            }
        }
    }

    // -- total_pages ---------------------------------------------------------

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(1, 9), 1);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(18, 9), 2);
        assert_eq!(total_pages(19, 9), 3);
    }

    #[test]
    fn total_pages_empty_normalizes_to_one() {
        assert_eq!(total_pages(0, 9), 1);
        assert_eq!(total_pages(0, 1), 1);
    }

    // -- page_numbers --------------------------------------------------------

    #[test]
    fn buttons_show_all_when_few_pages() {
        assert_eq!(page_numbers(1, 3), vec![1, 2, 3]);
        assert_eq!(page_numbers(3, 3), vec![1, 2, 3]);
        assert_eq!(page_numbers(2, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn buttons_pin_to_start_near_front() {
        assert_eq!(page_numbers(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(3, 10), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn buttons_pin_to_end_near_back() {
        assert_eq!(page_numbers(8, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_numbers(10, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn buttons_center_on_middle_pages() {
        assert_eq!(page_numbers(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_numbers(6, 11), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn buttons_are_contiguous_in_range_and_contain_page() {
        for total in 1..=30 {
            for page in 1..=total {
                let window = page_numbers(page, total);
                assert_eq!(window.len() as i64, total.min(PAGE_BUTTON_COUNT));
                assert!(window.contains(&page), "page {page} of {total} missing");
                assert!(*window.first().unwrap() >= 1);
                assert!(*window.last().unwrap() <= total);
                for pair in window.windows(2) {
                    assert_eq!(pair[1], pair[0] + 1, "window must be contiguous");
                }
            }
        }
    }

    // -- clamps --------------------------------------------------------------

    #[test]
    fn clamp_page_defaults_and_floors() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-3)), 1);
        assert_eq!(clamp_page(Some(7)), 7);
    }

    #[test]
    fn clamp_page_size_bounds() {
        assert_eq!(clamp_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some(0)), 1);
        assert_eq!(clamp_page_size(Some(500)), MAX_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some(12)), 12);
    }

    // -- ListState -----------------------------------------------------------

    #[test]
    fn filter_change_resets_page() {
        let mut state = ListState::new("all".to_string(), 9);
        state.set_page(7);
        assert_eq!(state.page(), 7);

        state.set_filter("commercial".to_string());
        assert_eq!(state.page(), 1);
        assert_eq!(state.filter(), "commercial");
    }

    #[test]
    fn filter_change_resets_page_from_any_prior_page() {
        for prior in 1..=50 {
            let mut state = ListState::new("all".to_string(), 9);
            state.set_page(prior);
            state.set_filter("custom".to_string());
            assert_eq!(state.page(), 1, "prior page {prior} must reset");
        }
    }

    #[test]
    fn stale_generation_is_rejected() {
        let mut state = ListState::new("all".to_string(), 9);
        let first = state.set_page(2);
        let second = state.set_filter("industrial".to_string());

        // The page-2 fetch settled after the filter changed: stale.
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn window_follows_page_changes() {
        let mut state = ListState::new((), 9);
        assert_eq!(state.window(), (0, 8));
        state.set_page(4);
        assert_eq!(state.window(), (27, 35));
    }

    #[test]
    fn page_floor_applies_to_set_page() {
        let mut state = ListState::new((), 9);
        state.set_page(-2);
        assert_eq!(state.page(), 1);
    }
}
