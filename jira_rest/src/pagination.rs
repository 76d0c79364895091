use serde::Serialize;

use crate::{JiraError, Result};

/// Paging metadata derived from the `total`, `startAt` and `maxResults` counters of a search.
///
/// `page` and `page_count` are computed, use [`Pagination::compute`] to obtain one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total: u32,
    pub start_at: u32,
    pub max_results: u32,
    /// Zero based index of the page `start_at` falls on, rounded up
    pub page: u32,
    pub page_count: u32,
    /// `0..page_count`, handy for rendering page selectors
    pub pages: Vec<u32>,
}

impl Pagination {
    /// # Errors
    /// [`JiraError::InvalidArgument`] if `max_results` is zero
    pub fn compute(total: u32, start_at: u32, max_results: u32) -> Result<Pagination> {
        if max_results == 0 {
            return Err(JiraError::InvalidArgument(
                "max_results must be greater than zero".to_string(),
            ));
        }
        let page_count = total.div_ceil(max_results);
        Ok(Pagination {
            total,
            start_at,
            max_results,
            page: start_at.div_ceil(max_results),
            page_count,
            pages: (0..page_count).collect(),
        })
    }

    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.page_count == 0 || self.page + 1 >= self.page_count
    }
}
