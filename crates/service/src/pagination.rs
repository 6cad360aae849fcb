//! Page-number pagination for the profile listing.
//!
//! `page` is 1-based. A page past the end is valid and simply empty; a page
//! that is not a positive integer is reported as not-found.

use serde::Serialize;

use crate::errors::ServiceError;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
pub const INVALID_PAGE: &str = "Invalid page.";

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub page_size: u64,
}

impl Default for PageRequest {
    fn default() -> Self { Self { page: 1, page_size: DEFAULT_PAGE_SIZE } }
}

impl PageRequest {
    /// Interpret raw `page` / `page_size` query values.
    ///
    /// A missing, non-numeric or non-positive `page_size` falls back to the
    /// default; anything above [`MAX_PAGE_SIZE`] is clamped.
    pub fn from_query(page: Option<&str>, page_size: Option<&str>) -> Result<Self, ServiceError> {
        let page = match page.map(str::trim) {
            None => 1,
            Some(raw) => match raw.parse::<u64>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(ServiceError::NotFound(INVALID_PAGE.into())),
            },
        };
        let page_size = page_size
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|n| *n >= 1)
            .map_or(DEFAULT_PAGE_SIZE, |n| n.min(MAX_PAGE_SIZE));
        Ok(Self { page, page_size })
    }

    /// Saturates for huge pages; compare against the row count before binding.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// One page of results plus what is needed to link to its neighbours.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub count: u64,
    pub page: u64,
    pub page_size: u64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Never zero: an empty collection still has an (empty) first page.
    pub fn total_pages(&self) -> u64 {
        self.count.div_ceil(self.page_size).max(1)
    }

    pub fn next_page(&self) -> Option<u64> {
        (self.page < self.total_pages()).then(|| self.page + 1)
    }

    /// From past the end this points back at the last real page.
    pub fn previous_page(&self) -> Option<u64> {
        (self.page > 1).then(|| (self.page - 1).min(self.total_pages()))
    }
}
