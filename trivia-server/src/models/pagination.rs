//! Pagination types
//!
//! Question lists are served ten at a time. Page numbers are 1-based and a
//! page that selects nothing is an error at the operation layer, so unlike
//! most list endpoints the page number is never clamped into range here.

use serde::Serialize;

/// Fixed page size for question lists
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Page selection over an id-ordered result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Page of questions at the fixed page size.
    ///
    /// Returns `None` for pages below 1 or beyond `u32`, which can never
    /// select anything.
    pub fn questions(page: i64) -> Option<Self> {
        let page = u32::try_from(page).ok().filter(|p| *p >= 1)?;
        Some(Self {
            page,
            per_page: QUESTIONS_PER_PAGE,
        })
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        (u64::from(self.page) - 1) * u64::from(self.per_page)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    /// Slice `[(page-1)*per_page, page*per_page)` out of an ordered set.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset())
            .unwrap_or(usize::MAX)
            .min(items.len());
        let end = start.saturating_add(self.limit() as usize).min(items.len());
        &items[start..end]
    }
}

/// Paginated result
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl<T: Clone> Paginated<T> {
    /// Paginate an in-memory, already ordered result set.
    pub fn from_slice(all: &[T], page: Pagination) -> Self {
        Self {
            items: page.slice(all).to_vec(),
            total: all.len() as i64,
            page: page.page,
            per_page: page.per_page,
        }
    }
}

/// Parse the `page` query value.
///
/// Missing or non-integer values fall back to page 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(1)
}
