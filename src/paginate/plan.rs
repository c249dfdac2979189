//! Page planning: how many pages, and which items each page owns.

use super::PaginateError;
use crate::config::ConfigError;
use std::ops::Range;

/// Page layout of one paginated collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    /// Total pages, original page included (always `>= 1`)
    pub pages: usize,
    pub per_page: usize,
}

impl PagePlan {
    /// `pages = ceil(total / per_page)`, at least 1, capped at `limit`.
    pub fn new(total: usize, per_page: usize, limit: Option<usize>) -> Result<Self, PaginateError> {
        if per_page == 0 {
            return Err(ConfigError::Validation(
                "[pagination.per_page] must be a positive integer, got 0".into(),
            )
            .into());
        }
        if limit == Some(0) {
            return Err(ConfigError::Validation(
                "[pagination.limit] must be a positive integer, got 0".into(),
            )
            .into());
        }

        let mut pages = total.div_ceil(per_page).max(1);
        if let Some(limit) = limit {
            pages = pages.min(limit);
        }

        Ok(Self { pages, per_page })
    }

    /// Item range of the 1-based `page_num`, clamped to `len`.
    ///
    /// Out-of-range pages get an empty range.
    pub fn range(&self, page_num: usize, len: usize) -> Range<usize> {
        let start = page_num
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .min(len);
        let end = start.saturating_add(self.per_page).min(len);
        start..end
    }
}

/// Items of the 1-based `page_num` with `per_page` items per page.
pub fn slice<T>(items: &[T], page_num: usize, per_page: usize) -> &[T] {
    let plan = PagePlan {
        pages: usize::MAX,
        per_page: per_page.max(1),
    };
    &items[plan.range(page_num, items.len())]
}
