//! Render-time paginator payload.
//!
//! Built on demand for one page, after planning and stitching are done.
//! Reads the store and the page, mutates neither, so it may be called for
//! many pages concurrently.
//!
//! # Shape
//!
//! ```json
//! {
//!   "paginator": {
//!     "posts": [ ...items of this page... ],
//!     "page": 2,
//!     "per_page": 10,
//!     "limit": 5,
//!     "total_posts": 42,
//!     "total_pages": 5,
//!     "previous_page": 1,
//!     "previous_page_path": "/blog/",
//!     "next_page": 3,
//!     "next_page_path": "/blog/page3/"
//!   }
//! }
//! ```
//!
//! The item key and the `total_` key follow the collection name.

use super::{PaginateError, plan, select::select};
use crate::site::{ContentStore, Item, Page};
use serde::{Serialize, Serializer, ser::SerializeMap};

/// Paginator data of one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginator<'a> {
    pub collection: &'a str,
    /// Items on this page
    pub items: Vec<&'a Item>,
    pub page: usize,
    pub per_page: usize,
    pub limit: Option<usize>,
    /// Size of the whole filtered collection, unreachable items included
    pub total_items: usize,
    pub total_pages: usize,
    pub previous_page: Option<usize>,
    pub previous_page_path: Option<&'a str>,
    pub next_page: Option<usize>,
    pub next_page_path: Option<&'a str>,
}

impl Serialize for Paginator<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(10))?;
        map.serialize_entry(self.collection, &self.items)?;
        map.serialize_entry("page", &self.page)?;
        map.serialize_entry("per_page", &self.per_page)?;
        map.serialize_entry("limit", &self.limit)?;
        map.serialize_entry(&format!("total_{}", self.collection), &self.total_items)?;
        map.serialize_entry("total_pages", &self.total_pages)?;
        map.serialize_entry("previous_page", &self.previous_page)?;
        map.serialize_entry("previous_page_path", &self.previous_page_path)?;
        map.serialize_entry("next_page", &self.next_page)?;
        map.serialize_entry("next_page_path", &self.next_page_path)?;
        map.end()
    }
}

/// Everything a template gets from pagination, under `paginator`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payload<'a> {
    pub paginator: Paginator<'a>,
}

/// Build the paginator of `page`.
///
/// Fails with [`PaginateError::NotPaginated`] when the page has no resolved
/// pagination config.
pub fn paginator<'a>(
    store: &'a ContentStore,
    page: &'a Page,
) -> Result<Paginator<'a>, PaginateError> {
    let config = page
        .pagination()
        .ok_or_else(|| PaginateError::NotPaginated(page.url()))?;

    let collection = select(store, config, page.data.lang.as_deref())?;
    let items = plan::slice(&collection, config.page_num, config.per_page).to_vec();

    Ok(Paginator {
        collection: &config.collection,
        items,
        page: config.page_num,
        per_page: config.per_page,
        limit: config.limit,
        total_items: collection.len(),
        total_pages: config.pages,
        previous_page: config.previous_page,
        previous_page_path: config.previous_page_path.as_deref(),
        next_page: config.next_page,
        next_page_path: config.next_page_path.as_deref(),
    })
}

/// Template payload of `page`; `None` for pages that are not paginated.
pub fn page_payload<'a>(
    store: &'a ContentStore,
    page: &'a Page,
) -> Result<Option<Payload<'a>>, PaginateError> {
    match paginator(store, page) {
        Ok(paginator) => Ok(Some(Payload { paginator })),
        Err(PaginateError::NotPaginated(_)) => Ok(None),
        Err(err) => Err(err),
    }
}
