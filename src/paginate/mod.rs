//! Collection pagination.
//!
//! Splits a collection into fixed-size pages and generates one page per chunk
//! beyond the first, wired together with previous/next links.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────┐   ┌───────────────┐   ┌──────────┐
//! │ config       │──►│ select       │──►│ plan     │──►│ materialize   │──►│ stitch   │
//! │ (3 layers)   │   │ (order/filter│   │ (count)  │   │ (page 2..=N)  │   │ (links)  │
//! └──────────────┘   └──────────────┘   └──────────┘   └───────────────┘   └──────────┘
//!
//!                       later, once per page at render time:
//!                       payload::paginator(store, page) ──► template data
//! ```
//!
//! Planning either succeeds for the whole sequence or leaves the page as it was.

mod error;
pub mod materialize;
pub mod payload;
pub mod plan;
pub mod select;
pub mod stitch;

pub use error::PaginateError;
pub use payload::{Paginator, Payload, page_payload, paginator};
pub use plan::PagePlan;

use crate::{
    config::{PaginationDefaults, SiteConfig, pagination},
    site::{ContentStore, Page, page::Paginate},
};

/// Paginate `page`, returning the generated pages 2..=N in order.
///
/// `page` must be in the `Requested` state; anything else is a no-op that
/// returns no pages, so a page is never paginated twice. On success `page`
/// holds its resolved config with `page_num = 1` and links to page 2.
///
/// Generated pages are not registered anywhere; see
/// [`Site::paginate_page`](crate::site::Site::paginate_page) for that.
pub fn paginate(
    page: &mut Page,
    store: &ContentStore,
    site: &SiteConfig,
    defaults: &PaginationDefaults,
) -> Result<Vec<Page>, PaginateError> {
    let Some(Paginate::Requested(overrides)) = &page.data.paginate else {
        return Ok(Vec::new());
    };

    let mut config = pagination::resolve(defaults, site.pagination.as_ref(), overrides)?;
    let items = select::select(store, &config, page.data.lang.as_deref())?;
    let plan = PagePlan::new(items.len(), config.per_page, config.limit)?;
    config.pages = plan.pages;
    config.page_num = 1;

    let mut generated = materialize::materialize(page, &config);
    page.data.paginate = Some(Paginate::Resolved(config));

    let mut sequence: Vec<&mut Page> = std::iter::once(page)
        .chain(generated.iter_mut())
        .collect();
    stitch::stitch(&mut sequence);

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{DEFAULTS, PaginationOverrides},
        site::Item,
    };

    fn store(n: usize) -> ContentStore {
        let mut store = ContentStore::new();
        store.set_posts(
            (0..n)
                .map(|i| {
                    Item::new(format!("/posts/{i}/"))
                        .with_date(format!("{i:05}"))
                        .with_tags(if i % 2 == 0 { ["even"] } else { ["odd"] })
                })
                .collect(),
        );
        store
    }

    fn requested(toml_str: &str) -> Page {
        let overrides: PaginationOverrides = toml::from_str(toml_str).unwrap();
        Page::new("/site", "/blog/", "index.html").with_paginate(overrides)
    }

    fn run(page: &mut Page, store: &ContentStore) -> Result<Vec<Page>, PaginateError> {
        paginate(page, store, &SiteConfig::default(), &DEFAULTS)
    }

    #[test]
    fn test_scenario_a() {
        let store = store(25);
        let mut page = requested("limit = false");
        let generated = run(&mut page, &store).unwrap();

        assert_eq!(generated.len(), 2);
        assert_eq!(page.pagination().unwrap().pages, 3);

        let all: Vec<&Page> = std::iter::once(&page).chain(&generated).collect();
        let sizes: Vec<usize> = all
            .iter()
            .map(|p| paginator(&store, p).unwrap().items.len())
            .collect();
        assert_eq!(sizes, [10, 10, 5]);
    }

    #[test]
    fn test_scenario_b_limit_caps_pages() {
        let store = store(100);
        let mut page = requested("");
        let generated = run(&mut page, &store).unwrap();

        assert_eq!(page.pagination().unwrap().pages, 5);
        assert_eq!(generated.len(), 4);

        let last = paginator(&store, &generated[3]).unwrap();
        assert_eq!(last.total_pages, 5);
        assert_eq!(last.total_items, 100);
        assert_eq!(last.next_page, None);
    }

    #[test]
    fn test_scenario_e_empty() {
        let store = store(0);
        let mut page = requested("");
        let generated = run(&mut page, &store).unwrap();

        assert!(generated.is_empty());
        let paginator = paginator(&store, &page).unwrap();
        assert!(paginator.items.is_empty());
        assert_eq!(paginator.total_pages, 1);
        assert_eq!(paginator.previous_page, None);
        assert_eq!(paginator.next_page, None);
    }

    #[test]
    fn test_original_links_to_generated() {
        let store = store(30);
        let mut page = requested("per_page = 10");
        let generated = run(&mut page, &store).unwrap();

        let first = page.pagination().unwrap();
        assert_eq!(first.page_num, 1);
        assert_eq!(first.next_page, Some(2));
        assert_eq!(first.next_page_path.as_deref(), Some("/blog/page2/"));

        let second = generated[0].pagination().unwrap();
        assert_eq!(second.previous_page_path.as_deref(), Some("/blog/"));
        assert_eq!(second.next_page_path.as_deref(), Some("/blog/page3/"));
    }

    #[test]
    fn test_every_item_on_one_page() {
        let store = store(23);
        let mut page = requested("per_page = 4\nlimit = false");
        let generated = run(&mut page, &store).unwrap();

        let all: Vec<&Page> = std::iter::once(&page).chain(&generated).collect();
        let expected = select::select(&store, page.pagination().unwrap(), None).unwrap();

        for (i, item) in expected.iter().enumerate() {
            let owners: Vec<usize> = all
                .iter()
                .filter(|p| paginator(&store, p).unwrap().items.contains(item))
                .map(|p| p.pagination().unwrap().page_num)
                .collect();
            assert_eq!(owners, [i / 4 + 1]);
        }
    }

    #[test]
    fn test_filtered_pagination() {
        let store = store(20);
        let mut page = requested("per_page = 4\ntag = \"even\"");
        let generated = run(&mut page, &store).unwrap();

        assert_eq!(page.pagination().unwrap().pages, 3);
        assert_eq!(generated.len(), 2);
        for p in std::iter::once(&page).chain(&generated) {
            let paginator = paginator(&store, p).unwrap();
            assert_eq!(paginator.total_items, 10);
            assert!(paginator.items.iter().all(|i| i.tags.contains("even")));
        }
    }

    #[test]
    fn test_site_layer_applies() {
        let store = store(12);
        let site = SiteConfig::from_str("[pagination]\nper_page = 3\nlimit = false").unwrap();
        let mut page = requested(r#"permalink = "/p/:num/""#);

        let generated = paginate(&mut page, &store, &site, &DEFAULTS).unwrap();
        assert_eq!(generated.len(), 3);
        assert_eq!(generated[2].url(), "/blog/p/4/");
    }

    #[test]
    fn test_second_run_is_noop() {
        let store = store(25);
        let mut page = requested("");
        let first = run(&mut page, &store).unwrap();
        assert_eq!(first.len(), 2);

        let snapshot = page.data.clone();
        assert!(run(&mut page, &store).unwrap().is_empty());
        assert_eq!(page.data, snapshot);
    }

    #[test]
    fn test_rerun_on_fresh_page_is_identical() {
        let store = store(37);
        let summary = |generated: &[Page]| -> Vec<(String, Option<String>)> {
            generated
                .iter()
                .map(|p| (p.url(), p.data.title.clone()))
                .collect()
        };

        let mut a = requested("per_page = 5");
        let mut b = requested("per_page = 5");
        let first = run(&mut a, &store).unwrap();
        let second = run(&mut b, &store).unwrap();

        assert_eq!(summary(&first), summary(&second));
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn test_original_is_always_first_page() {
        let store = store(25);
        let mut page = requested("page_num = 7\nlimit = false");
        let generated = run(&mut page, &store).unwrap();

        let first = page.pagination().unwrap();
        assert_eq!(first.pages, 3);
        assert_eq!(first.page_num, 1);
        assert_eq!(first.next_page, Some(2));

        let payload = paginator(&store, &page).unwrap();
        assert_eq!(payload.page, 1);
        assert_eq!(payload.items.len(), 10);

        let nums: Vec<usize> = generated
            .iter()
            .map(|p| p.pagination().unwrap().page_num)
            .collect();
        assert_eq!(nums, [2, 3]);
    }

    #[test]
    fn test_unpaginated_page_untouched() {
        let store = store(5);
        let mut page = Page::new("/site", "/", "about.md");
        assert!(run(&mut page, &store).unwrap().is_empty());
        assert!(page.data.paginate.is_none());
    }

    #[test]
    fn test_failure_leaves_page_requested() {
        let store = store(5);
        let mut page = requested(r#"collection = "missing""#);

        let err = run(&mut page, &store).unwrap_err();
        assert!(matches!(err, PaginateError::UnknownCollection(_)));
        assert!(page.is_pagination_requested());

        let mut page = requested("per_page = 0");
        assert!(run(&mut page, &store).unwrap_err().is_configuration());
        assert!(page.is_pagination_requested());
    }
}
