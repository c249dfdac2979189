//! Site model: content collections, pages, and the page registry.
//!
//! # Architecture
//!
//! ```text
//! tola.toml ──► SiteConfig ─┐
//!                           ├──► Site { content: ContentStore, pages: Vec<Page> }
//! content.toml ──► Manifest ┘                 │
//!                                             │ paginate_all()
//!                                             ▼
//!                     pages = [hand-authored..., generated page 2..N, ...]
//! ```

mod item;
mod lang;
pub mod manifest;
pub mod page;
mod store;

pub use item::Item;
pub use lang::{LanguagePartition, Localization};
pub use manifest::ContentManifest;
pub use page::{DefaultPageFactory, Page, PageData, PageFactory, PageSeed, Paginate};
pub use store::{ContentStore, POSTS};

use crate::{
    config::{DEFAULTS, PaginationDefaults, SiteConfig},
    log,
    paginate::{self, PaginateError, Payload},
};
use std::path::{Path, PathBuf};

/// Outcome of paginating every requested page of a site.
#[derive(Debug, Default)]
pub struct PaginationSummary {
    /// Pages that were paginated successfully
    pub paginated: usize,
    /// Pages generated across all of them
    pub generated: usize,
    /// Pages left unpaginated, by URL
    pub failures: Vec<(String, PaginateError)>,
}

impl PaginationSummary {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A site: its configuration, content and page registry.
#[derive(Debug)]
pub struct Site {
    pub config: SiteConfig,
    pub defaults: PaginationDefaults,
    /// Site source root
    pub source: PathBuf,
    pub content: ContentStore,
    pub pages: Vec<Page>,
}

impl Site {
    /// Empty site. `[base] multilingual` installs the language partition,
    /// with `[base] language` for pages that declare no language.
    pub fn new(config: SiteConfig, source: impl AsRef<Path>) -> Self {
        let mut content = ContentStore::new();
        if config.base.multilingual {
            content.set_localization(Some(Box::new(LanguagePartition)));
            content.set_default_language(Some(config.base.language.clone()));
        }

        Self {
            config,
            defaults: DEFAULTS,
            source: source.as_ref().to_path_buf(),
            content,
            pages: Vec::new(),
        }
    }

    /// Site populated from a content manifest.
    pub fn from_manifest(
        config: SiteConfig,
        source: impl AsRef<Path>,
        manifest: ContentManifest,
    ) -> Self {
        let mut site = Self::new(config, source);
        site.content.set_posts(manifest.posts);
        for (name, items) in manifest.collections {
            site.content.insert_collection(name, items);
        }
        for entry in manifest.pages {
            let page = entry.into_page(&site.source);
            site.add_page(page);
        }
        site
    }

    /// Register a page; returns its index.
    pub fn add_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    pub fn find_page(&self, url: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.url() == url)
    }

    /// Paginate the page at `index` and register the generated pages.
    ///
    /// Returns the newly registered pages; empty if the page did not ask for
    /// pagination or was already paginated.
    pub fn paginate_page(&mut self, index: usize) -> Result<&[Page], PaginateError> {
        let page = self
            .pages
            .get_mut(index)
            .ok_or(PaginateError::UnknownPage(index))?;
        let generated = paginate::paginate(
            page,
            &self.content,
            &self.config,
            &self.defaults,
        )?;

        let start = self.pages.len();
        self.pages.extend(generated);
        Ok(&self.pages[start..])
    }

    /// Paginate every page that asked for it.
    ///
    /// A failing page is logged, recorded in the summary and left
    /// unpaginated; the remaining pages are still processed.
    pub fn paginate_all(&mut self) -> PaginationSummary {
        let requested: Vec<usize> = self
            .pages
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_pagination_requested())
            .map(|(i, _)| i)
            .collect();

        let mut summary = PaginationSummary::default();
        for index in requested {
            let url = self.pages[index].url();
            match self.paginate_page(index) {
                Ok(generated) => {
                    let count = generated.len();
                    log!("paginate"; "{url}: {} page(s), {count} generated", count + 1);
                    summary.paginated += 1;
                    summary.generated += count;
                }
                Err(err) => {
                    log!("error"; "{url}: {err}");
                    summary.failures.push((url, err));
                }
            }
        }
        summary
    }

    /// Render-time payload of `page`; `None` if it is not paginated.
    pub fn payload<'a>(&'a self, page: &'a Page) -> Result<Option<Payload<'a>>, PaginateError> {
        paginate::page_payload(&self.content, page)
    }

    /// Pages carrying a resolved pagination config, in registry order.
    pub fn paginated_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|p| p.pagination().is_some())
    }
}
