//! Pages: documents rendered and written as one output unit.
//!
//! A paginated page goes through two states:
//!
//! ```text
//! Paginate::Requested(overrides) ──paginate()──► Paginate::Resolved(config)
//! ```
//!
//! Pages generated by pagination are born `Resolved`.

use crate::{
    config::{PaginationConfig, PaginationOverrides},
    utils::url,
};
use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

// ============================================================================
// Page Data
// ============================================================================

/// Pagination state carried in a page's metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum Paginate {
    /// The page asked for pagination; not planned yet.
    Requested(PaginationOverrides),
    /// Planned; this is the page's own config.
    Resolved(PaginationConfig),
}

/// Mutable page metadata (front matter).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageData {
    pub title: Option<String>,
    /// Output URL override; when set it is the page URL.
    pub permalink: Option<String>,
    pub lang: Option<String>,
    pub paginate: Option<Paginate>,
    /// Any other front matter
    pub extra: BTreeMap<String, toml::Value>,
}

// ============================================================================
// Page Construction
// ============================================================================

/// Metadata a generated page is seeded with.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSeed {
    pub title: String,
    pub permalink: String,
    pub paginate: PaginationConfig,
}

/// Capability: build a generated page from its original and a seed.
///
/// Closures `Fn(&Page, PageSeed) -> Page` implement this, which is how a page
/// produced by some other generator delegates construction back to it.
pub trait PageFactory: Send + Sync {
    fn create(&self, original: &Page, seed: PageSeed) -> Page;
}

impl<F> PageFactory for F
where
    F: Fn(&Page, PageSeed) -> Page + Send + Sync,
{
    fn create(&self, original: &Page, seed: PageSeed) -> Page {
        self(original, seed)
    }
}

/// Plain construction: same source root and source file as the original,
/// placed in the seed's permalink directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPageFactory;

impl PageFactory for DefaultPageFactory {
    fn create(&self, original: &Page, seed: PageSeed) -> Page {
        let mut page = Page::new(&original.base, seed.permalink.clone(), original.name.clone());
        page.data = PageData {
            title: Some(seed.title),
            permalink: Some(seed.permalink),
            lang: original.data.lang.clone(),
            paginate: Some(Paginate::Resolved(seed.paginate)),
            extra: original.data.extra.clone(),
        };
        page
    }
}

// ============================================================================
// Page
// ============================================================================

/// A document entity of the site.
#[derive(Clone)]
pub struct Page {
    /// Site source root
    pub base: PathBuf,
    /// URL directory (e.g., "/blog/")
    pub dir: String,
    /// Source base filename (e.g., "index.html")
    pub name: String,
    pub data: PageData,
    factory: Option<Arc<dyn PageFactory>>,
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("base", &self.base)
            .field("dir", &self.dir)
            .field("name", &self.name)
            .field("data", &self.data)
            .field("factory", &self.factory.is_some())
            .finish()
    }
}

impl Page {
    pub fn new(base: impl AsRef<Path>, dir: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
            dir: dir.into(),
            name: name.into(),
            data: PageData::default(),
            factory: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.data.title = Some(title.into());
        self
    }

    pub fn with_paginate(mut self, overrides: PaginationOverrides) -> Self {
        self.data.paginate = Some(Paginate::Requested(overrides));
        self
    }

    /// Declare that generated siblings of this page must be built by `factory`.
    pub fn with_factory(mut self, factory: Arc<dyn PageFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// The page's own construction capability, if it declares one.
    pub fn factory(&self) -> Option<&dyn PageFactory> {
        self.factory.as_deref()
    }

    /// URL the page is written to.
    ///
    /// | permalink | dir | name | url |
    /// |-----------|-----|------|-----|
    /// | `/x/page2/` | any | any | `/x/page2/` |
    /// | - | `/blog/` | `index.html` | `/blog/` |
    /// | - | `/` | `about.md` | `/about.html` |
    pub fn url(&self) -> String {
        if let Some(permalink) = &self.data.permalink {
            return permalink.clone();
        }

        let stem = Path::new(&self.name)
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();

        if stem == "index" || stem.is_empty() {
            url::join(&self.dir, "")
        } else {
            url::join(&self.dir, &format!("{stem}.html"))
        }
    }

    pub fn is_pagination_requested(&self) -> bool {
        matches!(self.data.paginate, Some(Paginate::Requested(_)))
    }

    /// The resolved pagination config, once planned.
    pub fn pagination(&self) -> Option<&PaginationConfig> {
        match &self.data.paginate {
            Some(Paginate::Resolved(config)) => Some(config),
            _ => None,
        }
    }

    pub fn pagination_mut(&mut self) -> Option<&mut PaginationConfig> {
        match &mut self.data.paginate {
            Some(Paginate::Resolved(config)) => Some(config),
            _ => None,
        }
    }
}
