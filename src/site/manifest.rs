//! Content manifest: a TOML description of a site's collections and pages.
//!
//! # Example
//!
//! ```toml
//! [[posts]]
//! url = "/posts/hello/"
//! title = "Hello"
//! date = "2024-01-15"
//! tags = ["rust"]
//!
//! [[collections.notes]]
//! url = "/notes/a/"
//!
//! [[pages]]
//! dir = "/blog/"
//! name = "index.html"
//! title = "Blog"
//! paginate = { per_page = 5 }
//!
//! [[pages]]
//! dir = "/notes/"
//! paginate = true
//! content = "{% paginate note in site.notes %}"
//! ```

use super::{Item, Page, page::Paginate};
use crate::{
    config::{ConfigError, PaginationOverrides, defaults},
    directive,
};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs,
    path::Path,
};

/// Root of the content manifest.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentManifest {
    #[serde(default)]
    pub posts: Vec<Item>,

    #[serde(default)]
    pub collections: BTreeMap<String, Vec<Item>>,

    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

/// A page's `paginate` front matter: `paginate = true` or a table of overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PaginateDecl {
    Enabled(bool),
    Overrides(PaginationOverrides),
}

impl PaginateDecl {
    fn into_overrides(self) -> Option<PaginationOverrides> {
        match self {
            Self::Enabled(true) => Some(PaginationOverrides::default()),
            Self::Enabled(false) => None,
            Self::Overrides(overrides) => Some(overrides),
        }
    }
}

/// One `[[pages]]` entry.
#[derive(Debug, Deserialize)]
pub struct PageEntry {
    #[serde(default = "defaults::manifest::dir")]
    pub dir: String,

    #[serde(default = "defaults::manifest::name")]
    pub name: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub permalink: Option<String>,

    #[serde(default)]
    pub lang: Option<String>,

    #[serde(default)]
    pub paginate: Option<PaginateDecl>,

    /// Template source; scanned for a paginate loop directive.
    #[serde(default)]
    pub content: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl PageEntry {
    /// Build the page rooted at the site source `base`.
    pub fn into_page(self, base: &Path) -> Page {
        let mut page = Page::new(base, self.dir, self.name);

        let paginate = self
            .paginate
            .and_then(PaginateDecl::into_overrides)
            .map(|mut overrides| {
                if overrides.collection.is_none()
                    && let Some(name) = self.content.as_deref().and_then(directive::collection)
                {
                    overrides.collection = Some(name.to_owned());
                }
                Paginate::Requested(overrides)
            });

        page.data.title = self.title;
        page.data.permalink = self.permalink;
        page.data.lang = self.lang;
        page.data.paginate = paginate;
        page.data.extra = self.extra;
        page
    }
}

impl ContentManifest {
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }
}
