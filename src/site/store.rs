//! Collection storage.
//!
//! Holds the posts and every named collection of a site. Pagination reads
//! from here but never mutates it.

use super::{Item, Localization};
use std::{cmp::Ordering, collections::BTreeMap};

/// Name of the distinguished posts collection.
pub const POSTS: &str = "posts";

/// Compare two optional dates, oldest first. Undated items sort before dated ones.
fn compare_by_date(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Read-only store of the site's content collections.
#[derive(Debug, Default)]
pub struct ContentStore {
    /// Posts in chronological order (oldest first)
    posts: Vec<Item>,
    /// Named collections in stored order
    collections: BTreeMap<String, Vec<Item>>,
    /// Optional per-language post ordering
    localization: Option<Box<dyn Localization>>,
    /// Language assumed for pages that declare none
    default_language: Option<String>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the posts. They are sorted by date, oldest first; the sort is
    /// stable so undated or same-day posts keep their given order.
    pub fn set_posts(&mut self, mut posts: Vec<Item>) {
        posts.sort_by(|a, b| compare_by_date(&a.date, &b.date));
        self.posts = posts;
    }

    /// Insert or replace a named collection, kept in the given order.
    ///
    /// Inserting under [`POSTS`] replaces the posts instead.
    pub fn insert_collection(&mut self, name: impl Into<String>, items: Vec<Item>) {
        let name = name.into();
        if name == POSTS {
            self.set_posts(items);
        } else {
            self.collections.insert(name, items);
        }
    }

    pub fn with_localization(mut self, localization: impl Localization + 'static) -> Self {
        self.localization = Some(Box::new(localization));
        self
    }

    pub fn set_localization(&mut self, localization: Option<Box<dyn Localization>>) {
        self.localization = localization;
    }

    pub fn set_default_language(&mut self, lang: Option<String>) {
        self.default_language = lang;
    }

    /// Posts in chronological order (oldest first).
    pub fn posts(&self) -> &[Item] {
        &self.posts
    }

    /// Posts newest first, the default paginated order.
    pub fn posts_newest_first(&self) -> Vec<&Item> {
        self.posts.iter().rev().collect()
    }

    /// Posts for `lang`, falling back to the default language.
    ///
    /// `None` without a localization capability or without any language.
    pub fn posts_for_language(&self, lang: Option<&str>) -> Option<Vec<&Item>> {
        let lang = lang.or(self.default_language.as_deref())?;
        self.localization
            .as_ref()
            .map(|l| l.posts_by_language(&self.posts, lang))
    }

    /// A named collection in stored order; `None` if unknown.
    ///
    /// [`POSTS`] is not looked up here, see [`Self::posts`].
    pub fn collection(&self, name: &str) -> Option<&[Item]> {
        self.collections.get(name).map(Vec::as_slice)
    }
}
