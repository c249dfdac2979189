//! Language-partitioned post ordering.
//!
//! A site may install a [`Localization`] capability on its
//! [`ContentStore`](super::ContentStore). When present, pages that declare a
//! language see only the posts of that language instead of the site-wide list.

use super::Item;
use std::fmt;

/// Capability: order the site's posts for one language.
pub trait Localization: fmt::Debug + Send + Sync {
    /// `posts` is the store's chronological list (oldest first).
    /// Returns the posts visible to `lang`, in the order they should be paginated.
    fn posts_by_language<'a>(&self, posts: &'a [Item], lang: &str) -> Vec<&'a Item>;
}

/// Posts tagged with the page language, plus posts with no language at all,
/// newest first.
#[derive(Debug, Default, Clone, Copy)]
pub struct LanguagePartition;

impl Localization for LanguagePartition {
    fn posts_by_language<'a>(&self, posts: &'a [Item], lang: &str) -> Vec<&'a Item> {
        posts
            .iter()
            .rev()
            .filter(|post| post.lang.as_deref().is_none_or(|l| l == lang))
            .collect()
    }
}
