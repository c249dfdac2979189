//! `[pagination]` section and per-page `paginate` overrides.
//!
//! Three layers are merged into one [`PaginationConfig`], lowest to highest:
//!
//! ```text
//! PaginationDefaults  <  [pagination] in tola.toml  <  page `paginate` table
//! ```
//!
//! The merge is shallow: a key set at a higher layer replaces the lower value,
//! everything else falls through.

use super::{defaults, error::ConfigError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ============================================================================
// Built-in Defaults
// ============================================================================

/// Immutable built-in pagination values.
///
/// Passed into [`resolve`] explicitly so callers can swap the table in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationDefaults {
    pub collection: &'static str,
    pub per_page: usize,
    pub limit: Option<usize>,
    pub permalink: &'static str,
    pub title_suffix: &'static str,
    pub page_num: usize,
    pub reversed: bool,
}

/// The stock defaults table.
pub const DEFAULTS: PaginationDefaults = PaginationDefaults {
    collection: defaults::pagination::COLLECTION,
    per_page: defaults::pagination::PER_PAGE,
    limit: defaults::pagination::LIMIT,
    permalink: defaults::pagination::PERMALINK,
    title_suffix: defaults::pagination::TITLE_SUFFIX,
    page_num: defaults::pagination::PAGE_NUM,
    reversed: defaults::pagination::REVERSED,
};

impl Default for PaginationDefaults {
    fn default() -> Self {
        DEFAULTS
    }
}

// ============================================================================
// Override Layer
// ============================================================================

/// Page-count cap as written by the user: `limit = 3` or `limit = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LimitSetting {
    Toggle(bool),
    Pages(i64),
}

/// A single label or a list of labels (`tag = "rust"` / `tag = ["rust", "web"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_set(self) -> BTreeSet<String> {
        match self {
            Self::One(label) => BTreeSet::from([label]),
            Self::Many(labels) => labels.into_iter().collect(),
        }
    }
}

/// One override layer, either `[pagination]` or a page's `paginate` table.
///
/// Every field is optional; unrecognized keys land in `extra` and are
/// forwarded to the resolved config untouched.
///
/// # Example
/// ```toml
/// [pagination]
/// per_page = 5
/// limit = false
/// permalink = "/blog/page:num/"
/// tag = "rust"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<LimitSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<OneOrMany>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<OneOrMany>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<OneOrMany>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<OneOrMany>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl PaginationOverrides {
    /// Layer `higher` on top of `self`.
    pub fn merge(self, higher: Self) -> Self {
        let mut extra = self.extra;
        extra.extend(higher.extra);

        Self {
            collection: higher.collection.or(self.collection),
            per_page: higher.per_page.or(self.per_page),
            limit: higher.limit.or(self.limit),
            permalink: higher.permalink.or(self.permalink),
            title_suffix: higher.title_suffix.or(self.title_suffix),
            page_num: higher.page_num.or(self.page_num),
            reversed: higher.reversed.or(self.reversed),
            tag: higher.tag.or(self.tag),
            tags: higher.tags.or(self.tags),
            category: higher.category.or(self.category),
            categories: higher.categories.or(self.categories),
            extra,
        }
    }
}

// ============================================================================
// Resolved Config
// ============================================================================

/// Keys computed by planning and stitching; users may not set them.
const COMPUTED_KEYS: [&str; 5] = [
    "pages",
    "previous_page",
    "previous_page_path",
    "next_page",
    "next_page_path",
];

/// Effective pagination settings of one page.
///
/// `pages` and the four navigation fields are filled in by the planner and
/// the link stitcher; they stay at their initial values until then.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationConfig {
    pub collection: String,
    pub per_page: usize,
    pub limit: Option<usize>,
    pub permalink: String,
    pub title_suffix: String,
    pub page_num: usize,
    pub reversed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeSet<String>>,
    pub pages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_path: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl PaginationConfig {
    /// Apply one merged override layer on top of `defaults`.
    pub fn from_layers(
        defaults: &PaginationDefaults,
        layer: PaginationOverrides,
    ) -> Result<Self, ConfigError> {
        if let Some(key) = COMPUTED_KEYS.iter().find(|k| layer.extra.contains_key(**k)) {
            return Err(ConfigError::Validation(format!(
                "[pagination.{key}] is computed and cannot be set"
            )));
        }

        let collection = layer
            .collection
            .unwrap_or_else(|| defaults.collection.to_owned());
        if collection.trim().is_empty() {
            return Err(ConfigError::Validation(
                "[pagination.collection] must not be empty".into(),
            ));
        }

        let per_page = match layer.per_page {
            Some(value) => positive("per_page", value)?,
            None => defaults.per_page,
        };

        let limit = match layer.limit {
            None => defaults.limit,
            Some(LimitSetting::Toggle(false)) => None,
            Some(LimitSetting::Toggle(true)) => {
                return Err(ConfigError::Validation(
                    "[pagination.limit] must be a positive integer or false".into(),
                ));
            }
            Some(LimitSetting::Pages(value)) => Some(positive("limit", value)?),
        };

        let page_num = match layer.page_num {
            Some(value) => positive("page_num", value)?,
            None => defaults.page_num,
        };

        // Singular keys win over plural ones.
        let tags = layer.tag.or(layer.tags).map(OneOrMany::into_set);
        let categories = layer
            .category
            .or(layer.categories)
            .map(OneOrMany::into_set);

        Ok(Self {
            collection,
            per_page,
            limit,
            permalink: layer
                .permalink
                .unwrap_or_else(|| defaults.permalink.to_owned()),
            title_suffix: layer
                .title_suffix
                .unwrap_or_else(|| defaults.title_suffix.to_owned()),
            page_num,
            reversed: layer.reversed.unwrap_or(defaults.reversed),
            tags,
            categories,
            pages: 1,
            previous_page: None,
            previous_page_path: None,
            next_page: None,
            next_page_path: None,
            extra: layer.extra,
        })
    }

    /// Drop any navigation links, leaving the rest untouched.
    pub fn clear_links(&mut self) {
        self.previous_page = None;
        self.previous_page_path = None;
        self.next_page = None;
        self.next_page_path = None;
    }
}

/// Merge defaults, the site-wide layer and the page layer into one config.
pub fn resolve(
    defaults: &PaginationDefaults,
    site: Option<&PaginationOverrides>,
    page: &PaginationOverrides,
) -> Result<PaginationConfig, ConfigError> {
    let merged = site.cloned().unwrap_or_default().merge(page.clone());
    PaginationConfig::from_layers(defaults, merged)
}

fn positive(field: &str, value: i64) -> Result<usize, ConfigError> {
    usize::try_from(value)
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| {
            ConfigError::Validation(format!(
                "[pagination.{field}] must be a positive integer, got {value}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(toml_str: &str) -> PaginationOverrides {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_defaults_only() {
        let config = resolve(&DEFAULTS, None, &PaginationOverrides::default()).unwrap();

        assert_eq!(config.collection, "posts");
        assert_eq!(config.per_page, 10);
        assert_eq!(config.limit, Some(5));
        assert_eq!(config.permalink, "/page:num/");
        assert_eq!(config.title_suffix, " - page :num");
        assert_eq!(config.page_num, 1);
        assert!(!config.reversed);
        assert_eq!(config.tags, None);
        assert_eq!(config.categories, None);
        assert_eq!(config.pages, 1);
    }

    #[test]
    fn test_precedence() {
        let site = layer(
            r#"
            per_page = 5
            permalink = "/blog/page:num/"
            reversed = true
            "#,
        );
        let page = layer(
            r#"
            per_page = 3
            collection = "docs"
            "#,
        );
        let config = resolve(&DEFAULTS, Some(&site), &page).unwrap();

        assert_eq!(config.per_page, 3);
        assert_eq!(config.collection, "docs");
        assert_eq!(config.permalink, "/blog/page:num/");
        assert!(config.reversed);
        assert_eq!(config.limit, Some(5));
    }

    #[test]
    fn test_limit_false_disables_cap() {
        let config = resolve(&DEFAULTS, None, &layer("limit = false")).unwrap();
        assert_eq!(config.limit, None);

        let config = resolve(&DEFAULTS, None, &layer("limit = 2")).unwrap();
        assert_eq!(config.limit, Some(2));
    }

    #[test]
    fn test_limit_true_rejected() {
        let err = resolve(&DEFAULTS, None, &layer("limit = true")).unwrap_err();
        assert!(err.to_string().contains("limit"));
    }

    #[test]
    fn test_non_positive_per_page_rejected() {
        for value in ["0", "-4"] {
            let err = resolve(&DEFAULTS, None, &layer(&format!("per_page = {value}")))
                .unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)));
            assert!(err.to_string().contains("per_page"));
        }
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(resolve(&DEFAULTS, None, &layer("limit = 0")).is_err());
    }

    #[test]
    fn test_empty_collection_rejected() {
        assert!(resolve(&DEFAULTS, None, &layer(r#"collection = """#)).is_err());
    }

    #[test]
    fn test_singular_tag_normalized() {
        let config = resolve(&DEFAULTS, None, &layer(r#"tag = "go""#)).unwrap();
        assert_eq!(config.tags, Some(BTreeSet::from(["go".to_string()])));

        let config =
            resolve(&DEFAULTS, None, &layer(r#"category = ["news", "rust"]"#)).unwrap();
        assert_eq!(
            config.categories,
            Some(BTreeSet::from(["news".to_string(), "rust".to_string()]))
        );
    }

    #[test]
    fn test_singular_wins_over_plural() {
        let site = layer(r#"tag = "site""#);
        let page = layer(r#"tags = ["page"]"#);
        let config = resolve(&DEFAULTS, Some(&site), &page).unwrap();
        assert_eq!(config.tags, Some(BTreeSet::from(["site".to_string()])));
    }

    #[test]
    fn test_plural_tags_accepted() {
        let config = resolve(&DEFAULTS, None, &layer(r#"tags = ["a", "b"]"#)).unwrap();
        assert_eq!(config.tags.map(|t| t.len()), Some(2));
    }

    #[test]
    fn test_passthrough_keys_forwarded() {
        let site = layer(r#"layout = "list""#);
        let page = layer(r#"sidebar = false"#);
        let config = resolve(&DEFAULTS, Some(&site), &page).unwrap();

        assert_eq!(
            config.extra.get("layout"),
            Some(&toml::Value::String("list".into()))
        );
        assert_eq!(config.extra.get("sidebar"), Some(&toml::Value::Boolean(false)));
    }

    #[test]
    fn test_computed_keys_rejected() {
        for key in COMPUTED_KEYS {
            let err = resolve(&DEFAULTS, None, &layer(&format!("{key} = 9"))).unwrap_err();
            assert!(err.to_string().contains(key));
        }

        let site = layer("next_page_path = \"/x/\"");
        assert!(resolve(&DEFAULTS, Some(&site), &PaginationOverrides::default()).is_err());
    }

    #[test]
    fn test_custom_defaults_table() {
        let defaults = PaginationDefaults {
            per_page: 2,
            limit: None,
            ..DEFAULTS
        };
        let config = resolve(&defaults, None, &PaginationOverrides::default()).unwrap();
        assert_eq!(config.per_page, 2);
        assert_eq!(config.limit, None);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = resolve(&DEFAULTS, None, &PaginationOverrides::default()).unwrap();
        let mut copy = original.clone();
        copy.page_num = 2;
        copy.next_page = Some(3);

        assert_eq!(original.page_num, 1);
        assert_eq!(original.next_page, None);
    }
}
