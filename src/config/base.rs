//! `[base]` section configuration.
//!
//! Site-wide settings pagination reads: url, language, multilingual.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in tola.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// url = "https://myblog.com"
/// language = "en"
/// multilingual = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Base URL for absolute links.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "zh-Hans", "en-US").
    ///
    /// On multilingual sites, the language of pages that declare none.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Order `posts` per page language instead of one site-wide list.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub multilingual: bool,
}
