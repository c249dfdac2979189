//! Paginate-loop directive scanning.
//!
//! Templates announce the collection they page through with a loop tag:
//!
//! ```text
//! {% paginate post in site.posts %}
//! {% paginate note in site.notes reversed %}
//! ```
//!
//! Only the collection name is extracted here; rendering the loop is the
//! template engine's business.

use regex::Regex;
use std::{ops::Range, sync::LazyLock};

static LOOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"paginate[ \t\r\n]+([A-Za-z_][A-Za-z0-9_]*)[ \t\r\n]+in[ \t\r\n]+site\.([A-Za-z0-9_-]+)[^%]*%\}",
    )
    .unwrap()
});

/// A paginate loop found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopDirective<'a> {
    /// Loop variable (`post` in `paginate post in site.posts`)
    pub variable: &'a str,
    /// Collection name (`posts` in `paginate post in site.posts`)
    pub collection: &'a str,
    /// Byte range of the directive in the source, up to and including `%}`
    pub span: Range<usize>,
}

/// Find the first paginate loop in `source`.
pub fn find_loop(source: &str) -> Option<LoopDirective<'_>> {
    let caps = LOOP.captures(source)?;
    let whole = caps.get(0)?;
    Some(LoopDirective {
        variable: caps.get(1)?.as_str(),
        collection: caps.get(2)?.as_str(),
        span: whole.range(),
    })
}

/// Collection named by the first paginate loop in `source`.
pub fn collection(source: &str) -> Option<&str> {
    find_loop(source).map(|d| d.collection)
}
