//! URL path helpers.
//!
//! Site URLs are plain `/`-separated strings, independent of the host OS
//! path separator, so they are joined here instead of through `Path`.

/// Join two URL path segments with exactly one `/` between them.
///
/// | base | tail | result |
/// |------|------|--------|
/// | `/` | `/page2/` | `/page2/` |
/// | `/blog/` | `/page2/` | `/blog/page2/` |
/// | `/blog` | `page2` | `/blog/page2` |
/// | `` | `page2/` | `/page2/` |
pub fn join(base: &str, tail: &str) -> String {
    let base = base.trim_end_matches('/');
    let tail = tail.trim_start_matches('/');
    if base.is_empty() {
        format!("/{tail}")
    } else if base.starts_with('/') {
        format!("{base}/{tail}")
    } else {
        format!("/{base}/{tail}")
    }
}
