//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [pagination] Section Defaults
// ============================================================================

/// Built-in pagination values, the lowest layer of the merge.
pub mod pagination {
    pub const COLLECTION: &str = "posts";
    pub const PER_PAGE: usize = 10;
    pub const LIMIT: Option<usize> = Some(5);
    pub const PERMALINK: &str = "/page:num/";
    pub const TITLE_SUFFIX: &str = " - page :num";
    pub const PAGE_NUM: usize = 1;
    pub const REVERSED: bool = false;
}

// ============================================================================
// Content Manifest Defaults
// ============================================================================

pub mod manifest {
    pub fn dir() -> String {
        "/".into()
    }

    pub fn name() -> String {
        "index.html".into()
    }
}
