//! Pagination error types.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors raised while planning or rendering pagination.
#[derive(Debug, Error)]
pub enum PaginateError {
    #[error("Unknown collection `{0}`")]
    UnknownCollection(String),

    #[error("Invalid pagination config")]
    Config(#[from] ConfigError),

    #[error("Page `{0}` is not paginated")]
    NotPaginated(String),

    #[error("No page registered at index {0}")]
    UnknownPage(usize),
}

impl PaginateError {
    /// True for errors caused by the configuration rather than the page.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::UnknownCollection(_) | Self::Config(_))
    }
}
