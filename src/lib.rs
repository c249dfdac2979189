//! Collection pagination for tola sites.
//!
//! Splits posts or any named collection into fixed-size pages, generates one
//! page per chunk beyond the first, and links the sequence with
//! previous/next navigation. Templates read the result through the
//! paginator payload.
//!
//! ```ignore
//! let config = SiteConfig::from_path(Path::new("tola.toml"))?;
//! let manifest = ContentManifest::from_path(Path::new("content.toml"))?;
//! let mut site = Site::from_manifest(config, "./", manifest);
//!
//! site.paginate_all();
//! for page in site.paginated_pages() {
//!     let payload = site.payload(page)?;
//! }
//! ```

pub mod config;
pub mod directive;
pub mod logger;
pub mod paginate;
pub mod site;
pub mod utils;

pub use config::{PaginationConfig, PaginationDefaults, PaginationOverrides, SiteConfig};
pub use paginate::{PaginateError, Paginator, Payload, paginate};
pub use site::{ContentManifest, ContentStore, Item, Page, PaginationSummary, Site};
