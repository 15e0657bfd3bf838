//! Content core for the folio portfolio site.
//!
//! Holds the portfolio content model and the listing filters that drive the
//! work grid and creations gallery, plus the page-level state the
//! presentation layer renders from.

pub mod config;
pub mod filter;
pub mod icons;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod sitemap;
pub mod sync;
pub mod theme;

pub use config::{ConfigError, SiteConfig};
pub use filter::category::{count_by_category, CategoryFilter, CategoryId, CategoryMeta};
pub use filter::query::{decode_tags, encode_query, TAGS_PARAM};
pub use filter::tags::{available_tags, filter_items, TagSelection};
pub use filter::{EmptyState, FilterOutcome};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::creation::{CreationCategory, CreationItem};
pub use model::item::DisplayItem;
pub use model::profile::PersonalInfo;
pub use model::project::Project;
pub use model::track::Track;
pub use repo::content_repo::{Catalog, CatalogError, CatalogResult, ContentRepository};
pub use service::creations::{CreationsPage, CreationsView};
pub use service::music::{MusicPage, MusicView};
pub use service::work::{RecordingUrlWriter, UrlWriter, WorkPage, WorkView};
pub use sync::debounce::{Debouncer, TaskHandle};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
