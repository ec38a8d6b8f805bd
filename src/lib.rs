pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{FeedEndpoint, ProviderConfig};
pub use crate::core::fetcher::ProfileFeedFetcher;
pub use crate::core::model::{AuthorSummary, FeedResponse, NormalizedPost};
pub use crate::core::ports::{FetchJson, HttpFetcher, ProviderResponse};
pub use crate::utils::error::{FeedError, Result};
