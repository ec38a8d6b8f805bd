pub mod fetcher;
pub mod handler;
pub mod model;
pub mod normalize;
pub mod ports;
pub mod provider;

pub use crate::utils::error::Result;
pub use self::model::{AuthorSummary, FeedResponse, NormalizedPost};
pub use self::ports::{FetchJson, HttpFetcher, ProviderResponse};
