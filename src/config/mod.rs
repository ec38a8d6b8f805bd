#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{FeedError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

pub const API_KEY_VAR: &str = "RAPIDAPI_KEY";

pub const DEFAULT_PROVIDER_HOST: &str = "instagram-api-fast-reliable-data-scraper.p.rapidapi.com";
pub const DEFAULT_KEY_HEADER: &str = "x-rapidapi-key";
pub const DEFAULT_HOST_HEADER: &str = "x-rapidapi-host";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

const USER_ID_PATH: &str = "/user_id_by_username";

/// The provider exposes the same post feed under two path variants; which
/// one a deployment calls is configuration, not a separate code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedEndpoint {
    #[default]
    UserPostFeed,
    Feed,
}

impl FeedEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::UserPostFeed => "/user_post_feed",
            Self::Feed => "/feed",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "user_post_feed" => Ok(Self::UserPostFeed),
            "feed" => Ok(Self::Feed),
            other => Err(FeedError::InvalidConfigValueError {
                field: "feed_endpoint".to_string(),
                value: other.to_string(),
                reason: "expected 'user_post_feed' or 'feed'".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub host: String,
    pub base_url: String,
    pub key_header: String,
    pub host_header: String,
    pub feed_endpoint: FeedEndpoint,
    pub timeout_seconds: u64,
    pub include_author: bool,
}

impl ProviderConfig {
    /// Reads the provider settings from the process environment. Only the
    /// API key is required; everything else has defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| FeedError::MissingConfigError {
            field: API_KEY_VAR.to_string(),
        })?;

        let host =
            env::var("PROVIDER_HOST").unwrap_or_else(|_| DEFAULT_PROVIDER_HOST.to_string());
        let base_url =
            env::var("PROVIDER_BASE_URL").unwrap_or_else(|_| format!("https://{}", host));

        let feed_endpoint = match env::var("FEED_ENDPOINT") {
            Ok(value) => FeedEndpoint::parse(&value)?,
            Err(_) => FeedEndpoint::default(),
        };

        let timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        let include_author = env::var("INCLUDE_AUTHOR")
            .map(|value| value != "false" && value != "0")
            .unwrap_or(true);

        Ok(Self {
            api_key,
            host,
            base_url,
            key_header: DEFAULT_KEY_HEADER.to_string(),
            host_header: DEFAULT_HOST_HEADER.to_string(),
            feed_endpoint,
            timeout_seconds,
            include_author,
        })
    }

    /// Config pointing at an explicit base URL, defaults everywhere else.
    /// Tests use this to aim the client at a local mock server.
    pub fn for_base_url(base_url: String, api_key: String) -> Self {
        Self {
            api_key,
            host: DEFAULT_PROVIDER_HOST.to_string(),
            base_url,
            key_header: DEFAULT_KEY_HEADER.to_string(),
            host_header: DEFAULT_HOST_HEADER.to_string(),
            feed_endpoint: FeedEndpoint::default(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            include_author: true,
        }
    }

    pub fn lookup_url(&self, username: &str) -> Result<String> {
        self.build_url(USER_ID_PATH, "username", username)
    }

    pub fn feed_url(&self, user_id: &str) -> Result<String> {
        self.build_url(self.feed_endpoint.path(), "user_id", user_id)
    }

    fn build_url(&self, path: &str, param: &str, value: &str) -> Result<String> {
        let url = Url::parse_with_params(&format!("{}{}", self.base_url, path), &[(param, value)])
            .map_err(|e| FeedError::ConfigError {
                message: format!("invalid provider URL: {}", e),
            })?;
        Ok(url.to_string())
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("api_key", &self.api_key)?;
        validation::validate_non_empty_string("host", &self.host)?;
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}
