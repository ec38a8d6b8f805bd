//! The two provider calls: username -> account id, account id -> post feed.

use crate::config::ProviderConfig;
use crate::core::normalize::string_at;
use crate::core::ports::FetchJson;
use crate::utils::error::{FeedError, Result};
use serde_json::Value;

pub struct ProviderClient<'a, F: FetchJson> {
    config: &'a ProviderConfig,
    transport: &'a F,
}

impl<'a, F: FetchJson> ProviderClient<'a, F> {
    pub fn new(config: &'a ProviderConfig, transport: &'a F) -> Self {
        Self { config, transport }
    }

    fn auth_headers(&self) -> Vec<(String, String)> {
        vec![
            (self.config.key_header.clone(), self.config.api_key.clone()),
            (self.config.host_header.clone(), self.config.host.clone()),
        ]
    }

    /// Resolves a username to the provider's numeric account id. Any
    /// non-success status, as well as a success response without a usable
    /// `UserID`, means the account does not exist as far as we can tell.
    pub async fn resolve_user_id(&self, username: &str) -> Result<String> {
        let url = self.config.lookup_url(username)?;
        let response = self.transport.fetch_json(&url, &self.auth_headers()).await?;

        let user_id = string_at(&response.body, "UserID").filter(|id| !id.is_empty());
        match user_id {
            Some(id) if response.is_success() => Ok(id),
            _ => Err(FeedError::LookupNotFoundError {
                message: format!("no account found for username '{}'", username),
                raw: response.body,
            }),
        }
    }

    /// Fetches the recent-post feed for a resolved account id. The raw
    /// items are handed back untouched; normalization happens later.
    pub async fn fetch_post_feed(&self, user_id: &str) -> Result<Vec<Value>> {
        let url = self.config.feed_url(user_id)?;
        let response = self.transport.fetch_json(&url, &self.auth_headers()).await?;

        if !response.is_success() {
            return Err(FeedError::UpstreamFetchError {
                message: format!("feed request failed with status {}", response.status),
                raw: response.body,
            });
        }

        if let Some(items) = response.body.get("items").and_then(Value::as_array) {
            return Ok(items.clone());
        }

        Err(FeedError::UpstreamFetchError {
            message: "feed response has no items list".to_string(),
            raw: response.body,
        })
    }
}
