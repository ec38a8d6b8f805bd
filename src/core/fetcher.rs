use crate::config::ProviderConfig;
use crate::core::model::{FeedResponse, NormalizedPost};
use crate::core::normalize::normalize_post;
use crate::core::ports::FetchJson;
use crate::core::provider::ProviderClient;
use crate::utils::error::Result;
use crate::utils::validation::validate_username;

/// Orchestrates one request: validate the username, resolve it to an
/// account id, fetch that account's feed, normalize each post. The two
/// outbound calls are strictly sequential; the second depends on the
/// first's result. Any failure ends the request, nothing is retried.
pub struct ProfileFeedFetcher<'a, F: FetchJson> {
    config: ProviderConfig,
    transport: &'a F,
}

impl<'a, F: FetchJson> ProfileFeedFetcher<'a, F> {
    pub fn new(config: ProviderConfig, transport: &'a F) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub async fn fetch_profile_feed(&self, username: &str) -> Result<FeedResponse> {
        validate_username(username)?;
        let username = username.trim();

        let client = ProviderClient::new(&self.config, self.transport);

        tracing::debug!("Resolving account id for '{}'", username);
        let user_id = client.resolve_user_id(username).await?;

        tracing::debug!("Fetching post feed for account {}", user_id);
        let items = client.fetch_post_feed(&user_id).await?;

        let posts: Vec<NormalizedPost> = items
            .iter()
            .map(|item| normalize_post(item, self.config.include_author))
            .collect();

        tracing::info!("Fetched {} posts for '{}'", posts.len(), username);
        Ok(FeedResponse::new(username.to_string(), user_id, posts))
    }
}
