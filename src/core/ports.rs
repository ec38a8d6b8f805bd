use crate::config::DEFAULT_TIMEOUT_SECONDS;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Status and decoded body of one outbound provider call. Non-success
/// statuses are returned, not raised, so callers can echo the raw payload
/// back to the client.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ProviderResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound HTTP capability. The provider client only ever needs
/// "GET this URL with these headers, give me JSON back", so tests swap in
/// a canned implementation and never touch the network.
#[async_trait]
pub trait FetchJson: Send + Sync {
    async fn fetch_json(&self, url: &str, headers: &[(String, String)]) -> Result<ProviderResponse>;
}

/// Production transport: a shared reqwest client with an explicit
/// per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchJson for HttpFetcher {
    async fn fetch_json(&self, url: &str, headers: &[(String, String)]) -> Result<ProviderResponse> {
        let mut request = self.client.get(url).timeout(self.timeout);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        tracing::debug!("GET {} -> {}", url, status);

        let body = response.json().await?;
        Ok(ProviderResponse { status, body })
    }
}
