use crate::config::{
    FeedEndpoint, ProviderConfig, DEFAULT_HOST_HEADER, DEFAULT_KEY_HEADER, DEFAULT_PROVIDER_HOST,
    DEFAULT_TIMEOUT_SECONDS,
};
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Provider profile loaded from a TOML file. Lets a deployment pin the
/// endpoint variant, header names and timeout without code changes; the
/// API key is normally injected via `${RAPIDAPI_KEY}` substitution so the
/// secret never lives in the file itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub provider: ProviderSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSection {
    pub api_key: String,
    pub host: Option<String>,
    pub base_url: Option<String>,
    pub key_header: Option<String>,
    pub host_header: Option<String>,
    pub feed_endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub include_author: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| FeedError::ConfigError {
            message: format!("failed to read config file: {}", e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FeedError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` markers with environment values. Unknown
    /// variables are left as-is so the placeholder survives into the
    /// missing-key check below.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn into_provider_config(self) -> Result<ProviderConfig> {
        let section = self.provider;

        if section.api_key.is_empty() || section.api_key.starts_with("${") {
            return Err(FeedError::MissingConfigError {
                field: "provider.api_key".to_string(),
            });
        }

        let host = section
            .host
            .unwrap_or_else(|| DEFAULT_PROVIDER_HOST.to_string());
        let base_url = section
            .base_url
            .unwrap_or_else(|| format!("https://{}", host));

        let feed_endpoint = match section.feed_endpoint {
            Some(value) => FeedEndpoint::parse(&value)?,
            None => FeedEndpoint::default(),
        };

        let config = ProviderConfig {
            api_key: section.api_key,
            host,
            base_url,
            key_header: section
                .key_header
                .unwrap_or_else(|| DEFAULT_KEY_HEADER.to_string()),
            host_header: section
                .host_header
                .unwrap_or_else(|| DEFAULT_HOST_HEADER.to_string()),
            feed_endpoint,
            timeout_seconds: section.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            include_author: section.include_author.unwrap_or(true),
        };

        config.validate()?;
        Ok(config)
    }
}
