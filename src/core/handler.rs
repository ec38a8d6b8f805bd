//! The inbound HTTP contract, kept independent of the serverless runtime:
//! the lambda binary adapts its event type onto this, and tests drive it
//! directly with a canned transport.

use crate::config::ProviderConfig;
use crate::core::fetcher::ProfileFeedFetcher;
use crate::core::model::FeedResponse;
use crate::core::ports::FetchJson;
use crate::utils::error::Result;
use crate::utils::validation::validate_username;
use http::response::Builder;
use http::{Method, Response, StatusCode};
use serde_json::Value;

fn base_response(status: StatusCode) -> Builder {
    Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response(status: StatusCode, body: &Value) -> http::Result<Response<String>> {
    base_response(status)
        .header("Content-Type", "application/json")
        .body(body.to_string())
}

async fn run_fetch<F: FetchJson>(username: &str, transport: &F) -> Result<FeedResponse> {
    // The provider key is read from the environment per request; its
    // absence is a server-side configuration error, not a client error.
    let config = ProviderConfig::from_env()?;
    let fetcher = ProfileFeedFetcher::new(config, transport);
    fetcher.fetch_profile_feed(username).await
}

/// Maps one inbound request onto the two-call fetch sequence. Every
/// response carries the CORS headers; errors are logged before the body
/// is built.
pub async fn handle_feed_request<F: FetchJson>(
    method: &Method,
    username: Option<&str>,
    transport: &F,
) -> http::Result<Response<String>> {
    if *method == Method::OPTIONS {
        return base_response(StatusCode::OK).body(String::new());
    }

    if *method != Method::GET {
        return json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            &serde_json::json!({ "error": "only GET and OPTIONS are supported" }),
        );
    }

    let username = username.unwrap_or_default();

    // The username check comes before the configuration lookup: a request
    // missing both gets the client error, not the server error.
    let rendered = match validate_username(username) {
        Ok(()) => run_fetch(username, transport)
            .await
            .and_then(|feed| Ok(serde_json::to_string(&feed)?)),
        Err(error) => Err(error),
    };

    match rendered {
        Ok(body) => base_response(StatusCode::OK)
            .header("Content-Type", "application/json")
            .body(body),
        Err(error) => {
            tracing::error!("Request for username '{}' failed: {}", username, error);
            let status = StatusCode::from_u16(error.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            json_response(status, &error.to_response_body())
        }
    }
}
