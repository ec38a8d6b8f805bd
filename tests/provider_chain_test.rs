//! Exercises the real reqwest transport and the two-call sequence against
//! a local mock server, including the auth headers and the endpoint
//! variant configuration.

use anyhow::Result;
use httpmock::prelude::*;
use profile_feed::config::{FeedEndpoint, ProviderConfig};
use profile_feed::core::fetcher::ProfileFeedFetcher;
use profile_feed::core::ports::HttpFetcher;
use profile_feed::utils::error::FeedError;
use serde_json::json;

fn mock_config(server: &MockServer) -> ProviderConfig {
    ProviderConfig::for_base_url(server.base_url(), "test-key".to_string())
}

#[tokio::test]
async fn test_two_call_chain_with_auth_headers() -> Result<()> {
    let server = MockServer::start();

    let lookup_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/user_id_by_username")
            .query_param("username", "instagram")
            .header("x-rapidapi-key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "UserID": "25025320" }));
    });

    let feed_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/user_post_feed")
            .query_param("user_id", "25025320")
            .header("x-rapidapi-key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "items": [
                { "id": "1", "code": "abc", "media_type": 1,
                  "caption": { "text": "hi" }, "like_count": 5,
                  "user": { "pk": 25025320, "username": "instagram", "is_verified": true } },
                { "id": "2", "media_type": 2,
                  "video_versions": [ { "url": "https://video/a.mp4" } ] }
            ]}));
    });

    let transport = HttpFetcher::new();
    let fetcher = ProfileFeedFetcher::new(mock_config(&server), &transport);

    let feed = fetcher.fetch_profile_feed("instagram").await?;

    lookup_mock.assert();
    feed_mock.assert();

    assert_eq!(feed.username, "instagram");
    assert_eq!(feed.user_id, "25025320");
    assert_eq!(feed.post_count, 2);
    assert_eq!(feed.posts[0].caption, "hi");
    assert_eq!(
        feed.posts[0].user.as_ref().unwrap().username,
        Some("instagram".to_string())
    );
    assert_eq!(
        feed.posts[1].video_url,
        Some("https://video/a.mp4".to_string())
    );
    assert_eq!(feed.posts[1].caption, "");
    Ok(())
}

#[tokio::test]
async fn test_feed_endpoint_variant_changes_the_path_called() -> Result<()> {
    let server = MockServer::start();

    let lookup_mock = server.mock(|when, then| {
        when.method(GET).path("/user_id_by_username");
        then.status(200).json_body(json!({ "UserID": "42" }));
    });

    let feed_mock = server.mock(|when, then| {
        when.method(GET).path("/feed").query_param("user_id", "42");
        then.status(200).json_body(json!({ "items": [] }));
    });

    let mut config = mock_config(&server);
    config.feed_endpoint = FeedEndpoint::Feed;

    let transport = HttpFetcher::new();
    let fetcher = ProfileFeedFetcher::new(config, &transport);

    let feed = fetcher.fetch_profile_feed("someone").await?;

    lookup_mock.assert();
    feed_mock.assert();
    assert_eq!(feed.post_count, 0);
    Ok(())
}

#[tokio::test]
async fn test_author_summary_omitted_when_disabled() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/user_id_by_username");
        then.status(200).json_body(json!({ "UserID": "42" }));
    });

    server.mock(|when, then| {
        when.method(GET).path("/user_post_feed");
        then.status(200).json_body(json!({ "items": [
            { "id": "1", "user": { "pk": 42, "username": "someone" } }
        ]}));
    });

    let mut config = mock_config(&server);
    config.include_author = false;

    let transport = HttpFetcher::new();
    let fetcher = ProfileFeedFetcher::new(config, &transport);

    let feed = fetcher.fetch_profile_feed("someone").await?;
    assert_eq!(feed.posts[0].user, None);
    Ok(())
}

#[tokio::test]
async fn test_lookup_error_status_maps_to_not_found() {
    let server = MockServer::start();

    let lookup_mock = server.mock(|when, then| {
        when.method(GET).path("/user_id_by_username");
        then.status(500)
            .json_body(json!({ "message": "provider exploded" }));
    });

    let transport = HttpFetcher::new();
    let fetcher = ProfileFeedFetcher::new(mock_config(&server), &transport);

    match fetcher.fetch_profile_feed("instagram").await {
        Err(FeedError::LookupNotFoundError { raw, .. }) => {
            assert_eq!(raw, json!({ "message": "provider exploded" }));
        }
        other => panic!("expected LookupNotFoundError, got {:?}", other.map(|_| ())),
    }

    lookup_mock.assert();
}

#[tokio::test]
async fn test_feed_non_list_maps_to_upstream_fetch_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/user_id_by_username");
        then.status(200).json_body(json!({ "UserID": "42" }));
    });

    server.mock(|when, then| {
        when.method(GET).path("/user_post_feed");
        then.status(200).json_body(json!({ "items": "not-a-list" }));
    });

    let transport = HttpFetcher::new();
    let fetcher = ProfileFeedFetcher::new(mock_config(&server), &transport);

    assert!(matches!(
        fetcher.fetch_profile_feed("someone").await,
        Err(FeedError::UpstreamFetchError { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_provider_is_an_api_error() {
    // Nothing listens on port 1
    let config = ProviderConfig::for_base_url(
        "http://127.0.0.1:1".to_string(),
        "test-key".to_string(),
    );

    let transport = HttpFetcher::new();
    let fetcher = ProfileFeedFetcher::new(config, &transport);

    assert!(matches!(
        fetcher.fetch_profile_feed("instagram").await,
        Err(FeedError::ApiError(_))
    ));
}
