#[cfg(feature = "lambda")]
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
#[cfg(feature = "lambda")]
use profile_feed::config::{ProviderConfig, DEFAULT_TIMEOUT_SECONDS};
#[cfg(feature = "lambda")]
use profile_feed::core::handler::handle_feed_request;
#[cfg(feature = "lambda")]
use profile_feed::core::ports::HttpFetcher;
#[cfg(feature = "lambda")]
use profile_feed::utils::logger;
#[cfg(feature = "lambda")]
use std::time::Duration;

#[cfg(feature = "lambda")]
async fn function_handler(transport: &HttpFetcher, event: Request) -> Result<Response<Body>, Error> {
    let username = event
        .query_string_parameters_ref()
        .and_then(|params| params.first("username"))
        .map(str::to_owned);

    let response = handle_feed_request(event.method(), username.as_deref(), transport).await?;
    Ok(response.map(Body::from))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();
    tracing::info!("Starting profile feed handler");

    // The transport is shared across invocations; the timeout honors the
    // environment configuration when it is already valid at startup.
    let timeout_seconds = ProviderConfig::from_env()
        .map(|config| config.timeout_seconds)
        .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
    let transport = HttpFetcher::with_timeout(Duration::from_secs(timeout_seconds));

    run(service_fn(|event| function_handler(&transport, event))).await
}
