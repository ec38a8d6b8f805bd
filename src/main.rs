use clap::Parser;
use profile_feed::config::cli::CliConfig;
use profile_feed::core::fetcher::ProfileFeedFetcher;
use profile_feed::core::ports::HttpFetcher;
use profile_feed::utils::error::ErrorSeverity;
use profile_feed::utils::logger;
use profile_feed::utils::monitor::SystemMonitor;
use profile_feed::utils::validation::Validate;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting profile-feed CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.provider_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(3);
    }

    let monitor = SystemMonitor::new(cli.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let transport = HttpFetcher::with_timeout(Duration::from_secs(config.timeout_seconds));
    let fetcher = ProfileFeedFetcher::new(config, &transport);

    match fetcher.fetch_profile_feed(&cli.username).await {
        Ok(feed) => {
            monitor.log_stats("Fetch complete");

            let rendered = if cli.pretty {
                serde_json::to_string_pretty(&feed)?
            } else {
                serde_json::to_string(&feed)?
            };
            println!("{}", rendered);

            tracing::info!("✅ Fetched {} posts for '{}'", feed.post_count, feed.username);
        }
        Err(e) => {
            tracing::error!("❌ Fetch failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::High => 1,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
