use crate::config::toml_config::TomlConfig;
use crate::config::ProviderConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "profile-feed")]
#[command(about = "Fetch a public profile's recent posts as normalized JSON")]
pub struct CliConfig {
    /// Username to look up
    #[arg(long)]
    pub username: String,

    /// TOML provider profile; when omitted the provider settings come from
    /// the environment
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log system resource usage")]
    pub monitor: bool,
}

impl CliConfig {
    pub fn provider_config(&self) -> Result<ProviderConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_provider_config(),
            None => ProviderConfig::from_env(),
        }
    }
}
