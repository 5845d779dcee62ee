use super::toml_config::TomlConfig;
use super::{AppConfig, BackendMode, LogFormat};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "skill-board")]
#[command(about = "Browse postings, register profiles and compare skill overlap")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL of the remote API (live mode)
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Answer requests from the in-memory demo store
    #[arg(long, conflicts_with = "live")]
    pub mock: bool,

    /// Send requests to the remote API
    #[arg(long)]
    pub live: bool,

    /// Per-request timeout for live mode
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the skill catalog
    Skills,
    /// List opportunities, newest first
    Opportunities,
    /// Post a new opportunity
    CreateOpportunity {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Comma-separated skill ids
        #[arg(long, value_delimiter = ',')]
        skill_ids: Vec<String>,
    },
    /// List registered users
    Users,
    /// Register a user profile
    CreateUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, value_delimiter = ',')]
        skill_ids: Vec<String>,
    },
    /// Show every opportunity scored against a user's skills
    Matches {
        user_id: String,
        /// Sort by score, highest first
        #[arg(long)]
        ranked: bool,
    },
    /// Walk through every panel against the configured backend
    Demo,
}

impl CliConfig {
    /// Loads the optional file, then applies command line overrides.
    /// Only the merged result is validated.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_app_config(),
            None => AppConfig::default(),
        };

        if let Some(url) = &self.api_base_url {
            config.api_base_url = url.clone();
        }
        if self.mock {
            config.mode = BackendMode::Mock;
        }
        if self.live {
            config.mode = BackendMode::Live;
        }
        if self.timeout_seconds.is_some() {
            config.timeout_seconds = self.timeout_seconds;
        }
        if self.verbose {
            config.verbose = true;
        }
        if self.json_logs {
            config.log_format = LogFormat::Json;
        }

        config.validate()?;
        Ok(config)
    }
}
