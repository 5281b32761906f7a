//! CLI argument definitions.
//!
//! Every setting can also come from the environment (or a `.env` file).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use vkclean::CleanupConfig;
use vkclean_api::{
    DEFAULT_API_URL, DEFAULT_API_VERSION, DEFAULT_APP_ID, DEFAULT_OAUTH_URL, VkConfig,
};
use vkclean_core::{ApiUrl, Credentials};

/// Leave all VK groups and communities you are a member of.
#[derive(Parser)]
#[command(name = "vk-cleaner")]
#[command(author, version = env!("VK_CLEANER_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// File the log is appended to
    #[arg(long, env = "VK_LOG_FILE", default_value = "vk_cleaner.log")]
    pub log_file: PathBuf,

    /// Access token (preferred over login/password)
    #[arg(long, env = "VK_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Login (phone or e-mail) for password authentication
    #[arg(long, env = "VK_LOGIN")]
    pub login: Option<String>,

    /// Password for password authentication
    #[arg(long, env = "VK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Only log what would be left
    #[arg(
        long,
        env = "VK_DRY_RUN",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub dry_run: bool,

    /// Ask before leaving anything
    #[arg(
        long,
        env = "VK_REQUIRE_CONFIRMATION",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub require_confirmation: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// OAuth client id for password authentication
    #[arg(long, env = "VK_APP_ID", default_value = DEFAULT_APP_ID)]
    pub app_id: String,

    /// OAuth client secret for password authentication
    #[arg(long, env = "VK_APP_SECRET", hide_env_values = true)]
    pub app_secret: Option<String>,

    /// REST API base URL
    #[arg(long, env = "VK_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// OAuth server base URL
    #[arg(long, env = "VK_OAUTH_URL", default_value = DEFAULT_OAUTH_URL)]
    pub oauth_url: String,

    /// API version sent with every call
    #[arg(long, env = "VK_API_VERSION", default_value = DEFAULT_API_VERSION)]
    pub api_version: String,
}

impl Cli {
    /// The credential shape to use, if any is configured.
    pub fn credentials(&self) -> Option<Credentials> {
        Credentials::resolve(
            self.access_token.clone(),
            self.login.clone(),
            self.password.clone(),
        )
    }

    pub fn cleanup_config(&self) -> CleanupConfig {
        CleanupConfig::new(self.dry_run, self.require_confirmation && !self.yes)
    }

    pub fn vk_config(&self) -> Result<VkConfig> {
        let api_url = ApiUrl::new(&self.api_url).context("Invalid API URL")?;
        let oauth_url = ApiUrl::new(&self.oauth_url).context("Invalid OAuth URL")?;

        Ok(VkConfig::new(api_url, oauth_url)
            .with_version(&self.api_version)
            .with_app(&self.app_id, self.app_secret.clone()))
    }
}
