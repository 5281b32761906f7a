//! vk-cleaner - leave every VK group and community from the command line.
//!
//! This is a thin wrapper over the `vkclean` library: it reads the
//! configuration, sets up logging, and runs one cleanup against the VK API.

mod cli;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use vkclean::{Cleaner, RunEnd};
use vkclean_api::VkApi;

use cli::Cli;
use output::TerminalConsole;

#[tokio::main]
async fn main() -> ExitCode {
    // Variables already set in the environment win over .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("Unexpected error: {:#}", e);
            output::error(&format!("Unexpected error: {:#}", e));
            eprintln!("Please check the logs for more details.");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    logging::init(cli.verbose, cli.json_logs, &cli.log_file)?;

    output::banner();

    let Some(credentials) = cli.credentials() else {
        output::missing_credentials();
        return Ok(ExitCode::FAILURE);
    };

    let service = VkApi::new(cli.vk_config()?).context("Failed to set up the VK API client")?;

    tokio::spawn(exit_on_interrupt());

    let mut cleaner = Cleaner::new(
        service,
        Some(credentials),
        cli.cleanup_config(),
        TerminalConsole,
    );
    let report = cleaner.run().await;

    if report.dry_run && matches!(report.end, RunEnd::Completed(_)) {
        output::live_mode_hint();
    }

    Ok(ExitCode::SUCCESS)
}

/// Ctrl-C ends the process right away, as a clean exit.
async fn exit_on_interrupt() {
    if signal::ctrl_c().await.is_ok() {
        info!("Operation cancelled by user.");
        eprintln!("\n\nOperation cancelled by user.");
        std::process::exit(0);
    }
}
