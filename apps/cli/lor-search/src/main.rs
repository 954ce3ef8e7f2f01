use lor_search::cli::Cli;
use lor_search::commands;
use lor_search::error::AppError;
use lor_search::logger::{initialize as LoggerInitialize, level_for_verbosity};

use std::fs::create_dir_all;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

const APP_DIR_NAME: &str = "lor-search";

// Single-threaded on purpose: requests only suspend at network I/O.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            match serde_json::to_string(&e) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{e}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let log_dir = match cli.log_dir {
        Some(dir) => dir,
        None => default_log_dir()?,
    };

    create_dir_all(&log_dir)
        .map_err(|e| AppError::app(format!("Failed to create log directory: {e}")))?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir, level_for_verbosity(cli.verbose))?;
    info!("Log directory: {}", log_dir.display());

    let http = client_core::shared_client()?;
    info!("Using backend {}", http.base_url());

    let output = commands::execute(cli.command, http).await?;

    let rendered = serde_json::to_string_pretty(&output)
        .map_err(|e| AppError::app(format!("Failed to render output: {e}")))?;
    println!("{rendered}");

    Ok(())
}

fn default_log_dir() -> Result<PathBuf, AppError> {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| AppError::app("Failed to determine a log directory; pass --log-dir"))
}
