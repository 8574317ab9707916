/*
[INPUT]:  CLI arguments, optional YAML configuration file
[OUTPUT]: Interactive task list in the terminal
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod config;
mod logging;
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::config::TasklistConfig;
use crate::logging::{LogBuffer, LogSink, init_tracing};

#[derive(Parser, Debug)]
#[command(name = "tasklist-tui", version, about = "Terminal task list")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Overrides log.level from the config file
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
    /// Validate configuration and exit without opening the UI
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = TasklistConfig::load(args.config_path.as_deref()).context("load config")?;
    if let Some(level) = args.log_level {
        config.log.level = level;
        config.validate().context("validate config")?;
    }

    if args.dry_run {
        let _guard = init_tracing(&config.log, LogSink::Stderr)?;
        info!(
            config_path = ?args.config_path,
            log_level = %config.log.level,
            tick_rate_ms = config.ui.tick_rate_ms,
            log_panel = config.ui.log_panel,
            "dry-run requested; configuration validated"
        );
        return Ok(());
    }

    let log_buffer = LogBuffer::handle(config.ui.log_capacity);
    let _guard = init_tracing(&config.log, LogSink::Buffer(log_buffer.clone()))?;
    info!(config_path = ?args.config_path, "starting tasklist-tui");

    let panel = config.ui.log_panel.then_some(log_buffer);
    tui::run_tui(&config.ui, panel).await?;

    info!("tasklist-tui exited");
    Ok(())
}
