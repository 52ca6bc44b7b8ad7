//! `logdeck` — terminal dashboard for a log-analysis backend.
//!
//! Built on [ratatui](https://ratatui.rs) with reactive data from
//! `logdeck-core`'s [`Dashboard`](logdeck_core::Dashboard). Three
//! panels: log summaries, alerts, and the analysis chat, refreshed on a
//! schedule with manual refresh and severity filtering on top.
//!
//! Logs are written to a file (default `/tmp/logdeck.log`) to avoid
//! corrupting the terminal UI. A background data bridge task streams
//! feed updates from the dashboard into the TUI action loop.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and
//! app launch.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod panels;
mod theme;
mod tui;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use logdeck_core::Dashboard;

use crate::app::App;

/// Terminal dashboard for log summaries, alerts, and the analysis chat.
#[derive(Parser, Debug)]
#[command(name = "logdeck", version, about)]
struct Cli {
    /// Backend base URL (e.g., http://127.0.0.1:5000)
    #[arg(short = 'u', long, env = "LOGDECK_BACKEND")]
    url: Option<String>,

    /// Seconds between scheduled refreshes
    #[arg(short = 'r', long)]
    refresh: Option<u64>,

    /// Start with auto-refresh disabled
    #[arg(long)]
    no_auto_refresh: bool,

    /// Config file path (defaults to the platform config dir)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Log file path (defaults to /tmp/logdeck.log)
    #[arg(long, default_value = "/tmp/logdeck.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that
/// would corrupt the TUI output. Returns a guard that must be held for
/// the lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "logdeck={log_level},logdeck_core={log_level},logdeck_api={log_level}"
        ))
    });

    let log_dir = cli.log_file.parent().unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("logdeck.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Build the dashboard from config file + environment, with CLI flags
/// taking priority over both.
fn build_dashboard(cli: &Cli) -> Result<Dashboard> {
    let mut cfg = match &cli.config {
        Some(path) => logdeck_config::load_config_from(path)?,
        None => logdeck_config::load_config()?,
    };

    if let Some(url) = &cli.url {
        cfg.backend = url.clone();
    }
    if let Some(secs) = cli.refresh {
        cfg.refresh_interval_secs = secs;
    }
    if cli.no_auto_refresh {
        cfg.auto_refresh = false;
    }

    let dashboard_config = cfg.to_dashboard_config()?;
    Ok(Dashboard::new(dashboard_config)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let dashboard = build_dashboard(&cli)?;

    info!(
        backend = %dashboard.config().backend,
        refresh_secs = dashboard.config().refresh_interval.as_secs(),
        "starting logdeck"
    );

    let mut app = App::new(dashboard);
    app.run().await?;

    Ok(())
}
