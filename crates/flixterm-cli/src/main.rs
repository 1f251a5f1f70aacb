//! flixterm - TMDB movie and TV browsing TUI.

/// Application configuration (TOML).
mod config;
/// Detail routes and TMDB web URLs.
mod nav;
/// Terminal UI components.
mod tui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flixterm_api::tmdb::TmdbClient;
use tracing::instrument;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::{AppConfig, resolve_config_path, resolve_log_dir};
use crate::tui::browser::state::Screen;
use crate::tui::run_browser;

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config/data directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Response language override (e.g. "en-US").
    #[arg(long, global = true)]
    language: Option<String>,

    /// Subcommand to run (defaults to `movies`).
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Browse movie lists.
    Movies,
    /// Browse TV series lists.
    Tv,
    /// Search movies and TV series by keyword.
    Search(SearchArgs),
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Keyword to search for.
    keyword: String,
}

/// Initializes file logging under the config directory.
///
/// Stdout belongs to the TUI, so log output goes to a daily-rolled file.
/// The returned guard flushes buffered log lines and must stay alive for
/// the duration of the program.
///
/// # Errors
///
/// Returns an error if the log directory cannot be resolved or created.
fn init_tracing(dir: Option<&PathBuf>) -> Result<WorkerGuard> {
    let log_dir = resolve_log_dir(dir).context("failed to resolve log directory")?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "flixterm.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(guard)
}

/// Builds a `TmdbClient` from the `TMDB_API_TOKEN` environment variable.
///
/// # Errors
///
/// Returns an error if `TMDB_API_TOKEN` is not set or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb_client() -> Result<TmdbClient> {
    let api_token = std::env::var("TMDB_API_TOKEN")
        .context("TMDB_API_TOKEN environment variable is required")?;

    TmdbClient::builder()
        .api_token(api_token)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build TMDB client")
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if setup or the browser TUI fails.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = init_tracing(cli.dir.as_ref())?;

    let config_path =
        resolve_config_path(cli.dir.as_ref()).context("failed to resolve config path")?;
    let mut config = AppConfig::load(&config_path).context("failed to load config")?;
    if let Some(language) = cli.language {
        config.api.language = language;
    }

    let client = build_tmdb_client()?;

    let screen = match cli.command {
        None | Some(Commands::Movies) => Screen::Movies,
        Some(Commands::Tv) => Screen::Tv,
        Some(Commands::Search(args)) => Screen::Search {
            keyword: args.keyword,
        },
    };

    tracing::info!(
        config = %config_path.display(),
        language = %config.api.language,
        screen = screen.title(),
        "starting browser"
    );

    run_browser(Arc::new(client), &config, screen).context("browser TUI failed")
}
