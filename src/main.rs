//! commentdash - Entry Point

use clap::Parser;
use commentdash::config::ResolvedConfig;
use commentdash::model::{AppError, PageSize};
use commentdash::source::{ProfileSource, RecordSource};
use commentdash::state::{AppState, FilterAction, FilterState, FilterStore};
use commentdash::storage::{JsonFileStore, KeyValueStore};
use commentdash::view::{CliArgs, ColorConfig};
use std::path::PathBuf;
use tracing::info;

/// Comments dashboard - search, sort and page through remote comments
#[derive(Parser, Debug)]
#[command(name = "commentdash")]
#[command(version)]
#[command(about = "TUI dashboard for searching, sorting and paginating comment records")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Load comments from a local JSON file instead of the network
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Start with this search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Rows per page (10, 50 or 100)
    #[arg(long)]
    pub page_size: Option<PageSize>,

    /// Comments endpoint URL
    #[arg(long)]
    pub comments_url: Option<String>,

    /// Users endpoint URL (profile page)
    #[arg(long)]
    pub users_url: Option<String>,

    /// Discard persisted search/sort/page state
    #[arg(long)]
    pub reset_state: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

/// Restore the filter store and apply the startup flags on top.
fn initial_state(storage: Box<dyn KeyValueStore>, config: &ResolvedConfig, args: &Args) -> AppState {
    let defaults = FilterState::with_page_size(config.default_page_size);
    let mut filters = FilterStore::load(storage, defaults.clone());

    if args.reset_state {
        info!("Resetting persisted filter state");
        filters.replace(defaults);
    }
    if let Some(page_size) = args.page_size {
        filters.dispatch(FilterAction::SetPageSize(page_size));
    }
    if let Some(search) = &args.search {
        filters.dispatch(FilterAction::Search(search.clone()));
    }

    AppState::new(filters)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())?;
    Ok(())
}

/// Resolve configuration, start logging and run the dashboard until quit.
fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = commentdash::config::load_config_with_precedence(args.config.clone())?;
        let merged = commentdash::config::merge_config(config_file);
        let with_env = commentdash::config::apply_env_overrides(merged);
        commentdash::config::apply_cli_overrides(
            with_env,
            args.comments_url.clone(),
            args.users_url.clone(),
            args.page_size,
        )
    };

    let _log_guard = commentdash::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let storage: Box<dyn KeyValueStore> =
        Box::new(JsonFileStore::open_or_empty(config.state_file_path.clone()));
    let app_state = initial_state(storage, &config, &args);

    let record_source = match args.file.clone() {
        Some(path) => RecordSource::File(path),
        None => RecordSource::Remote {
            url: config.comments_url.clone(),
            timeout: config.request_timeout,
        },
    };
    let profile_source = ProfileSource {
        url: config.users_url.clone(),
        timeout: config.request_timeout,
    };

    let cli_args = CliArgs::new(
        record_source,
        profile_source,
        ColorConfig::from_env_and_args(args.no_color),
    );

    commentdash::view::run_with_source(app_state, cli_args)?;

    info!("Exiting");
    Ok(())
}
