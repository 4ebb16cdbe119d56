//! model-selector - inspect provider/model selection against a catalog

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use model_selector::selector::load_script;
use model_selector::{Catalog, Config, ModelLoading, ModelSelector, Selection, paths};
use std::path::{Path, PathBuf};
use tracing::info;

/// Provider and model selection with consistent reconciliation under catalog changes
#[derive(Parser)]
#[command(name = "model-selector")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile a selection against a catalog and print the options
    View {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,
        /// Selected provider (defaults to the configured provider)
        #[arg(long)]
        provider: Option<String>,
        /// Selected model (defaults to the configured model)
        #[arg(long)]
        model: Option<String>,
        /// Loading token: empty, "all", or a provider name
        #[arg(long, default_value = "")]
        loading: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replay a JSON-lines event script, printing the selection after each event
    Replay {
        /// Event script (one JSON event per line)
        script: PathBuf,
        /// Catalog to mount with (defaults to an empty catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Print JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Print the config file path instead
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = Config::load_or_default();
    info!("Starting model-selector");

    match cli.command {
        Commands::View {
            catalog,
            provider,
            model,
            loading,
            json,
        } => cmd_view(&config, &catalog, provider, model, &loading, json),
        Commands::Replay {
            script,
            catalog,
            json,
        } => cmd_replay(&config, &script, catalog.as_deref(), json),
        Commands::Config { path } => cmd_config(&config, path),
    }
}

// Log to <temp>/model-selector.log - tail with: tail -f /tmp/model-selector.log
// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
fn init_logging() {
    let log_path = paths::log_path();
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let log_dir = log_path
            .parent()
            .map_or_else(std::env::temp_dir, Path::to_path_buf);
        let file_appender = tracing_appender::rolling::never(log_dir, paths::log_file_name());
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}

fn cmd_view(
    config: &Config,
    catalog: &Path,
    provider: Option<String>,
    model: Option<String>,
    loading: &str,
    json: bool,
) -> Result<()> {
    let catalog = Catalog::from_path(catalog)?;

    let mut selection = config.initial_selection();
    if provider.is_some() {
        selection.provider = provider;
    }
    if model.is_some() {
        selection.model = model;
    }

    let selector = ModelSelector::new(selection, catalog, ModelLoading::from_token(loading));
    let view = selector.view(config);

    if json {
        let output = serde_json::json!({
            "selection": selector.selection(),
            "view": view,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize view")?
        );
    } else {
        println!("Selection: {}", describe(selector.selection()));
        print!("{view}");
    }
    Ok(())
}

fn cmd_replay(config: &Config, script: &Path, catalog: Option<&Path>, json: bool) -> Result<()> {
    let events = load_script(script)?;
    let catalog = catalog.map(Catalog::from_path).transpose()?.unwrap_or_default();

    let mut selector = ModelSelector::new(config.initial_selection(), catalog, ModelLoading::Idle);
    print_step(0, "mount", selector.selection(), json)?;

    for (idx, event) in events.into_iter().enumerate() {
        let name = event.name();
        selector.handle(event);
        print_step(idx + 1, name, selector.selection(), json)?;
    }
    Ok(())
}

fn cmd_config(config: &Config, path: bool) -> Result<()> {
    if path {
        println!("{}", Config::default_path().display());
    } else {
        println!(
            "{}",
            serde_json::to_string_pretty(config).context("Failed to serialize config")?
        );
    }
    Ok(())
}

fn print_step(step: usize, event: &str, selection: &Selection, json: bool) -> Result<()> {
    if json {
        let line = serde_json::json!({
            "step": step,
            "event": event,
            "selection": selection,
        });
        println!(
            "{}",
            serde_json::to_string(&line).context("Failed to serialize step")?
        );
    } else {
        println!("{step:>3} {event:<18} {}", describe(selection));
    }
    Ok(())
}

fn describe(selection: &Selection) -> String {
    format!(
        "provider={} model={}",
        selection.provider_name().unwrap_or("-"),
        selection.model_name().unwrap_or("-")
    )
}
