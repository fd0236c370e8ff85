use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aimcentre_core::{AppConfig, Locale};

mod commands;

#[derive(Parser)]
#[command(name = "aimcentre")]
#[command(author, version, about = "Browse the AIM Centre 360 course catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Label language (en or bn), overriding the config
    #[arg(short = 'L', long = "lang", global = true)]
    lang: Option<Locale>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI carousel
    Run {
        /// Category to open with (defaults to the configured one)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Print the courses of a category
    List {
        /// Category identifier, e.g. "IELTS" or "English Medium"
        category: Option<String>,
        /// Class or support level, e.g. "Class 5" or "Autism Level 2"
        #[arg(short, long)]
        sub: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List categories and their classes or levels
    Categories,
    /// Show the effective configuration
    Config {
        /// Print only the config file location
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()
        .with_context(|| format!("loading {}", AppConfig::config_path().display()))?;
    if let Some(lang) = cli.lang {
        config.general.locale = lang;
    }

    let interactive = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run { category }) => {
            if let Some(category) = category {
                config.general.default_category = category;
            }
            commands::run::run(Arc::new(config))
        }
        None => commands::run::run(Arc::new(config)),
        Some(Commands::List { category, sub, json }) => {
            let category = category.unwrap_or_else(|| config.general.default_category.clone());
            commands::list::run(&config, &category, sub.as_deref(), json)
        }
        Some(Commands::Categories) => commands::categories::run(&config),
        Some(Commands::Config { path }) => commands::config::run(&config, path),
    }
}

/// Initialize logging.
///
/// `RUST_LOG` wins over `general.log_level`. Output goes to the configured
/// log file; without one it goes to stderr, except while the TUI owns the
/// terminal.
fn init_logging(config: &AppConfig, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let file_layer = match config.log_file() {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let stderr_layer = (file_layer.is_none() && !interactive).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}
