//! ClauseRAG CLI — the main entry point.
//!
//! Commands:
//! - `demo`      — Run the two reference queries end-to-end
//! - `ask`       — Answer a single question
//! - `retrieve`  — Show ranked passages for a query
//! - `corpus`    — List or validate a corpus
//! - `config`    — Show, locate or initialize configuration

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clauserag_config::{AppConfig, ConfigError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

mod commands;

#[derive(Parser)]
#[command(
    name = "clauserag",
    about = "ClauseRAG — retrieve-then-generate answers over insurance policy clauses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ~/.clauserag/config.toml)
    #[arg(long, global = true, env = "CLAUSERAG_CONFIG")]
    config: Option<PathBuf>,

    /// Corpus file (JSON array or .jsonl); overrides the configured corpus
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference queries end-to-end
    Demo,

    /// Answer a question from the knowledge base
    Ask {
        /// The question
        query: String,

        /// Maximum passages used as context
        #[arg(short = 'k', long, value_parser = commands::parse_top_k_arg, allow_negative_numbers = true)]
        top_k: Option<usize>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Also print the prompt a generative model would receive
        #[arg(long)]
        show_prompt: bool,
    },

    /// Show the passages retrieved for a query
    Retrieve {
        /// The query
        query: String,

        /// Maximum passages returned
        #[arg(short = 'k', long, value_parser = commands::parse_top_k_arg, allow_negative_numbers = true)]
        top_k: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Corpus inspection
    Corpus {
        #[command(subcommand)]
        action: CorpusAction,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum CorpusAction {
    /// List the passages of the active corpus
    List,

    /// Validate a corpus file without running any query
    Validate {
        /// Path to the corpus file
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the config file path
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = load_config(&config_path, cli.verbose, std::io::stderr)
        .map_err(|e| format!("Failed to load config: {e}"))?;

    // Initialize tracing (stderr, so `--json` output stays parseable)
    let filter = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    if config.logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter(filter))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(filter))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let corpus = cli.corpus.as_deref();

    match cli.command {
        Commands::Demo => commands::demo::run(&config, corpus)?,
        Commands::Ask {
            query,
            top_k,
            json,
            show_prompt,
        } => commands::ask::run(&config, corpus, &query, top_k, json, show_prompt)?,
        Commands::Retrieve { query, top_k, json } => {
            commands::retrieve::run(&config, corpus, &query, top_k, json)?
        }
        Commands::Corpus { action } => match action {
            CorpusAction::List => commands::corpus::list(&config, corpus)?,
            CorpusAction::Validate { path } => commands::corpus::validate(&path)?,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show(&config)?,
            ConfigAction::Path => commands::config_cmd::path(&config_path)?,
            ConfigAction::Init { force } => commands::config_cmd::init(&config_path, force)?,
        },
    }

    Ok(())
}

/// `RUST_LOG` if set, else `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Load configuration under a provisional subscriber.
///
/// The logging settings live in the config itself, so events raised while
/// loading it (missing file, clamped values) go to `writer` at `info`, or
/// `debug` with `--verbose`.
fn load_config<W>(path: &Path, verbose: bool, writer: W) -> Result<AppConfig, ConfigError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let provisional = tracing_subscriber::fmt()
        .with_env_filter(env_filter(if verbose { "debug" } else { "info" }))
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .finish();
    tracing::subscriber::with_default(provisional, || AppConfig::load_with_env(path))
}
