//! CLI subcommands and the wiring they share.

pub mod ask;
pub mod config_cmd;
pub mod corpus;
pub mod demo;
pub mod retrieve;

use std::path::Path;
use std::sync::Arc;

use clauserag_agent::RagPipeline;
use clauserag_config::AppConfig;
use clauserag_core::PassageRepository;
use clauserag_retrieval::{FileCorpus, builtin_corpus};

/// clap value parser for `--top-k`: non-numeric is rejected, negative is 0.
pub fn parse_top_k_arg(raw: &str) -> Result<usize, String> {
    clauserag_core::parse_top_k(raw).map_err(|e| e.to_string())
}

/// Load the corpus named on the command line, else the configured one,
/// else the built-in clauses.
pub fn load_corpus(
    config: &AppConfig,
    override_path: Option<&Path>,
) -> Result<Arc<dyn PassageRepository>, Box<dyn std::error::Error>> {
    match override_path.or(config.corpus.path.as_deref()) {
        Some(path) => Ok(Arc::new(FileCorpus::load(path)?)),
        None => {
            tracing::debug!("No corpus file configured, using built-in clauses");
            Ok(Arc::new(builtin_corpus()))
        }
    }
}

/// Build the pipeline for this invocation.
pub fn build_pipeline(
    config: &AppConfig,
    override_path: Option<&Path>,
) -> Result<RagPipeline, Box<dyn std::error::Error>> {
    let corpus = load_corpus(config, override_path)?;
    Ok(RagPipeline::from_config(config, corpus))
}

/// First `max` characters of `text`, with an ellipsis when cut.
pub fn preview(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
