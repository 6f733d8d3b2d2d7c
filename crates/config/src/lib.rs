//! Configuration loading, validation, and management for ClauseRAG.
//!
//! Loads configuration from `~/.clauserag/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use clauserag_core::{DEFAULT_TOP_K, clamp_top_k, parse_top_k};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.clauserag/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Retrieval settings
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Where the corpus comes from
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Answer generation rules and canned texts
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Maximum passages returned per query; negative values mean 0
    #[serde(default = "default_top_k", deserialize_with = "deserialize_top_k")]
    pub top_k: usize,

    /// Shortest run of word characters counted as a term
    #[serde(default = "default_min_term_len")]
    pub min_term_len: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

/// Accept any integer for `top_k`; `<= 0` clamps to 0 ("return nothing").
fn deserialize_top_k<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    if value < 0 {
        tracing::warn!(top_k = value, "Negative retrieval.top_k clamped to 0");
    }
    Ok(clamp_top_k(value))
}
fn default_min_term_len() -> usize {
    2
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            min_term_len: default_min_term_len(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// JSON or JSONL corpus file. Unset = built-in clauses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Whether the stock trigger rules (elevator, deductible) are active
    #[serde(default = "default_true")]
    pub builtin_rules: bool,

    /// Override the "not found in knowledge base" answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_found_answer: Option<String>,

    /// Override the generic answer template (`{section}`, `{content}`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_template: Option<String>,

    /// Override the system instruction placed at the top of the prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,

    /// Extra trigger rules, evaluated after the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<AnswerRuleConfig>,
}

fn default_true() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            builtin_rules: true,
            not_found_answer: None,
            fallback_template: None,
            system_instruction: None,
            rules: vec![],
        }
    }
}

/// A trigger → template answer rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRuleConfig {
    /// Unique name, reported when the rule fires
    pub name: String,

    /// Substrings that fire the rule when found in the query (case-insensitive)
    pub triggers: Vec<String>,

    /// Answer template; `{section}`, `{content}`, `{id}` and `{query}` are filled in
    pub template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.clauserag/config.toml).
    ///
    /// Also checks environment variables:
    /// - `CLAUSERAG_TOP_K`
    /// - `CLAUSERAG_CORPUS`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        Self::load_with_env(&config_path)
    }

    /// Load from `path`, then apply environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production, a map in tests).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("CLAUSERAG_TOP_K") {
            self.retrieval.top_k = parse_top_k(&raw)
                .map_err(|e| ConfigError::ValidationError(format!("CLAUSERAG_TOP_K: {e}")))?;
        }

        if let Some(path) = lookup("CLAUSERAG_CORPUS").filter(|p| !p.trim().is_empty()) {
            self.corpus.path = Some(PathBuf::from(path));
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".clauserag")
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retrieval.min_term_len == 0 {
            return Err(ConfigError::ValidationError(
                "retrieval.min_term_len must be at least 1".into(),
            ));
        }

        let mut names = HashSet::new();
        for (i, rule) in self.generator.rules.iter().enumerate() {
            if rule.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "generator.rules[{i}] has an empty name"
                )));
            }
            if !names.insert(rule.name.trim()) {
                return Err(ConfigError::ValidationError(format!(
                    "generator.rules[{i}] reuses the name `{}`",
                    rule.name
                )));
            }
            if rule.triggers.is_empty() || rule.triggers.iter().any(|t| t.trim().is_empty()) {
                return Err(ConfigError::ValidationError(format!(
                    "generator.rules[{i}] ({}) needs at least one non-empty trigger",
                    rule.name
                )));
            }
            if rule.template.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "generator.rules[{i}] ({}) has an empty template",
                    rule.name
                )));
            }
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `config init`).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
