//! File-backed corpus — passages loaded once from JSON or JSON Lines.
//!
//! Two layouts are accepted, chosen by file extension:
//!
//! - `.jsonl`: one `{"id", "section", "content"}` object per line, blank
//!   lines ignored
//! - anything else: a single JSON array of such objects
//!
//! The whole file is validated before the corpus is handed out. Unlike a
//! mutable store, a bad record is fatal: a half-loaded corpus would rank
//! differently from the one the caller asked for.

use std::path::{Path, PathBuf};

use clauserag_core::{Error, Passage, PassageRecord, PassageRepository, Result, ValidationError};
use tracing::{debug, info};

/// A corpus read from disk at startup.
#[derive(Debug, Clone)]
pub struct FileCorpus {
    path: PathBuf,
    passages: Vec<Passage>,
}

impl FileCorpus {
    /// Load and validate the corpus at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let records = if is_jsonl(path) {
            parse_jsonl(&content)?
        } else {
            parse_json_array(&content)?
        };
        debug!(path = %path.display(), records = records.len(), "Corpus file parsed");

        let passages = clauserag_core::validate_records(records)?;
        info!(path = %path.display(), passages = passages.len(), "Corpus loaded");

        Ok(Self {
            path: path.to_path_buf(),
            passages,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PassageRepository for FileCorpus {
    fn name(&self) -> &str {
        "file"
    }

    fn passages(&self) -> &[Passage] {
        &self.passages
    }
}

fn is_jsonl(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("jsonl"))
}

fn parse_json_array(content: &str) -> Result<Vec<PassageRecord>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let serde_json::Value::Array(items) = value else {
        return Err(ValidationError::Malformed {
            index: 0,
            reason: "expected a JSON array of passage records".into(),
        }
        .into());
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| to_record(index, item))
        .collect()
}

fn parse_jsonl(content: &str) -> Result<Vec<PassageRecord>> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| {
            let item = serde_json::from_str(line).map_err(|e| ValidationError::Malformed {
                index,
                reason: e.to_string(),
            })?;
            to_record(index, item)
        })
        .collect()
}

fn to_record(index: usize, item: serde_json::Value) -> Result<PassageRecord> {
    if !item.is_object() {
        return Err(ValidationError::Malformed {
            index,
            reason: "record is not a JSON object".into(),
        }
        .into());
    }
    serde_json::from_value(item).map_err(|e| {
        ValidationError::Malformed {
            index,
            reason: e.to_string(),
        }
        .into()
    })
}
