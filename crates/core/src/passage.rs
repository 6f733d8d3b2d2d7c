//! Passage types — the unit of retrieval.

use serde::{Deserialize, Serialize};

/// A single clause of the knowledge base.
///
/// Passages are created once when the corpus is loaded and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// Unique identifier within the corpus (e.g. `doc_002`)
    pub id: String,

    /// Human-readable section label the passage is cited under
    pub section: String,

    /// The clause text itself
    pub content: String,
}

impl Passage {
    pub fn new(
        id: impl Into<String>,
        section: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            section: section.into(),
            content: content.into(),
        }
    }
}

/// A passage paired with its relevance to one query.
///
/// Serializes flat as `{id, section, content, score}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPassage {
    #[serde(flatten)]
    pub passage: Passage,

    /// Jaccard similarity against the query, in `[0, 1]`
    pub score: f64,
}

impl ScoredPassage {
    pub fn new(passage: Passage, score: f64) -> Self {
        Self { passage, score }
    }

    pub fn id(&self) -> &str {
        &self.passage.id
    }

    pub fn section(&self) -> &str {
        &self.passage.section
    }

    pub fn content(&self) -> &str {
        &self.passage.content
    }
}
