//! In-memory corpus — useful for testing and for the built-in clause set.

use clauserag_core::{Passage, PassageRepository, ValidationError, validate_passages};

/// A validated, read-only corpus held in a Vec.
#[derive(Debug, Clone)]
pub struct InMemoryCorpus {
    passages: Vec<Passage>,
}

impl InMemoryCorpus {
    /// Validate `passages` (non-blank, unique IDs) and wrap them.
    pub fn new(passages: Vec<Passage>) -> Result<Self, ValidationError> {
        validate_passages(&passages)?;
        Ok(Self { passages })
    }

    /// Wrap passages known to be valid at compile time (the built-in set).
    pub(crate) fn from_trusted(passages: Vec<Passage>) -> Self {
        debug_assert!(validate_passages(&passages).is_ok());
        Self { passages }
    }

    pub fn into_passages(self) -> Vec<Passage> {
        self.passages
    }
}

impl PassageRepository for InMemoryCorpus {
    fn name(&self) -> &str {
        "in_memory"
    }

    fn passages(&self) -> &[Passage] {
        &self.passages
    }
}
