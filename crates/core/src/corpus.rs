//! Corpus trait — read-only access to the passage collection.
//!
//! Retrieval never talks to a concrete data source. It is handed a
//! `PassageRepository`, which may be the built-in clause set, a file loaded
//! at startup, or a synthetic corpus in tests.

use crate::error::ValidationError;
use crate::passage::Passage;
use serde::Deserialize;
use std::collections::HashMap;

/// The core PassageRepository trait.
///
/// Implementations: in-memory, file-backed. Passages must be returned in
/// corpus order every time; ranking ties are broken by that order.
pub trait PassageRepository: Send + Sync {
    /// The repository name (e.g., "in_memory", "file").
    fn name(&self) -> &str;

    /// All passages, in corpus order.
    fn passages(&self) -> &[Passage];

    /// Look up a passage by ID.
    fn get(&self, id: &str) -> Option<&Passage> {
        self.passages().iter().find(|p| p.id == id)
    }

    fn len(&self) -> usize {
        self.passages().len()
    }

    fn is_empty(&self) -> bool {
        self.passages().is_empty()
    }
}

/// An unvalidated corpus record as it appears in a source file.
///
/// Every field is optional so that a missing field surfaces as a
/// `ValidationError::MissingField` rather than a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PassageRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Turn raw records into passages, enforcing required fields and unique IDs.
pub fn validate_records(
    records: impl IntoIterator<Item = PassageRecord>,
) -> Result<Vec<Passage>, ValidationError> {
    let passages = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = record
                .id
                .filter(|id| !id.trim().is_empty())
                .ok_or(ValidationError::MissingField { index, field: "id" })?;
            let section = record.section.ok_or(ValidationError::MissingField {
                index,
                field: "section",
            })?;
            let content = record.content.ok_or(ValidationError::MissingField {
                index,
                field: "content",
            })?;
            Ok(Passage { id, section, content })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    validate_passages(&passages)?;
    Ok(passages)
}

/// Check already-typed passages: IDs must be non-blank and unique.
pub fn validate_passages(passages: &[Passage]) -> Result<(), ValidationError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(passages.len());

    for (index, passage) in passages.iter().enumerate() {
        if passage.id.trim().is_empty() {
            return Err(ValidationError::MissingField { index, field: "id" });
        }
        if let Some(&first) = seen.get(passage.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: passage.id.clone(),
                first,
                index,
            });
        }
        seen.insert(passage.id.as_str(), index);
    }

    tracing::debug!(count = passages.len(), "Corpus validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: Option<&str>, section: Option<&str>, content: Option<&str>) -> PassageRecord {
        PassageRecord {
            id: id.map(Into::into),
            section: section.map(Into::into),
            content: content.map(Into::into),
        }
    }

    struct Fixed(Vec<Passage>);

    impl PassageRepository for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }
        fn passages(&self) -> &[Passage] {
            &self.0
        }
    }

    #[test]
    fn valid_records_become_passages() {
        let passages = validate_records(vec![
            record(Some("doc_001"), Some("A"), Some("first")),
            record(Some("doc_002"), Some("B"), Some("second")),
        ])
        .unwrap();
        assert_eq!(passages.len(), 2);
        assert_eq!(passages[1].id, "doc_002");
    }

    #[test]
    fn missing_section_is_rejected() {
        let err = validate_records(vec![
            record(Some("doc_001"), Some("A"), Some("first")),
            record(Some("doc_002"), None, Some("second")),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                index: 1,
                field: "section"
            }
        );
    }

    #[test]
    fn blank_id_counts_as_missing() {
        let err = validate_records(vec![record(Some("  "), Some("A"), Some("x"))]).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "id", .. }));
    }

    #[test]
    fn empty_content_is_allowed() {
        let passages = validate_records(vec![record(Some("doc_001"), Some(""), Some(""))]).unwrap();
        assert_eq!(passages[0].content, "");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = validate_passages(&[
            Passage::new("doc_001", "A", "x"),
            Passage::new("doc_002", "B", "y"),
            Passage::new("doc_001", "C", "z"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateId {
                id: "doc_001".into(),
                first: 0,
                index: 2
            }
        );
    }

    #[test]
    fn repository_defaults_use_passages() {
        let repo = Fixed(vec![Passage::new("a", "S", "C")]);
        assert_eq!(repo.len(), 1);
        assert!(!repo.is_empty());
        assert_eq!(repo.get("a").map(|p| p.section.as_str()), Some("S"));
        assert!(repo.get("b").is_none());
    }
}
