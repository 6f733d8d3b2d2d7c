//! The stock clause set shipped with the binary.
//!
//! Four clauses from a property-management liability programme: the
//! third-party definition, the elevator exclusion, the employer's liability
//! scope, and the property deductible.

use clauserag_core::Passage;

use crate::in_memory::InMemoryCorpus;

const CLAUSES: [(&str, &str, &str); 4] = [
    (
        "doc_001",
        "Public Liability - Article 3",
        "In this insurance contract, a third party means any person other than \
         the insured and the insured's employees.",
    ),
    (
        "doc_002",
        "Public Liability - Exclusions",
        "Where a malfunction of an elevator or escalator causes death or bodily \
         injury to a third party, the insurer is not liable for compensation if \
         the insured failed to have the equipment periodically inspected as \
         required by national regulations.",
    ),
    (
        "doc_003",
        "Employer's Liability - Scope of Compensation",
        "An accidental injury suffered during working hours, at the workplace and \
         for work-related reasons falls within work injury liability, and the \
         insurer shall pay compensation as agreed.",
    ),
    (
        "doc_004",
        "Property All Risks - Deductible",
        "The absolute deductible for each accident is CNY 2000 or 10% of the \
         loss amount, whichever is higher.",
    ),
];

/// The built-in clauses, in corpus order.
pub fn builtin_passages() -> Vec<Passage> {
    CLAUSES
        .iter()
        .map(|(id, section, content)| Passage::new(*id, *section, *content))
        .collect()
}

/// The built-in clauses as a ready corpus.
pub fn builtin_corpus() -> InMemoryCorpus {
    InMemoryCorpus::from_trusted(builtin_passages())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clauserag_core::{PassageRepository, validate_passages};

    #[test]
    fn builtin_clauses_are_valid() {
        assert!(validate_passages(&builtin_passages()).is_ok());
    }

    #[test]
    fn builtin_corpus_order() {
        let corpus = builtin_corpus();
        let ids: Vec<_> = corpus.passages().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["doc_001", "doc_002", "doc_003", "doc_004"]);
    }

    #[test]
    fn elevator_exclusion_mentions_elevator() {
        let corpus = builtin_corpus();
        let clause = corpus.get("doc_002").unwrap();
        assert_eq!(clause.section, "Public Liability - Exclusions");
        assert!(clause.content.contains("elevator"));
    }
}
