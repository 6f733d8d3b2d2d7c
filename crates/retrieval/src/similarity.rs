//! Set similarity for lexical ranking.

use clauserag_core::TermSet;

/// Jaccard similarity between two term sets: `|a ∩ b| / |a ∪ b|`.
///
/// Returns a value in [0, 1] where 1 = identical and 0 = disjoint.
/// Returns exactly 0.0 if either set is empty: no terms means no evidence
/// of relevance.
pub fn jaccard(a: &TermSet, b: &TermSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection_len(b);
    if intersection == 0 {
        return 0.0;
    }

    intersection as f64 / a.union_len(b) as f64
}
