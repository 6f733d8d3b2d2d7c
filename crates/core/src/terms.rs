//! Term sets — the lexical fingerprint of a piece of text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of normalized terms extracted from text.
///
/// Equality ignores insertion order and duplicates collapse. The backing
/// set is ordered so iteration (and therefore logging and JSON output) is
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermSet(BTreeSet<String>);

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term. Returns `false` if it was already present.
    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        self.0.insert(term.into())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of terms present in both sets.
    pub fn intersection_len(&self, other: &TermSet) -> usize {
        // Walk the smaller set, probe the larger.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.0.iter().filter(|t| large.0.contains(*t)).count()
    }

    /// Number of distinct terms present in either set.
    pub fn union_len(&self, other: &TermSet) -> usize {
        self.len() + other.len() - self.intersection_len(other)
    }
}

impl<S: Into<String>> FromIterator<S> for TermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for TermSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, term) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(term)?;
        }
        f.write_str("}")
    }
}
