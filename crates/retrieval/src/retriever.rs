//! Top-k lexical retrieval over a passage corpus.
//!
//! # Ranking
//!
//! 1. Extract the query terms once
//! 2. Score every passage (in corpus order) by Jaccard similarity
//! 3. Drop passages scoring `<= 0` — no overlap is not relevance
//! 4. Stable sort by score descending, so ties keep corpus order
//! 5. Keep the first `top_k`
//!
//! Ranking is deterministic: identical inputs always produce identical
//! outputs. No random or time-dependent logic is involved.

use std::sync::Arc;

use clauserag_core::{Passage, PassageRepository, ScoredPassage, TermSet};
use tracing::debug;

use crate::keywords::KeywordExtractor;
use crate::similarity::jaccard;

/// Rank `passages` against `query` and return at most `top_k` hits.
///
/// Stateless form of [`Retriever::retrieve`]: passage terms are extracted
/// on every call.
pub fn retrieve(
    extractor: &KeywordExtractor,
    query: &str,
    passages: &[Passage],
    top_k: usize,
) -> Vec<ScoredPassage> {
    if top_k == 0 || passages.is_empty() {
        return Vec::new();
    }

    let query_terms = extractor.extract(query);
    let scored = passages
        .iter()
        .map(|p| (p, jaccard(&query_terms, &extractor.extract(&p.content))));
    rank(scored, top_k)
}

/// Filter, order and truncate `(passage, score)` pairs given in corpus order.
fn rank<'a>(scored: impl Iterator<Item = (&'a Passage, f64)>, top_k: usize) -> Vec<ScoredPassage> {
    let mut hits: Vec<ScoredPassage> = scored
        .filter(|(_, score)| *score > 0.0)
        .map(|(p, score)| ScoredPassage::new(p.clone(), score))
        .collect();

    // `sort_by` is stable; equal scores stay in corpus order.
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(top_k);
    hits
}

/// Ranked results plus the query terms they were scored against.
#[derive(Debug, Clone)]
pub struct Retrieval {
    pub query_terms: TermSet,
    pub hits: Vec<ScoredPassage>,
}

/// A retriever bound to one immutable corpus.
///
/// Passage term sets are computed once at construction; the corpus cannot
/// change afterwards, so they never go stale.
pub struct Retriever {
    corpus: Arc<dyn PassageRepository>,
    extractor: KeywordExtractor,
    passage_terms: Vec<TermSet>,
}

impl Retriever {
    /// Create a retriever over `corpus` using the default extractor.
    pub fn new(corpus: Arc<dyn PassageRepository>) -> Self {
        Self::with_extractor(corpus, KeywordExtractor::default())
    }

    /// Create a retriever with a custom keyword extractor.
    pub fn with_extractor(corpus: Arc<dyn PassageRepository>, extractor: KeywordExtractor) -> Self {
        let passage_terms = corpus
            .passages()
            .iter()
            .map(|p| extractor.extract(&p.content))
            .collect();

        debug!(
            corpus = corpus.name(),
            passages = corpus.len(),
            min_term_len = extractor.min_len(),
            "Retriever indexed corpus"
        );

        Self {
            corpus,
            extractor,
            passage_terms,
        }
    }

    pub fn corpus(&self) -> &dyn PassageRepository {
        self.corpus.as_ref()
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    /// Return at most `top_k` passages relevant to `query`, best first.
    pub fn retrieve(&self, query: &str, top_k: usize) -> Vec<ScoredPassage> {
        self.explain(query, top_k).hits
    }

    /// Like [`retrieve`](Self::retrieve), but also report the query terms.
    pub fn explain(&self, query: &str, top_k: usize) -> Retrieval {
        let query_terms = self.extractor.extract(query);

        let hits = if top_k == 0 {
            Vec::new()
        } else {
            let scored = self
                .corpus
                .passages()
                .iter()
                .zip(&self.passage_terms)
                .map(|(p, terms)| (p, jaccard(&query_terms, terms)));
            rank(scored, top_k)
        };

        debug!(
            query_terms = %query_terms,
            hits = hits.len(),
            top_k,
            "Retrieval complete"
        );

        Retrieval { query_terms, hits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::InMemoryCorpus;
    use proptest::prelude::*;

    fn corpus(passages: Vec<Passage>) -> Arc<dyn PassageRepository> {
        Arc::new(InMemoryCorpus::new(passages).unwrap())
    }

    fn retriever(passages: Vec<Passage>) -> Retriever {
        Retriever::new(corpus(passages))
    }

    #[test]
    fn elevator_passage_is_found() {
        let r = retriever(vec![Passage::new(
            "doc_002",
            "Elevator exclusion",
            "elevator malfunction third-party injury",
        )]);

        let hits = r.retrieve("Who pays after an elevator accident?", 2);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), "doc_002");
        assert!(hits[0].score > 0.0);
    }

    #[test]
    fn no_overlap_returns_nothing() {
        let r = retriever(vec![
            Passage::new("a", "A", "elevator malfunction"),
            Passage::new("b", "B", "deductible amount"),
        ]);
        assert!(r.retrieve("weather forecast tomorrow", 2).is_empty());
    }

    #[test]
    fn empty_corpus_returns_nothing() {
        let r = retriever(vec![]);
        assert!(r.retrieve("elevator", 2).is_empty());
        assert!(retrieve(&KeywordExtractor::default(), "elevator", &[], 2).is_empty());
    }

    #[test]
    fn zero_top_k_returns_nothing() {
        let r = retriever(vec![Passage::new("a", "A", "elevator")]);
        assert!(r.retrieve("elevator", 0).is_empty());
    }

    #[test]
    fn ranks_by_score_descending() {
        let r = retriever(vec![
            Passage::new("weak", "W", "elevator escalator stairs ramp"),
            Passage::new("strong", "S", "elevator injury"),
        ]);
        let hits = r.retrieve("elevator injury", 2);
        assert_eq!(hits[0].id(), "strong");
        assert_eq!(hits[1].id(), "weak");
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn ties_keep_corpus_order() {
        // Both passages share one of two distinct terms with the query: 0.5.
        let r = retriever(vec![
            Passage::new("p1", "First", "elevator"),
            Passage::new("p2", "Second", "elevator"),
        ]);
        let hits = r.retrieve("elevator injury", 2);
        assert_eq!(hits[0].score, 0.5);
        assert_eq!(hits[1].score, 0.5);
        assert_eq!(hits[0].id(), "p1");

        let top = r.retrieve("elevator injury", 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id(), "p1");
    }

    #[test]
    fn explain_reports_query_terms() {
        let r = retriever(vec![Passage::new("a", "A", "elevator")]);
        let retrieval = r.explain("Elevator, broken!", 2);
        assert!(retrieval.query_terms.contains("elevator"));
        assert!(retrieval.query_terms.contains("broken"));
        assert_eq!(retrieval.hits.len(), 1);
    }

    #[test]
    fn stateless_and_indexed_forms_agree() {
        let passages = vec![
            Passage::new("a", "A", "elevator injury insurer"),
            Passage::new("b", "B", "deductible insurer"),
            Passage::new("c", "C", "employer injury"),
        ];
        let r = retriever(passages.clone());
        let query = "does the insurer cover an injury";
        assert_eq!(
            r.retrieve(query, 3),
            retrieve(&KeywordExtractor::default(), query, &passages, 3)
        );
    }

    fn passages() -> impl Strategy<Value = Vec<Passage>> {
        prop::collection::vec("([a-d]{2} ){0,4}", 0..8).prop_map(|contents| {
            contents
                .into_iter()
                .enumerate()
                .map(|(i, c)| Passage::new(format!("p{i}"), format!("S{i}"), c))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn respects_top_k_and_positive_scores(
            ps in passages(),
            query in "([a-d]{2} ){0,4}",
            top_k in 0usize..5,
        ) {
            let hits = retrieve(&KeywordExtractor::default(), &query, &ps, top_k);
            prop_assert!(hits.len() <= top_k);
            prop_assert!(hits.iter().all(|h| h.score > 0.0 && h.score <= 1.0));
        }

        #[test]
        fn sorted_with_stable_ties(ps in passages(), query in "([a-d]{2} ){0,4}") {
            let hits = retrieve(&KeywordExtractor::default(), &query, &ps, ps.len());
            let position = |id: &str| ps.iter().position(|p| p.id == id).unwrap_or(usize::MAX);
            for pair in hits.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    prop_assert!(position(pair[0].id()) < position(pair[1].id()));
                }
            }
        }

        #[test]
        fn idempotent(ps in passages(), query in "([a-d]{2} ){0,4}") {
            let r = Retriever::new(corpus(ps));
            prop_assert_eq!(r.retrieve(&query, 3), r.retrieve(&query, 3));
        }
    }
}
