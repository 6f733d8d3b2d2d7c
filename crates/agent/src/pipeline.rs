//! RAG pipeline — retrieve, assemble, generate.
//!
//! The pipeline ranks corpus passages against the query, renders them as a
//! grounding context, and produces an answer grounded in that context.
//! Nothing is printed: every intermediate product is returned in a
//! [`RagResult`] for the caller (or a log layer) to render.
//!
//! # Flow
//!
//! 1. Receive user question
//! 2. Retrieve the top-k passages by lexical overlap
//! 3. Assemble the context block and the full prompt
//! 4. Generate the answer from the rule list
//! 5. Return answer, passages, context and the rule that fired

use std::sync::Arc;

use clauserag_config::AppConfig;
use clauserag_core::{DEFAULT_TOP_K, PassageRepository, ScoredPassage, TermSet};
use clauserag_retrieval::{KeywordExtractor, Retriever};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::context::ContextAssembler;
use crate::generator::{Answer, AnswerGenerator};

/// Everything one pipeline run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagResult {
    /// The query as received.
    pub query: String,
    /// Terms extracted from the query.
    pub query_terms: TermSet,
    /// Retrieved passages, best first.
    pub retrieved: Vec<ScoredPassage>,
    /// The assembled context block (empty when nothing was retrieved).
    pub context: String,
    /// The prompt a generative model would have been sent.
    pub prompt: String,
    /// The generated answer and the case that produced it.
    pub answer: Answer,
}

/// The retrieve-then-generate pipeline over one corpus.
pub struct RagPipeline {
    retriever: Retriever,
    assembler: ContextAssembler,
    generator: AnswerGenerator,
    top_k: usize,
}

impl RagPipeline {
    pub fn new(retriever: Retriever, assembler: ContextAssembler, generator: AnswerGenerator) -> Self {
        Self {
            retriever,
            assembler,
            generator,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Default assembler and built-in rules over `corpus`.
    pub fn with_defaults(corpus: Arc<dyn PassageRepository>) -> Self {
        Self::new(
            Retriever::new(corpus),
            ContextAssembler::default(),
            AnswerGenerator::default(),
        )
    }

    /// Wire every component from configuration.
    pub fn from_config(config: &AppConfig, corpus: Arc<dyn PassageRepository>) -> Self {
        let extractor = KeywordExtractor::new(config.retrieval.min_term_len);
        let assembler = config
            .generator
            .system_instruction
            .as_deref()
            .map(ContextAssembler::new)
            .unwrap_or_default();

        Self::new(
            Retriever::with_extractor(corpus, extractor),
            assembler,
            AnswerGenerator::from_config(&config.generator),
        )
        .with_top_k(config.retrieval.top_k)
    }

    /// Set the default number of passages retrieved per query.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn retriever(&self) -> &Retriever {
        &self.retriever
    }

    pub fn assembler(&self) -> &ContextAssembler {
        &self.assembler
    }

    pub fn generator(&self) -> &AnswerGenerator {
        &self.generator
    }

    /// Run the pipeline with the configured `top_k`.
    pub fn run(&self, query: &str) -> RagResult {
        self.run_with_top_k(query, self.top_k)
    }

    /// Run the pipeline retrieving at most `top_k` passages.
    pub fn run_with_top_k(&self, query: &str, top_k: usize) -> RagResult {
        info!(corpus = self.retriever.corpus().name(), top_k, "RAG: starting retrieval");

        // ── Step 1: Retrieve passages ──
        let retrieval = self.retriever.explain(query, top_k);
        debug!(query_terms = %retrieval.query_terms, "RAG: query terms extracted");

        for hit in &retrieval.hits {
            debug!(id = hit.id(), section = hit.section(), score = hit.score, "RAG: passage retrieved");
        }

        // ── Step 2: Assemble grounding context ──
        let context = self.assembler.assemble(&retrieval.hits);
        let prompt = self.assembler.build_prompt(query, &retrieval.hits);
        debug!(prompt = %prompt, "RAG: prompt assembled");

        // ── Step 3: Generate grounded answer ──
        let answer = self.generator.generate(query, &retrieval.hits);

        info!(
            retrieved = retrieval.hits.len(),
            outcome = ?answer.outcome,
            answer_len = answer.text.len(),
            "RAG: response generated"
        );

        RagResult {
            query: query.to_string(),
            query_terms: retrieval.query_terms,
            retrieved: retrieval.hits,
            context,
            prompt,
            answer,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
