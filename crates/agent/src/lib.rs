//! The answer side of ClauseRAG.
//!
//! Retrieval hands over ranked passages; this crate turns them into an
//! answer:
//!
//! 1. **Assemble** the passages into a grounding context (and the prompt a
//!    real model would receive)
//! 2. **Generate** an answer with an ordered list of rules, first match wins
//! 3. **Report** everything as a structured `RagResult`

pub mod context;
pub mod generator;
pub mod pipeline;

pub use context::{ContextAssembler, DEFAULT_SYSTEM_INSTRUCTION};
pub use generator::{
    Answer, AnswerGenerator, AnswerOutcome, AnswerRule, CitationFallback, DEFAULT_NOT_FOUND_ANSWER,
    TriggerRule,
};
pub use pipeline::{RagPipeline, RagResult};
