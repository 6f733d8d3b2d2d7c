//! # ClauseRAG Core
//!
//! Domain types, traits, and error definitions for the ClauseRAG retrieval
//! pipeline. This crate has **no pipeline logic** — it defines the domain
//! model that the retrieval and agent crates implement against.
//!
//! ## Design Philosophy
//!
//! The corpus is reached only through the `PassageRepository` trait, so
//! retrieval can run over the built-in clauses, a file loaded at startup,
//! or a synthetic corpus in tests without any change to ranking code.

pub mod corpus;
pub mod error;
pub mod passage;
pub mod query;
pub mod terms;

// Re-export key types at crate root for ergonomics
pub use corpus::{PassageRecord, PassageRepository, validate_passages, validate_records};
pub use error::{Error, Result, ValidationError};
pub use passage::{Passage, ScoredPassage};
pub use query::{DEFAULT_TOP_K, clamp_top_k, parse_top_k};
pub use terms::TermSet;
