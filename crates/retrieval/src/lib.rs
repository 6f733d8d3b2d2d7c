//! Lexical retrieval for ClauseRAG.
//!
//! Query → keyword extraction → Jaccard scoring against every passage →
//! top-k, plus the corpus backends the retriever reads from.

pub mod builtin;
pub mod file_backend;
pub mod in_memory;
pub mod keywords;
pub mod retriever;
pub mod similarity;

pub use builtin::{builtin_corpus, builtin_passages};
pub use file_backend::FileCorpus;
pub use in_memory::InMemoryCorpus;
pub use keywords::{DEFAULT_MIN_TERM_LEN, KeywordExtractor};
pub use retriever::{Retrieval, Retriever, retrieve};
pub use similarity::jaccard;
