//! Grounding context assembly.
//!
//! | Output | Contents |
//! |--------|----------|
//! | Context block | `- [section]: content` per retrieved passage |
//! | Prompt | System instruction + context block + user question |

pub mod assembler;

pub use assembler::{ContextAssembler, DEFAULT_SYSTEM_INSTRUCTION};
