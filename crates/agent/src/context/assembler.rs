//! Context assembly — retrieved passages to grounding text.
//!
//! Two renderings are produced from the same ranked passages:
//!
//! 1. **Context block** — one `- [section]: content` line per passage, in
//!    ranking order. Empty input gives an empty block, which downstream
//!    reads as "no grounding available".
//! 2. **Prompt** — the context block wrapped with a system instruction and
//!    the user question: exactly what a real generative model would be sent.
//!
//! # Determinism
//!
//! Assembly is deterministic: identical inputs always produce identical
//! outputs.

use clauserag_core::ScoredPassage;

/// Instruction placed at the top of every prompt unless overridden.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a professional insurance claims advisor. \
Answer the user's question using only the known information quoted below. \
If the known information cannot answer it, reply \"I don't know\".";

/// Renders retrieved passages into grounding context.
#[derive(Debug, Clone)]
pub struct ContextAssembler {
    system_instruction: String,
}

impl ContextAssembler {
    pub fn new(system_instruction: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Render `results` (already ranked) as one labeled line each.
    pub fn assemble(&self, results: &[ScoredPassage]) -> String {
        results
            .iter()
            .map(render_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the full prompt for `query` grounded in `results`.
    pub fn build_prompt(&self, query: &str, results: &[ScoredPassage]) -> String {
        format!(
            "[System Instruction]\n{}\n\n[Known Information]\n{}\n\n[User Question]\n{}",
            self.system_instruction,
            self.assemble(results),
            query.trim(),
        )
    }
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_INSTRUCTION)
    }
}

fn render_line(result: &ScoredPassage) -> String {
    format!("- [{}]: {}", result.section(), result.content())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clauserag_core::Passage;

    // ── Helpers ────────────────────────────────────────────────────────

    fn scored(id: &str, section: &str, content: &str, score: f64) -> ScoredPassage {
        ScoredPassage::new(Passage::new(id, section, content), score)
    }

    // ── Tests ──────────────────────────────────────────────────────────

    #[test]
    fn empty_results_give_empty_context() {
        let asm = ContextAssembler::default();
        assert_eq!(asm.assemble(&[]), "");
    }

    #[test]
    fn one_line_per_result_in_given_order() {
        let asm = ContextAssembler::default();
        let context = asm.assemble(&[
            scored("doc_004", "Deductible", "CNY 2000 or 10%", 0.3),
            scored("doc_002", "Exclusions", "elevator malfunction", 0.1),
        ]);
        assert_eq!(
            context,
            "- [Deductible]: CNY 2000 or 10%\n- [Exclusions]: elevator malfunction"
        );
    }

    #[test]
    fn prompt_contains_all_parts() {
        let asm = ContextAssembler::default();
        let prompt = asm.build_prompt(
            "  Is the elevator covered?  ",
            &[scored("doc_002", "Exclusions", "elevator malfunction", 0.2)],
        );
        assert!(prompt.starts_with("[System Instruction]\nYou are a professional insurance claims advisor."));
        assert!(prompt.contains("[Known Information]\n- [Exclusions]: elevator malfunction"));
        assert!(prompt.ends_with("[User Question]\nIs the elevator covered?"));
    }

    #[test]
    fn custom_instruction() {
        let asm = ContextAssembler::new("Answer briefly.");
        assert_eq!(asm.system_instruction(), "Answer briefly.");
        assert!(asm.build_prompt("q", &[]).starts_with("[System Instruction]\nAnswer briefly."));
    }

    #[test]
    fn deterministic_assembly() {
        let asm = ContextAssembler::default();
        let results = vec![
            scored("a", "A", "first", 0.5),
            scored("b", "B", "second", 0.5),
        ];
        assert_eq!(asm.build_prompt("q", &results), asm.build_prompt("q", &results));
    }
}
