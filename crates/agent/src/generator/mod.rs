//! Rule-based answer generation — a deterministic stand-in for an LLM.
//!
//! Evaluation is a single pass over guarded cases, first match wins:
//!
//! 1. No context → the fixed "not found" answer
//! 2. Each configured [`AnswerRule`], in priority order
//! 3. [`CitationFallback`], which always matches and cites the top passage
//!
//! Every path is terminal; there are no retries or loops.

pub mod rules;
pub mod template;

use clauserag_config::GeneratorConfig;
use clauserag_core::ScoredPassage;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use rules::{AnswerRule, CitationFallback, DEFAULT_FALLBACK_TEMPLATE, TriggerRule, builtin_rules};

/// Answer returned when retrieval found nothing.
pub const DEFAULT_NOT_FOUND_ANSWER: &str =
    "Sorry, no relevant clause was found in the knowledge base, so this question cannot be answered.";

/// Which case produced an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerOutcome {
    /// Retrieval returned nothing; the not-found answer was used.
    NoContext,
    /// A rule fired.
    TriggerMatched { rule: String },
    /// No rule fired; the top passage was cited.
    GenericFallback,
}

/// A generated answer and how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub outcome: AnswerOutcome,
}

/// Ordered rule list plus the not-found and fallback cases.
pub struct AnswerGenerator {
    rules: Vec<Box<dyn AnswerRule>>,
    fallback: CitationFallback,
    not_found: String,
}

impl AnswerGenerator {
    /// A generator with no rules: every answer is not-found or the fallback.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: CitationFallback::default(),
            not_found: DEFAULT_NOT_FOUND_ANSWER.into(),
        }
    }

    /// A generator with the stock rules.
    pub fn with_builtin_rules() -> Self {
        builtin_rules()
            .into_iter()
            .fold(Self::new(), |generator, rule| generator.with_rule(rule))
    }

    /// Build from configuration: stock rules (if enabled), then configured
    /// rules, then any text overrides.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut generator = if config.builtin_rules {
            Self::with_builtin_rules()
        } else {
            Self::new()
        };

        for rule in &config.rules {
            generator.push_rule(Box::new(TriggerRule::from(rule)));
        }
        if let Some(text) = &config.not_found_answer {
            generator.not_found = text.clone();
        }
        if let Some(template) = &config.fallback_template {
            generator.fallback = CitationFallback::new(template.clone());
        }

        generator
    }

    /// Append a rule after the existing ones.
    pub fn with_rule(mut self, rule: impl AnswerRule + 'static) -> Self {
        self.push_rule(Box::new(rule));
        self
    }

    pub fn push_rule(&mut self, rule: Box<dyn AnswerRule>) {
        self.rules.push(rule);
    }

    pub fn with_not_found_answer(mut self, text: impl Into<String>) -> Self {
        self.not_found = text.into();
        self
    }

    pub fn with_fallback_template(mut self, template: impl Into<String>) -> Self {
        self.fallback = CitationFallback::new(template);
        self
    }

    /// Names of the configured rules, in evaluation order (fallback excluded).
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Produce an answer for `query` grounded in `context`.
    pub fn generate(&self, query: &str, context: &[ScoredPassage]) -> Answer {
        if context.is_empty() {
            debug!("No context; using not-found answer");
            return Answer {
                text: self.not_found.clone(),
                outcome: AnswerOutcome::NoContext,
            };
        }

        if let Some(rule) = self.rules.iter().find(|r| r.matches(query, context)) {
            debug!(rule = rule.name(), "Answer rule matched");
            return Answer {
                text: rule.render(query, context),
                outcome: AnswerOutcome::TriggerMatched {
                    rule: rule.name().to_string(),
                },
            };
        }

        debug!("No rule matched; citing top passage");
        Answer {
            text: self.fallback.render(query, context),
            outcome: AnswerOutcome::GenericFallback,
        }
    }

    /// [`generate`](Self::generate), returning only the text.
    pub fn generate_text(&self, query: &str, context: &[ScoredPassage]) -> String {
        self.generate(query, context).text
    }
}

impl Default for AnswerGenerator {
    fn default() -> Self {
        Self::with_builtin_rules()
    }
}

impl std::fmt::Debug for AnswerGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnswerGenerator")
            .field("rules", &self.rule_names())
            .field("fallback", &self.fallback)
            .field("not_found", &self.not_found)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clauserag_config::AnswerRuleConfig;
    use clauserag_core::Passage;

    fn scored(id: &str, section: &str, content: &str) -> ScoredPassage {
        ScoredPassage::new(Passage::new(id, section, content), 0.4)
    }

    fn elevator_context() -> Vec<ScoredPassage> {
        vec![scored(
            "doc_002",
            "Elevator exclusion",
            "elevator malfunction third-party injury",
        )]
    }

    /// Fires on queries ending with a question mark.
    struct QuestionRule;

    impl AnswerRule for QuestionRule {
        fn name(&self) -> &str {
            "question"
        }
        fn matches(&self, query: &str, _context: &[ScoredPassage]) -> bool {
            query.trim_end().ends_with('?')
        }
        fn render(&self, _query: &str, context: &[ScoredPassage]) -> String {
            format!("{} passages", context.len())
        }
    }

    #[test]
    fn empty_context_is_not_found_regardless_of_query() {
        let generator = AnswerGenerator::default();
        for query in ["elevator accident", "deductible?", "", "anything"] {
            let answer = generator.generate(query, &[]);
            assert_eq!(answer.outcome, AnswerOutcome::NoContext);
            assert_eq!(answer.text, DEFAULT_NOT_FOUND_ANSWER);
        }
    }

    #[test]
    fn elevator_query_gets_elevator_answer() {
        let generator = AnswerGenerator::default();
        let answer = generator.generate("Who pays after an elevator accident?", &elevator_context());
        assert_eq!(
            answer.outcome,
            AnswerOutcome::TriggerMatched {
                rule: "elevator_exclusion".into()
            }
        );
        assert!(answer.text.starts_with("According to the Elevator exclusion clause"));
        assert!(answer.text.contains("maintenance records"));
    }

    #[test]
    fn deductible_query_gets_deductible_answer() {
        let generator = AnswerGenerator::default();
        let context = vec![scored(
            "doc_004",
            "Property All Risks - Deductible",
            "The absolute deductible for each accident is CNY 2000 or 10% of the loss amount.",
        )];
        let answer = generator.generate("What is the deductible?", &context);
        assert_eq!(
            answer.outcome,
            AnswerOutcome::TriggerMatched {
                rule: "deductible".into()
            }
        );
        assert!(answer.text.contains("CNY 2000 or 10%"));
        assert!(answer.text.contains("Property All Risks - Deductible"));
    }

    #[test]
    fn first_matching_rule_wins() {
        let generator = AnswerGenerator::default();
        let answer = generator.generate("elevator deductible", &elevator_context());
        assert_eq!(
            answer.outcome,
            AnswerOutcome::TriggerMatched {
                rule: "elevator_exclusion".into()
            }
        );
    }

    #[test]
    fn no_trigger_falls_back_to_citation() {
        let generator = AnswerGenerator::default();
        let context = vec![scored("doc_001", "Article 3", "A third party means anyone else.")];
        let answer = generator.generate("Who counts as a third party", &context);
        assert_eq!(answer.outcome, AnswerOutcome::GenericFallback);
        assert_eq!(
            answer.text,
            "According to Article 3, the relevant provision is: A third party means anyone else."
        );
    }

    #[test]
    fn custom_rules_are_evaluated_after_builtin() {
        let generator = AnswerGenerator::default().with_rule(QuestionRule);
        assert_eq!(generator.rule_names(), vec!["elevator_exclusion", "deductible", "question"]);

        let context = elevator_context();
        let answer = generator.generate("Is it covered?", &context);
        assert_eq!(answer.text, "1 passages");

        let answer = generator.generate("elevator?", &context);
        assert!(matches!(answer.outcome, AnswerOutcome::TriggerMatched { rule } if rule == "elevator_exclusion"));
    }

    #[test]
    fn empty_generator_only_falls_back() {
        let generator = AnswerGenerator::new();
        assert!(generator.rule_names().is_empty());
        let answer = generator.generate("elevator", &elevator_context());
        assert_eq!(answer.outcome, AnswerOutcome::GenericFallback);
    }

    #[test]
    fn overrides_apply() {
        let generator = AnswerGenerator::new()
            .with_not_found_answer("I don't know.")
            .with_fallback_template("See {id}.");
        assert_eq!(generator.generate_text("q", &[]), "I don't know.");
        assert_eq!(generator.generate_text("q", &elevator_context()), "See doc_002.");
    }

    #[test]
    fn from_config_builds_rule_list() {
        let config = GeneratorConfig {
            builtin_rules: false,
            not_found_answer: Some("Nothing found.".into()),
            fallback_template: None,
            system_instruction: None,
            rules: vec![AnswerRuleConfig {
                name: "injury".into(),
                triggers: vec!["injury".into()],
                template: "Injury clause: {section}".into(),
            }],
        };
        let generator = AnswerGenerator::from_config(&config);
        assert_eq!(generator.rule_names(), vec!["injury"]);
        assert_eq!(generator.generate_text("x", &[]), "Nothing found.");
        assert_eq!(
            generator.generate_text("elevator injury", &elevator_context()),
            "Injury clause: Elevator exclusion"
        );
    }

    #[test]
    fn outcome_serializes_with_kind_tag() {
        let json = serde_json::to_value(AnswerOutcome::TriggerMatched {
            rule: "deductible".into(),
        })
        .unwrap();
        assert_eq!(json["kind"], "trigger_matched");
        assert_eq!(json["rule"], "deductible");
    }
}
