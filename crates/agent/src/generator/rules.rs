//! Answer rules — the pluggable strategies the generator evaluates in order.

use clauserag_config::AnswerRuleConfig;
use clauserag_core::{Passage, ScoredPassage};

use super::template::{TemplateVars, render};

/// One guarded case of the answer generator.
///
/// Rules are evaluated in priority order and the first whose `matches`
/// returns `true` produces the answer. `context` is never empty when a rule
/// is consulted.
pub trait AnswerRule: Send + Sync {
    /// The rule name, reported when it fires.
    fn name(&self) -> &str;

    /// Whether this rule answers `query`.
    fn matches(&self, query: &str, context: &[ScoredPassage]) -> bool;

    /// Produce the answer text.
    fn render(&self, query: &str, context: &[ScoredPassage]) -> String;
}

/// Fires when the query contains any trigger substring (case-insensitive).
///
/// The template's passage placeholders are filled from the highest-ranked
/// context passage that itself mentions a trigger, or from the top passage
/// when none does.
#[derive(Debug, Clone)]
pub struct TriggerRule {
    name: String,
    triggers: Vec<String>,
    template: String,
}

impl TriggerRule {
    pub fn new<I, S>(name: impl Into<String>, triggers: I, template: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            triggers: triggers
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            template: template.into(),
        }
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    fn mentions_trigger(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.triggers.iter().any(|t| text.contains(t.as_str()))
    }

    fn source<'a>(&self, context: &'a [ScoredPassage]) -> Option<&'a Passage> {
        context
            .iter()
            .find(|r| self.mentions_trigger(r.section()) || self.mentions_trigger(r.content()))
            .or_else(|| context.first())
            .map(|r| &r.passage)
    }
}

impl From<&AnswerRuleConfig> for TriggerRule {
    fn from(config: &AnswerRuleConfig) -> Self {
        Self::new(&config.name, &config.triggers, &config.template)
    }
}

impl AnswerRule for TriggerRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, query: &str, _context: &[ScoredPassage]) -> bool {
        self.mentions_trigger(query)
    }

    fn render(&self, query: &str, context: &[ScoredPassage]) -> String {
        let vars = TemplateVars {
            query: query.trim(),
            passage: self.source(context),
        };
        render(&self.template, &vars)
    }
}

/// The final, always-true rule: cite the top-ranked passage verbatim.
#[derive(Debug, Clone)]
pub struct CitationFallback {
    template: String,
}

/// Default generic answer.
pub const DEFAULT_FALLBACK_TEMPLATE: &str = "According to {section}, the relevant provision is: {content}";

impl CitationFallback {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl Default for CitationFallback {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_TEMPLATE)
    }
}

impl AnswerRule for CitationFallback {
    fn name(&self) -> &str {
        "generic_fallback"
    }

    fn matches(&self, _query: &str, _context: &[ScoredPassage]) -> bool {
        true
    }

    fn render(&self, query: &str, context: &[ScoredPassage]) -> String {
        let vars = TemplateVars {
            query: query.trim(),
            passage: context.first().map(|r| &r.passage),
        };
        render(&self.template, &vars)
    }
}

/// The stock rules, in priority order.
pub fn builtin_rules() -> Vec<TriggerRule> {
    vec![
        TriggerRule::new(
            "elevator_exclusion",
            ["elevator"],
            "According to the {section} clause, if an elevator malfunction causes death or \
             injury to a third party and the insured has not had the equipment periodically \
             inspected as required, the insurer will not pay compensation. Please provide the \
             latest elevator maintenance records and the annual inspection certificate.",
        ),
        TriggerRule::new(
            "deductible",
            ["deductible"],
            "According to the {section} clause: {content} That deductible is subtracted \
             from the claim payout.",
        ),
    ]
}
