//! Answer templates with `{placeholder}` substitution.
//!
//! Known placeholders: `{section}`, `{content}`, `{id}` (from the source
//! passage) and `{query}`. Unknown placeholders and unmatched braces are
//! copied through untouched. Substitution is single-pass, so braces inside
//! substituted text are never expanded again.

use clauserag_core::Passage;

/// Values available to a template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateVars<'a> {
    pub query: &'a str,
    pub passage: Option<&'a Passage>,
}

impl<'a> TemplateVars<'a> {
    fn lookup(&self, name: &str) -> Option<&'a str> {
        match name {
            "query" => Some(self.query),
            "section" => self.passage.map(|p| p.section.as_str()),
            "content" => self.passage.map(|p| p.content.as_str()),
            "id" => self.passage.map(|p| p.id.as_str()),
            _ => None,
        }
    }
}

/// Fill `template` with `vars`.
pub fn render(template: &str, vars: &TemplateVars<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match vars.lookup(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
