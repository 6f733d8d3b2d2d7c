//! `clauserag ask` — Answer one question.

use std::path::Path;

use clauserag_agent::AnswerOutcome;
use clauserag_config::AppConfig;

pub fn run(
    config: &AppConfig,
    corpus: Option<&Path>,
    query: &str,
    top_k: Option<usize>,
    json: bool,
    show_prompt: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = super::build_pipeline(config, corpus)?;
    let result = pipeline.run_with_top_k(query, top_k.unwrap_or(pipeline.top_k()));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if show_prompt {
        println!("{}", "-".repeat(50));
        println!("📝 Prompt:");
        println!("{}", result.prompt);
        println!("{}", "-".repeat(50));
    }

    println!("🤖 {}", result.answer.text);

    if !result.retrieved.is_empty() {
        println!();
        println!("   Sources:");
        for hit in &result.retrieved {
            println!("   - [{}] {} (score: {:.3})", hit.id(), hit.section(), hit.score);
        }
    }
    println!("   Rule: {}", describe(&result.answer.outcome));

    Ok(())
}

fn describe(outcome: &AnswerOutcome) -> String {
    match outcome {
        AnswerOutcome::NoContext => "no context (not found)".into(),
        AnswerOutcome::TriggerMatched { rule } => format!("trigger `{rule}`"),
        AnswerOutcome::GenericFallback => "generic citation".into(),
    }
}
