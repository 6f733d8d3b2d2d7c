//! `clauserag demo` — Run the two reference queries end to end.

use std::path::Path;

use clauserag_config::AppConfig;

/// The reference queries: an elevator accident and a deductible question.
pub const DEMO_QUERIES: [&str; 2] = [
    "An elevator malfunction injured a visitor. Is the insurer liable?",
    "How much is the deductible for each property accident?",
];

pub fn run(config: &AppConfig, corpus: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = super::build_pipeline(config, corpus)?;

    println!("🚀 ClauseRAG retrieve-then-generate demo");

    for (i, query) in DEMO_QUERIES.iter().enumerate() {
        if i > 0 {
            println!();
            println!("{}", "=".repeat(60));
        }
        println!();

        let result = pipeline.run(query);
        println!("👤 Question: {query}");
        println!("✅ Retrieved {} relevant clause(s)", result.retrieved.len());
        println!("🤖 Answer: {}", result.answer.text);
    }

    Ok(())
}
