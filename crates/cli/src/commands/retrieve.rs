//! `clauserag retrieve` — Show ranked passages without generating an answer.

use std::path::Path;

use clauserag_config::AppConfig;

pub fn run(
    config: &AppConfig,
    corpus: Option<&Path>,
    query: &str,
    top_k: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = super::build_pipeline(config, corpus)?;
    let retrieval = pipeline
        .retriever()
        .explain(query, top_k.unwrap_or(pipeline.top_k()));

    if json {
        println!("{}", serde_json::to_string_pretty(&retrieval.hits)?);
        return Ok(());
    }

    println!("🔍 Query terms: {}", retrieval.query_terms);
    println!();

    if retrieval.hits.is_empty() {
        println!("   No relevant passages found.");
    } else {
        for (i, hit) in retrieval.hits.iter().enumerate() {
            println!(
                "  {:>2}. [score: {:.3}] {} · {}",
                i + 1,
                hit.score,
                hit.id(),
                hit.section()
            );
            println!("      {}", super::preview(hit.content(), 80));
        }
    }

    Ok(())
}
