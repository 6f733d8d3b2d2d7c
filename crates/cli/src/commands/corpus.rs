//! `clauserag corpus` — Corpus inspection commands.

use std::path::Path;

use clauserag_config::AppConfig;
use clauserag_core::PassageRepository;
use clauserag_retrieval::FileCorpus;

pub fn list(config: &AppConfig, corpus: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = super::load_corpus(config, corpus)?;

    println!("📚 Corpus ({}, {} passages)", corpus.name(), corpus.len());
    println!("==============================");
    for passage in corpus.passages() {
        println!("  {} · {}", passage.id, passage.section);
        println!("      {}", super::preview(&passage.content, 80));
    }

    Ok(())
}

pub fn validate(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating corpus at {}...", path.display());

    match FileCorpus::load(path) {
        Ok(corpus) => {
            println!("   ✅ {} passages, all IDs unique", corpus.len());
            Ok(())
        }
        Err(e) => {
            println!("   ❌ {e}");
            Err(e.into())
        }
    }
}
