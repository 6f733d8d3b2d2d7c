//! `clauserag config` — Configuration management commands.

use std::path::Path;

use clauserag_config::AppConfig;

pub fn show(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}

pub fn path(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", config_path.display());
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if config_path.exists() && !force {
        println!("⚠️  Config already exists at {}", config_path.display());
        println!("   Run with --force to overwrite it.");
        return Ok(());
    }

    write_default(config_path)?;
    println!("✅ Wrote default config to {}", config_path.display());
    Ok(())
}

fn write_default(config_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_path, AppConfig::default_toml())
}
