use std::path::Path;

use anyhow::Context;
use tokentally_settings::{Paths, Settings};

fn settings_path() -> anyhow::Result<std::path::PathBuf> {
    Ok(Paths::new()?.settings_file())
}

fn load() -> anyhow::Result<Settings> {
    let path = settings_path()?;
    tokentally_settings::load(&path).with_context(|| format!("Failed to load {}", path.display()))
}

pub fn run_show() -> anyhow::Result<()> {
    let settings = load()?;
    println!("{}", settings.to_json()?);

    if let Err(err) = settings.validate() {
        println!("\nWARN {}", err);
    }
    Ok(())
}

pub fn run_path() -> anyhow::Result<()> {
    println!("{}", settings_path()?.display());
    Ok(())
}

pub fn run_reset() -> anyhow::Result<()> {
    let path = settings_path()?;
    tokentally_settings::reset(&path)?;
    println!("Settings reset to defaults: {}", path.display());
    Ok(())
}

pub fn run_export(output: Option<&Path>) -> anyhow::Result<()> {
    let json = load()?.to_json()?;
    match output {
        Some(file) => {
            tokentally_settings::atomic_write(file, json.as_bytes())
                .with_context(|| format!("Failed to write: {}", file.display()))?;
            println!("Settings exported to {}", file.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn run_import(file: &Path) -> anyhow::Result<()> {
    let path = settings_path()?;
    let settings = tokentally_settings::import(&path, file)
        .with_context(|| format!("Failed to import {}", file.display()))?;

    println!("Settings imported from {}", file.display());
    if let Err(err) = settings.validate() {
        println!("WARN {}", err);
    }
    Ok(())
}

/// Update one key, refusing to save a configuration that fails validation
pub fn run_set(key: &str, value: &str) -> anyhow::Result<()> {
    let path = settings_path()?;
    let mut settings = load()?;
    settings.set(key, value)?;
    settings.validate()?;
    tokentally_settings::save(&path, &settings)?;
    println!("{} = {}", key, value);
    Ok(())
}
