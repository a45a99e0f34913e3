//! Settings persistence and atomic file operations

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SettingsError;
use crate::types::Settings;

/// Sibling staging file, `settings.json` -> `.settings.json.tmp`
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| OsStr::new("settings")));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace `path` with `data` so readers never see a partial file
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let staging = staging_path(path);
    let result = std::fs::write(&staging, data)
        .and_then(|()| std::fs::rename(&staging, path));
    if result.is_err() {
        let _ = std::fs::remove_file(&staging);
    }
    result
}

/// Load settings, returning defaults when the file does not exist
pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

pub fn save(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let json = settings.to_json()?;
    atomic_write(path, json.as_bytes())?;
    debug!(path = %path.display(), "saved settings");
    Ok(())
}

/// Overwrite the file with defaults
pub fn reset(path: &Path) -> Result<Settings, SettingsError> {
    let settings = Settings::default();
    save(path, &settings)?;
    Ok(settings)
}

/// Merge a JSON export file into the stored settings and save the result
pub fn import(path: &Path, source: &Path) -> Result<Settings, SettingsError> {
    let json = std::fs::read_to_string(source)?;
    let mut settings = load(path)?;
    settings.merge_json(&json)?;
    save(path, &settings)?;
    Ok(settings)
}
