//! Settings record

use serde::{Deserialize, Serialize};
use tokentally_core::{CounterOptions, Estimator, PunctuationSet, Thresholds};
use tracing::debug;

use crate::error::SettingsError;

/// When the host should recount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateMode {
    #[default]
    Realtime,
    OnSave,
    Manual,
}

/// User settings, stored as camelCase JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub enabled: bool,
    pub tokenizer_type: String,
    pub warning_threshold: usize,
    pub danger_threshold: usize,
    /// Editor-host setting; stored and exported but not read by the CLI
    pub show_in_status_bar: bool,
    /// Editor-host setting; the CLI always counts on demand
    pub update_mode: UpdateMode,
    /// Marks added to the full-width punctuation set
    pub extra_punctuation: String,
}

/// Keys accepted by `merge_json` and `set`
pub const KNOWN_KEYS: [&str; 7] = [
    "enabled",
    "tokenizerType",
    "warningThreshold",
    "dangerThreshold",
    "showInStatusBar",
    "updateMode",
    "extraPunctuation",
];

impl Settings {
    pub fn new() -> Self {
        let thresholds = Thresholds::default();
        Self {
            enabled: true,
            tokenizer_type: Estimator::default().name().to_string(),
            warning_threshold: thresholds.warning,
            danger_threshold: thresholds.danger,
            show_in_status_bar: true,
            update_mode: UpdateMode::Realtime,
            extra_punctuation: String::new(),
        }
    }

    /// Check threshold ordering and tokenizer name
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.warning_threshold >= self.danger_threshold {
            return Err(SettingsError::InvalidThresholds {
                warning: self.warning_threshold,
                danger: self.danger_threshold,
            });
        }

        if Estimator::from_name(&self.tokenizer_type).is_none() {
            return Err(SettingsError::UnknownTokenizer(self.tokenizer_type.clone()));
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.warning_threshold, self.danger_threshold)
    }

    /// Resolve into explicit counter options
    pub fn counter_options(&self) -> CounterOptions {
        let extra = self.extra_punctuation.chars().filter(|c| !c.is_whitespace());
        CounterOptions {
            estimator: Estimator::resolve(&self.tokenizer_type),
            punctuation: PunctuationSet::new().with_extra(extra),
        }
    }

    /// Pretty JSON for export
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Merge recognised keys from a JSON object, ignoring the rest.
    ///
    /// Returns the keys that were applied. Nothing changes on error.
    pub fn merge_json(&mut self, json: &str) -> Result<Vec<String>, SettingsError> {
        let incoming: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(entries) = incoming else {
            return Err(SettingsError::NotAnObject);
        };

        let mut current = serde_json::to_value(&*self)?;
        let mut applied = Vec::new();
        for (key, value) in entries {
            if KNOWN_KEYS.contains(&key.as_str()) {
                current[key.as_str()] = value;
                applied.push(key);
            } else {
                debug!(key = %key, "ignoring unknown setting");
            }
        }

        *self = serde_json::from_value(current)?;
        Ok(applied)
    }

    /// Set one key from a command-line value.
    ///
    /// The value is read as JSON when it parses, otherwise as a plain string.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        if !KNOWN_KEYS.contains(&key) {
            return Err(SettingsError::UnknownKey(key.to_string()));
        }

        let value = serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));

        let mut current = serde_json::to_value(&*self)?;
        current[key] = value;
        *self = serde_json::from_value(current)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
