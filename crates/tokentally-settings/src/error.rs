//! Settings errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no configuration directory available")]
    NoConfigDir,

    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("settings must be a JSON object")]
    NotAnObject,

    #[error("unknown setting: {0}")]
    UnknownKey(String),

    #[error("warning threshold ({warning}) must be below danger threshold ({danger})")]
    InvalidThresholds { warning: usize, danger: usize },

    #[error("unsupported tokenizer type: {0}")]
    UnknownTokenizer(String),
}
