//! Persistent settings for token counting hosts

mod error;
mod io;
mod paths;
mod types;

pub use error::SettingsError;
pub use io::{atomic_write, import, load, reset, save};
pub use paths::{Paths, HOME_ENV};
pub use types::{Settings, UpdateMode, KNOWN_KEYS};
