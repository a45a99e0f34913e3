//! Path resolution for the settings file

use std::path::{Path, PathBuf};

use crate::error::SettingsError;

/// Overrides the settings directory when set
pub const HOME_ENV: &str = "TOKENTALLY_HOME";

const SETTINGS_FILE: &str = "settings.json";

/// Resolves where settings live
#[derive(Debug, Clone)]
pub struct Paths {
    pub config_dir: PathBuf,
}

impl Paths {
    /// `$TOKENTALLY_HOME`, else `<config dir>/tokentally`
    pub fn new() -> Result<Self, SettingsError> {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(home));
        }

        let base = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::with_root(base.join("tokentally")))
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: root.into(),
        }
    }

    /// Get settings.json path
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    pub fn root(&self) -> &Path {
        &self.config_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_with_root() {
        let paths = Paths::with_root("/tmp/tt");
        assert_eq!(paths.settings_file(), PathBuf::from("/tmp/tt/settings.json"));
        assert_eq!(paths.root(), Path::new("/tmp/tt"));
    }

    #[test]
    #[serial]
    fn test_env_override() {
        std::env::set_var(HOME_ENV, "/tmp/tokentally-env");
        let paths = Paths::new().unwrap();
        std::env::remove_var(HOME_ENV);

        assert_eq!(paths.config_dir, PathBuf::from("/tmp/tokentally-env"));
    }

    #[test]
    #[serial]
    fn test_default_location() {
        std::env::remove_var(HOME_ENV);
        if let Ok(paths) = Paths::new() {
            assert!(paths.config_dir.ends_with("tokentally"));
            assert!(paths.settings_file().ends_with("tokentally/settings.json"));
        }
    }
}
