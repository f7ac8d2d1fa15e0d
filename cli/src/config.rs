//! Optional user configuration.
//!
//! Loaded from the platform config directory (`life/config.toml`); every
//! field is optional and command-line flags win over the file. A missing
//! file is the normal case; a malformed one is logged and ignored rather
//! than failing startup.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct LifeConfig {
    /// Starting theme name.
    pub theme: Option<String>,
    /// Milliseconds between generations while running.
    pub period_ms: Option<u64>,
}

impl LifeConfig {
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("life").join("config.toml"))
    }

    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        let Ok(raw) = fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), "ignoring malformed config: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LifeConfig;

    #[test]
    fn parses_full_config() {
        let config: LifeConfig = toml::from_str("theme = \"matrix\"\nperiod_ms = 50\n").unwrap();
        assert_eq!(config.theme.as_deref(), Some("matrix"));
        assert_eq!(config.period_ms, Some(50));
    }

    #[test]
    fn all_fields_are_optional() {
        let config: LifeConfig = toml::from_str("").unwrap();
        assert!(config.theme.is_none());
        assert!(config.period_ms.is_none());
    }
}
