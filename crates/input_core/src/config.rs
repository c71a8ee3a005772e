//! Forwarder configuration.
//!
//! Defaults reproduce the stock remote-control behavior: a 30% tap band on
//! each edge, `step`/`active` class markers, and the usual presenter keys.

use std::fs;
use std::path::{Path, PathBuf};

use core_types::{
    KEY_DOWN, KEY_LEFT, KEY_PAGE_DOWN, KEY_PAGE_UP, KEY_RIGHT, KEY_SPACE, KEY_TAB, KEY_UP, KeyCode,
};
use serde::Deserialize;

use crate::api::NavAction;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("touch_band must be in (0, 0.5], got {0}")]
    InvalidTouchBand(f32),
    #[error("key code {0} is bound to both prev and next")]
    OverlappingKey(KeyCode),
    #[error("{0} must not be empty or contain whitespace")]
    InvalidClass(&'static str),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteConfig {
    /// Width of each edge tap band, as a fraction of the viewport width.
    pub touch_band: f32,
    pub step_class: String,
    pub active_class: String,
    pub prev_keys: Vec<KeyCode>,
    pub next_keys: Vec<KeyCode>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            touch_band: 0.3,
            step_class: "step".into(),
            active_class: "active".into(),
            prev_keys: vec![KEY_PAGE_UP, KEY_LEFT, KEY_UP],
            next_keys: vec![KEY_TAB, KEY_SPACE, KEY_PAGE_DOWN, KEY_RIGHT, KEY_DOWN],
        }
    }
}

impl RemoteConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: RemoteConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.touch_band > 0.0 && self.touch_band <= 0.5) {
            return Err(ConfigError::InvalidTouchBand(self.touch_band));
        }
        if let Some(key) = self.prev_keys.iter().find(|k| self.next_keys.contains(*k)) {
            return Err(ConfigError::OverlappingKey(*key));
        }
        for (field, class) in [
            ("step_class", &self.step_class),
            ("active_class", &self.active_class),
        ] {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidClass(field));
            }
        }
        Ok(())
    }

    /// Navigation bound to `key` on release, if any.
    pub fn key_action(&self, key: KeyCode) -> Option<NavAction> {
        if self.prev_keys.contains(&key) {
            Some(NavAction::Prev)
        } else if self.next_keys.contains(&key) {
            Some(NavAction::Next)
        } else {
            None
        }
    }

    /// Keys whose browser default is blocked: every bound key.
    pub fn is_handled_key(&self, key: KeyCode) -> bool {
        self.key_action(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_the_presenter_keys() {
        let config = RemoteConfig::default();
        for key in [33, 37, 38] {
            assert_eq!(config.key_action(key), Some(NavAction::Prev), "key {key}");
        }
        for key in [9, 32, 34, 39, 40] {
            assert_eq!(config.key_action(key), Some(NavAction::Next), "key {key}");
        }
        for key in [0, 8, 13, 27, 31, 35, 36, 41, 65] {
            assert!(!config.is_handled_key(key), "key {key}");
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = RemoteConfig::from_toml_str("touch_band = 0.25\n").unwrap();
        assert_eq!(config.touch_band, 0.25);
        assert_eq!(config.step_class, "step");
        assert_eq!(config.next_keys, RemoteConfig::default().next_keys);
    }

    #[test]
    fn rejects_out_of_range_band() {
        for band in ["0.0", "0.75", "-0.1"] {
            let err = RemoteConfig::from_toml_str(&format!("touch_band = {band}")).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTouchBand(_)), "{band}: {err}");
        }
    }

    #[test]
    fn rejects_key_bound_both_ways() {
        let err = RemoteConfig::from_toml_str("prev_keys = [37]\nnext_keys = [37, 39]").unwrap_err();
        assert!(matches!(err, ConfigError::OverlappingKey(37)));
    }

    #[test]
    fn rejects_unknown_fields_and_bad_classes() {
        assert!(matches!(
            RemoteConfig::from_toml_str("touch = 0.3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            RemoteConfig::from_toml_str("active_class = \"is active\""),
            Err(ConfigError::InvalidClass("active_class"))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = RemoteConfig::load(Path::new("/nonexistent/remote.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
