//! Configuration record consulted by the transformation function.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name used when a configuration is built without one.
pub const DEFAULT_CONFIG_NAME: &str = "default_config";

/// Option key that enables upper-casing of text items.
pub const UPPERCASE_OPTION: &str = "uppercase";

/// Name/value pair plus a set of boolean option flags.
///
/// `name` and `value` are fixed once built; the option flags stay mutable
/// through [`Config::options_mut`] and [`Config::set_option`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default)]
    value: i64,
    #[serde(default)]
    options: BTreeMap<String, bool>,
}

fn default_name() -> String {
    DEFAULT_CONFIG_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_NAME, 0)
    }
}

impl Config {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            options: BTreeMap::new(),
        }
    }

    /// Builder form of [`Config::set_option`].
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, enabled: bool) -> Self {
        self.set_option(key, enabled);
        self
    }

    /// Shorthand for `with_option(UPPERCASE_OPTION, enabled)`.
    #[must_use]
    pub fn with_uppercase(self, enabled: bool) -> Self {
        self.with_option(UPPERCASE_OPTION, enabled)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn options(&self) -> &BTreeMap<String, bool> {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut BTreeMap<String, bool> {
        &mut self.options
    }

    /// Insert or replace an option flag, returning the previous flag if any.
    pub fn set_option(&mut self, key: impl Into<String>, enabled: bool) -> Option<bool> {
        self.options.insert(key.into(), enabled)
    }

    /// Flag lookup; a missing option reads as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.options.get(key).copied().unwrap_or(false)
    }

    pub fn uppercase(&self) -> bool {
        self.flag(UPPERCASE_OPTION)
    }

    /// Parse a JSON config document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents or fields of the
    /// wrong type.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Json`] when it does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_options() {
        let config = Config::default();
        assert_eq!(config.name(), "default_config");
        assert_eq!(config.value(), 0);
        assert!(config.options().is_empty());
        assert!(!config.uppercase());
    }

    #[test]
    fn options_are_mutable_after_construction() {
        let mut config = Config::new("run", 7);
        assert_eq!(config.set_option("uppercase", true), None);
        assert!(config.uppercase());
        config.options_mut().insert("uppercase".to_string(), false);
        assert!(!config.uppercase());
        config.options_mut().clear();
        assert!(config.options().is_empty());
    }

    #[test]
    fn unknown_flag_reads_false() {
        let config = Config::new("run", 1).with_option("feature_x", true);
        assert!(config.flag("feature_x"));
        assert!(!config.flag("feature_y"));
    }

    #[test]
    fn json_fields_default_when_missing() {
        let config = Config::from_json_str("{}").expect("parse empty config");
        assert_eq!(config, Config::default());

        let config = Config::from_json_str(r#"{"name":"x","options":{"uppercase":true}}"#)
            .expect("parse partial config");
        assert_eq!(config.name(), "x");
        assert_eq!(config.value(), 0);
        assert!(config.uppercase());
    }

    #[test]
    fn json_rejects_non_boolean_option() {
        let err = Config::from_json_str(r#"{"options":{"mode":"alpha"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
