// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gate configuration.
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::validation::DEFAULT_RESULT_KEYS;

/// Controls what a [`UserGate`](crate::user::UserGate) checks after the store returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Validate the store's outcome as a record echo.
    pub check_result: bool,
    /// Keys a record echo must contain when `check_result` is set.
    pub required_result_keys: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            check_result: false,
            required_result_keys: DEFAULT_RESULT_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl GateConfig {
    /// Default keys, with result validation switched on.
    pub fn validating_result() -> Self {
        Self {
            check_result: true,
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self
            .required_result_keys
            .iter()
            .position(|key| key.trim().is_empty())
        {
            Some(idx) => Err(ConfigError::EmptyResultKey(idx)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_skip_result_check() {
        let config = GateConfig::default();
        assert!(!config.check_result);
        assert_eq!(
            config.required_result_keys,
            ["name", "categories", "attributes"]
        );
    }

    #[test]
    fn partial_json_keeps_default_keys() {
        let config = GateConfig::from_json(r#"{"check_result": true}"#).unwrap();
        assert_eq!(config, GateConfig::validating_result());
    }

    #[test]
    fn custom_keys_override_defaults() {
        let config =
            GateConfig::from_json(r#"{"check_result": true, "required_result_keys": ["id"]}"#)
                .unwrap();
        assert_eq!(config.required_result_keys, ["id"]);
    }

    #[test]
    fn rejects_blank_key() {
        let err = GateConfig::from_json(r#"{"required_result_keys": ["name", " "]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyResultKey(1)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = GateConfig::from_json("{check_result").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid gate config"));
    }
}
