//! Server Configuration
//!
//! Read from the process environment (after `.env` is loaded).

use robo_advisor::{AdvisorError, ValidationRules};
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be a whole number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error(transparent)]
    Rules(#[from] AdvisorError),
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address to listen on (`BIND_ADDR`)
    pub bind_addr: String,

    /// Validation bounds (`ADVISOR_MAX_AGE`, `ADVISOR_MIN_INVESTMENT`)
    pub rules: ValidationRules,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset variables fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ValidationRules::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let max_age = number_or(&lookup, "ADVISOR_MAX_AGE", defaults.max_age)?;
        let min_investment = number_or(&lookup, "ADVISOR_MIN_INVESTMENT", defaults.min_investment)?;

        Ok(Self {
            bind_addr,
            rules: ValidationRules::new(max_age, min_investment)?,
        })
    }
}

fn number_or(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: i64,
) -> Result<i64, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.rules, ValidationRules::default());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("ADVISOR_MAX_AGE", "70"),
            ("ADVISOR_MIN_INVESTMENT", " 1000 "),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.rules.max_age, 70);
        assert_eq!(config.rules.min_investment, 1000);
    }

    #[test]
    fn test_bad_values_fail() {
        let err = ServerConfig::from_lookup(lookup_from(&[("ADVISOR_MAX_AGE", "old")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { var: "ADVISOR_MAX_AGE", .. }));

        let err = ServerConfig::from_lookup(lookup_from(&[("ADVISOR_MIN_INVESTMENT", "-5")])).unwrap_err();
        assert!(matches!(err, ConfigError::Rules(AdvisorError::InvalidRules(_))));
    }
}
