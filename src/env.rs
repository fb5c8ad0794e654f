//! Named configuration values from the environment.
//!
//! Required values are looked up through [`EnvSource`] so callers always get
//! a `Result`: a missing or empty value is a [`ConfigError::MissingEnv`],
//! never a silent `None`.

use crate::config::ConfigError;
use std::collections::HashMap;

/// Somewhere named string values can be read from.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values are treated as unset
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Look `key` up in `source`, failing when it is absent or empty.
pub fn lookup(source: &impl EnvSource, key: &str) -> Result<String, ConfigError> {
    match source.var(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv {
            key: key.to_string(),
        }),
    }
}

/// Read a required value from the process environment.
pub fn get_env_val(key: &str) -> Result<String, ConfigError> {
    let value = lookup(&ProcessEnv, key);
    if value.is_err() {
        tracing::debug!(key, "environment value missing");
    }
    value
}
