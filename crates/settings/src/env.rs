//! Environment variable sources.

use std::collections::HashMap;
use std::env;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read-only view of a set of environment variables.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EnvSource {
    /// Value of `key`, or `None` when unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Fixed in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Value of `key` when set and non-empty, otherwise `default`.
pub fn lookup_or(env: &dyn EnvSource, key: &str, default: &str) -> String {
    match env.var(key) {
        Some(value) if !value.is_empty() => value,
        _ => {
            tracing::debug!("{} not set, using default {:?}", key, default);
            default.to_string()
        }
    }
}
