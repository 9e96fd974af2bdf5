//! Settings Library
//!
//! Resolves the immutable settings record consumed by the annotation
//! server's subsystems. A record is built once at startup from the base
//! profile, optionally overridden for production from environment
//! variables, and then passed by reference to whoever needs it.

pub mod base;
pub mod constants;
pub mod env;
pub mod production;
pub mod profile;

use std::collections::BTreeMap;

use serde::Serialize;

use common::{
    CacheConfig, DatabaseConfig, NuclioConfig, QueueConfig, SendfileBackend, SettingsError,
    SettingsResult,
};

pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use production::ProductionOverrides;
pub use profile::Profile;

/// Resolved settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub debug: bool,
    /// Installed subsystem identifiers in load order
    pub installed_apps: Vec<String>,
    pub nuclio: NuclioConfig,
    /// Job queues keyed by queue name
    pub rq_queues: BTreeMap<String, QueueConfig>,
    pub cacheops_redis: CacheConfig,
    pub sendfile_backend: SendfileBackend,
    pub database: DatabaseConfig,
}

impl Settings {
    /// Connection parameters of the named job queue.
    pub fn queue(&self, name: &str) -> SettingsResult<&QueueConfig> {
        self.rq_queues
            .get(name)
            .ok_or_else(|| SettingsError::unknown_queue(name))
    }

    /// Whether `app` is installed.
    pub fn has_app(&self, app: &str) -> bool {
        self.installed_apps.iter().any(|a| a == app)
    }

    /// Render a single setting by dotted key.
    ///
    /// Supported keys: `debug`, `installed_apps`, `nuclio.host`, `nuclio.url`,
    /// `cache.host`, `queue.<name>.host`, `sendfile_backend`, `database.engine`,
    /// `database.host`, `database.name`.
    pub fn get(&self, key: &str) -> SettingsResult<String> {
        let value = match key {
            "debug" => self.debug.to_string(),
            "installed_apps" => self.installed_apps.join(","),
            "nuclio.host" => self.nuclio.host.clone(),
            "nuclio.url" => self.nuclio.url(),
            "cache.host" => self.cacheops_redis.host.clone(),
            "sendfile_backend" => self.sendfile_backend.to_string(),
            "database.engine" => self.database.engine.clone(),
            "database.host" => self.database.host.clone(),
            "database.name" => self.database.name.clone(),
            _ => {
                let queue = key
                    .strip_prefix("queue.")
                    .and_then(|rest| rest.strip_suffix(".host"))
                    .ok_or_else(|| SettingsError::unknown_key(key))?;
                self.queue(queue)?.host.clone()
            }
        };
        Ok(value)
    }

    /// Serialize the record as JSON.
    pub fn to_json(&self, pretty: bool) -> SettingsResult<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(rendered)
    }
}
