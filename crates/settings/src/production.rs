//! Production overrides resolved from the environment.
//!
//! Recognized variables:
//! - `CVAT_NUCLIO_HOST`: video-processing service host (default `nuclio`)
//! - `CVAT_REDIS_HOST`: host of every job queue and of the query cache
//!   (default `cvat_redis`)
//!
//! The database block is not environment-resolved in production.

use common::{DatabaseConfig, SendfileBackend};

use crate::constants::{
    APP_WSGI_SERVER, DEFAULT_NUCLIO_HOST, DEFAULT_REDIS_HOST, ENV_NUCLIO_HOST, ENV_REDIS_HOST,
};
use crate::env::{lookup_or, EnvSource};
use crate::Settings;

/// Values read from the environment for the production profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionOverrides {
    pub nuclio_host: String,
    pub redis_host: String,
}

impl ProductionOverrides {
    /// Read each recognized variable exactly once.
    pub fn resolve(env: &dyn EnvSource) -> Self {
        Self {
            nuclio_host: lookup_or(env, ENV_NUCLIO_HOST, DEFAULT_NUCLIO_HOST),
            redis_host: lookup_or(env, ENV_REDIS_HOST, DEFAULT_REDIS_HOST),
        }
    }
}

impl Default for ProductionOverrides {
    fn default() -> Self {
        Self {
            nuclio_host: DEFAULT_NUCLIO_HOST.to_string(),
            redis_host: DEFAULT_REDIS_HOST.to_string(),
        }
    }
}

impl Settings {
    /// Derive a production record from `self`. `self` is left untouched.
    pub fn apply(&self, overrides: &ProductionOverrides) -> Settings {
        let mut settings = self.clone();

        settings.debug = false;

        if !settings.has_app(APP_WSGI_SERVER) {
            settings.installed_apps.push(APP_WSGI_SERVER.to_string());
        }

        settings.nuclio.host = overrides.nuclio_host.clone();

        for queue in settings.rq_queues.values_mut() {
            queue.host = overrides.redis_host.clone();
        }
        settings.cacheops_redis.host = overrides.redis_host.clone();

        settings.sendfile_backend = SendfileBackend::XSendfile;

        settings.database = DatabaseConfig::production();

        settings
    }

    /// Production record: the base record with environment overrides applied.
    pub fn production(env: &dyn EnvSource) -> Settings {
        let overrides = ProductionOverrides::resolve(env);
        tracing::info!(
            nuclio_host = %overrides.nuclio_host,
            redis_host = %overrides.redis_host,
            "Resolved production settings"
        );
        tracing::warn!(
            engine = "djongo",
            "Database block is hardcoded; CVAT_POSTGRES_* variables are not read"
        );
        Settings::base().apply(&overrides)
    }
}
