//! Base settings shared by every profile.

use std::collections::BTreeMap;

use common::{CacheConfig, DatabaseConfig, NuclioConfig, QueueConfig, SendfileBackend};

use crate::constants::{BASE_INSTALLED_APPS, BASE_QUEUES};
use crate::Settings;

impl Settings {
    /// Development base record. Involves no environment lookups.
    pub fn base() -> Self {
        let rq_queues = BASE_QUEUES
            .iter()
            .map(|(name, timeout)| (name.to_string(), QueueConfig::with_timeout(*timeout)))
            .collect::<BTreeMap<_, _>>();

        Self {
            debug: true,
            installed_apps: BASE_INSTALLED_APPS.iter().map(|a| a.to_string()).collect(),
            nuclio: NuclioConfig::default(),
            rq_queues,
            cacheops_redis: CacheConfig::default(),
            sendfile_backend: SendfileBackend::Simple,
            database: DatabaseConfig::default(),
        }
    }
}
