//! Production settings resolution tests.

use common::DatabaseConfig;
use settings_lib::{MapEnv, Profile, Settings};

const NUCLIO: &str = "CVAT_NUCLIO_HOST";
const REDIS: &str = "CVAT_REDIS_HOST";

#[test]
fn test_defaults_with_empty_environment() {
    let settings = Settings::production(&MapEnv::new());

    assert_eq!(settings.nuclio.host, "nuclio");
    assert_eq!(settings.cacheops_redis.host, "cvat_redis");
    assert!(!settings.rq_queues.is_empty());
    assert!(settings.rq_queues.values().all(|q| q.host == "cvat_redis"));
}

#[test]
fn test_nuclio_host_override_leaves_queues_alone() {
    let env = MapEnv::new().with(NUCLIO, "myhost");
    let settings = Settings::production(&env);

    assert_eq!(settings.nuclio.host, "myhost");
    assert!(settings.rq_queues.values().all(|q| q.host == "cvat_redis"));
    assert_eq!(settings.cacheops_redis.host, "cvat_redis");
}

#[test]
fn test_redis_host_applies_to_every_queue_and_cache() {
    let env = MapEnv::new().with(REDIS, "redis.prod");
    let settings = Settings::production(&env);

    assert_eq!(settings.rq_queues.len(), Settings::base().rq_queues.len());
    for (name, queue) in &settings.rq_queues {
        assert_eq!(queue.host, "redis.prod", "queue {}", name);
    }
    assert_eq!(settings.cacheops_redis.host, "redis.prod");
    assert_eq!(settings.nuclio.host, "nuclio");
}

#[test]
fn test_debug_always_false() {
    let envs = [
        MapEnv::new(),
        MapEnv::new().with("DEBUG", "true"),
        [(NUCLIO, "a"), (REDIS, "b")].into_iter().collect(),
    ];
    for env in &envs {
        assert!(!Settings::production(env).debug);
    }
}

#[test]
fn test_installed_apps_extend_base() {
    let base = Settings::base();
    let production = Settings::production(&MapEnv::new());

    assert_eq!(production.installed_apps.len(), base.installed_apps.len() + 1);
    assert_eq!(&production.installed_apps[..base.installed_apps.len()], &base.installed_apps[..]);
    assert_eq!(production.installed_apps.last().map(String::as_str), Some("mod_wsgi.server"));
}

#[test]
fn test_static_file_backend_and_database() {
    let settings = Settings::production(&MapEnv::new());

    assert_eq!(settings.sendfile_backend.as_str(), "sendfile.backends.xsendfile");
    assert_eq!(settings.database.engine, "djongo");
    assert_eq!(settings.database.host, "mongodb");
    assert_eq!(settings.database.port, 27017);
    assert_eq!(settings.database.auth_mechanism, "SCRAM-SHA-1");
}

#[test]
fn test_database_not_environment_resolved() {
    let env = MapEnv::new()
        .with("CVAT_POSTGRES_HOST", "pg")
        .with("CVAT_POSTGRES_DBNAME", "other");
    let settings = Settings::production(&env);

    assert_eq!(settings.database, DatabaseConfig::production());
    assert_ne!(settings.database, Settings::base().database);
}

#[test]
fn test_development_uses_local_database() {
    let settings = Profile::Development.load(&MapEnv::new());

    assert_eq!(settings.database.engine, "django.db.backends.sqlite3");
    assert_eq!(settings.database.name, "db.sqlite3");
    assert_ne!(settings.database.host, "mongodb");
}

#[test]
fn test_resolution_is_idempotent() {
    let env = MapEnv::new().with(NUCLIO, "fn.prod").with(REDIS, "redis.prod");

    let first = Settings::production(&env);
    let second = Settings::production(&env);

    assert_eq!(first, second);
    assert_eq!(first.to_json(false).unwrap(), second.to_json(false).unwrap());
}

#[test]
fn test_profile_load_production() {
    let env = MapEnv::new().with(REDIS, "redis.prod");
    let settings = Profile::Production.load(&env);

    assert_eq!(settings.get("queue.default.host").unwrap(), "redis.prod");
    assert_eq!(settings.get("debug").unwrap(), "false");
}
