//! Resolution against a mocked environment.
//!
//! Run: cargo test -p settings --features test-utils

use mockall::predicate::eq;

use settings_lib::env::MockEnvSource;
use settings_lib::{ProductionOverrides, Settings};

#[test]
fn test_production_reads_only_recognized_variables() {
    let mut env = MockEnvSource::new();
    env.expect_var()
        .with(eq("CVAT_NUCLIO_HOST"))
        .times(1)
        .returning(|_| Some("fn.prod".to_string()));
    env.expect_var()
        .with(eq("CVAT_REDIS_HOST"))
        .times(1)
        .returning(|_| Some("redis.prod".to_string()));

    let settings = Settings::production(&env);

    assert_eq!(settings.nuclio.host, "fn.prod");
    assert!(settings.rq_queues.values().all(|q| q.host == "redis.prod"));
    assert_eq!(settings.cacheops_redis.host, "redis.prod");
}

#[test]
fn test_empty_values_fall_back_to_defaults() {
    let mut env = MockEnvSource::new();
    env.expect_var().returning(|_| Some(String::new()));

    let overrides = ProductionOverrides::resolve(&env);

    assert_eq!(overrides, ProductionOverrides::default());
}
