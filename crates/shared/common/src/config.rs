//! Subsystem descriptor structures.
//!
//! Each descriptor is handed to one external collaborator (video service
//! client, job-queue client, cache client, database client). `Default`
//! yields the base development value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// External video-processing (nuclio) service endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NuclioConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    /// Function invocation timeout in seconds
    pub default_timeout_secs: u64,
}

impl Default for NuclioConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 8070,
            default_timeout_secs: 120,
        }
    }
}

impl NuclioConfig {
    /// Base URL of the service, e.g. `http://nuclio:8070`.
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// Connection parameters for one named job queue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QueueConfig {
    pub host: String,
    pub port: u16,
    pub db: u8,
    /// Job timeout in queue notation (`4h`, `24h`)
    pub default_timeout: String,
}

impl QueueConfig {
    pub fn with_timeout(default_timeout: impl Into<String>) -> Self {
        Self {
            default_timeout: default_timeout.into(),
            ..Self::default()
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            db: 0,
            default_timeout: "4h".to_string(),
        }
    }
}

/// Query cache (cacheops) Redis connection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    pub host: String,
    pub port: u16,
    pub db: u8,
    pub socket_timeout_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            db: 1,
            socket_timeout_secs: 3,
        }
    }
}

/// Database connection descriptor.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub engine: String,
    pub enforce_schema: bool,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub auth_source: String,
    pub auth_mechanism: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("engine", &self.engine)
            .field("enforce_schema", &self.enforce_schema)
            .field("name", &self.name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("auth_source", &self.auth_source)
            .field("auth_mechanism", &self.auth_mechanism)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            engine: "django.db.backends.sqlite3".to_string(),
            enforce_schema: false,
            name: "db.sqlite3".to_string(),
            host: String::new(),
            port: 0,
            user: String::new(),
            password: String::new(),
            auth_source: String::new(),
            auth_mechanism: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Document-store block used in production. Hardcoded, not read from the environment.
    pub fn production() -> Self {
        Self {
            engine: "djongo".to_string(),
            enforce_schema: true,
            name: "django_mongodb_docker".to_string(),
            host: "mongodb".to_string(),
            port: 27017,
            user: "root".to_string(),
            password: "mongoadmin".to_string(),
            auth_source: "admin".to_string(),
            auth_mechanism: "SCRAM-SHA-1".to_string(),
        }
    }
}

/// Backend used to hand file downloads off to the web server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum SendfileBackend {
    /// Stream the file from the application process
    #[default]
    #[serde(rename = "sendfile.backends.simple")]
    Simple,
    /// Emit an `X-Sendfile` header and let the web server send the file
    #[serde(rename = "sendfile.backends.xsendfile")]
    XSendfile,
}

impl SendfileBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            SendfileBackend::Simple => "sendfile.backends.simple",
            SendfileBackend::XSendfile => "sendfile.backends.xsendfile",
        }
    }
}

impl fmt::Display for SendfileBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_debug_redacts_password() {
        let db = DatabaseConfig::production();
        let rendered = format!("{:?}", db);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("mongoadmin"));
    }

    #[test]
    fn test_database_serialization_skips_password() {
        let json = serde_json::to_value(DatabaseConfig::production()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["port"], 27017);
    }

    #[test]
    fn test_default_database_is_local_sqlite() {
        let db = DatabaseConfig::default();
        assert_eq!(db.engine, "django.db.backends.sqlite3");
        assert_eq!(db.name, "db.sqlite3");
        assert_ne!(db, DatabaseConfig::production());
    }

    #[test]
    fn test_sendfile_backend_identifier() {
        assert_eq!(SendfileBackend::XSendfile.to_string(), "sendfile.backends.xsendfile");
        let json = serde_json::to_string(&SendfileBackend::Simple).unwrap();
        assert_eq!(json, "\"sendfile.backends.simple\"");
    }

    #[test]
    fn test_nuclio_url() {
        assert_eq!(NuclioConfig::default().url(), "http://localhost:8070");
    }
}
