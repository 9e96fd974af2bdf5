//! Unified error handling for settings resolution.
//!
//! Resolving settings from the environment never fails; these errors come
//! from selecting a profile, querying a record, or rendering it.

use thiserror::Error;

/// Settings error types.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Unknown settings profile: {0}")]
    UnknownProfile(String),

    #[error("Unknown job queue: {0}")]
    UnknownQueue(String),

    #[error("Unknown settings key: {0}")]
    UnknownKey(String),

    #[error("Serialization error")]
    Serialize(#[from] serde_json::Error),
}

impl SettingsError {
    /// Get stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SettingsError::UnknownProfile(_) => "UNKNOWN_PROFILE",
            SettingsError::UnknownQueue(_) => "UNKNOWN_QUEUE",
            SettingsError::UnknownKey(_) => "UNKNOWN_KEY",
            SettingsError::Serialize(_) => "SERIALIZE_ERROR",
        }
    }

    /// Get operator-facing message (logs serializer internals instead of printing them)
    pub fn user_message(&self) -> String {
        match self {
            SettingsError::Serialize(e) => {
                tracing::error!("Serialization error: {:?}", e);
                "Failed to render settings".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Convenience constructors
impl SettingsError {
    pub fn unknown_profile(name: impl Into<String>) -> Self {
        SettingsError::UnknownProfile(name.into())
    }

    pub fn unknown_queue(name: impl Into<String>) -> Self {
        SettingsError::UnknownQueue(name.into())
    }

    pub fn unknown_key(key: impl Into<String>) -> Self {
        SettingsError::UnknownKey(key.into())
    }
}
