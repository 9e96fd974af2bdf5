//! Settings profile selection.

use std::fmt;
use std::str::FromStr;

use common::{SettingsError, SettingsResult};

use crate::env::EnvSource;
use crate::Settings;

/// Deployment profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    Development,
    #[default]
    Production,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Production => "production",
        }
    }

    /// Build the settings record for this profile.
    pub fn load(self, env: &dyn EnvSource) -> Settings {
        match self {
            Profile::Development => Settings::base(),
            Profile::Production => Settings::production(env),
        }
    }
}

impl FromStr for Profile {
    type Err = SettingsError;

    fn from_str(s: &str) -> SettingsResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            _ => Err(SettingsError::unknown_profile(s)),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
