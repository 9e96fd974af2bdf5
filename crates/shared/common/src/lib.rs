//! Common types shared by the settings crates.
//!
//! This crate provides:
//! - Unified error handling for settings resolution
//! - Subsystem descriptor structures (video service, queues, cache, database)

pub mod config;
pub mod error;

pub use config::*;
pub use error::{SettingsError, SettingsResult};
