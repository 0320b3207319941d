//! # Configuration
//!
//! Roster configuration is a [`confique`] struct, loaded in priority order from:
//! 1. **Environment variables**: `ROSTER_CACHE_ENABLED`, `ROSTER_CACHE_TTL_SECS`,
//!    `ROSTER_RESEQUENCE_ON_STARTUP`.
//! 2. **Config file**: `roster.toml` in the data directory.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `cache_enabled` | `true` | Cache listings and searches in `cache.json` |
//! | `cache_ttl_secs` | `3600` | Lifetime of a cached query result |
//! | `resequence_on_startup` | `true` | Repair customer ids before every command |
//!
//! ## CLI Usage
//!
//! - `roster config` shows the effective values.
//! - `roster config --template` prints a commented sample `roster.toml`.

use crate::error::{Result, RosterError};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "roster.toml";

/// Configuration for roster, stored in `roster.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Cache `list` and `find` results between invocations.
    #[config(env = "ROSTER_CACHE_ENABLED", default = true)]
    pub cache_enabled: bool,

    /// Seconds a cached result stays valid.
    #[config(env = "ROSTER_CACHE_TTL_SECS", default = 3600)]
    pub cache_ttl_secs: u64,

    /// Renumber customer ids at startup, repairing an interrupted pass.
    #[config(env = "ROSTER_RESEQUENCE_ON_STARTUP", default = true)]
    pub resequence_on_startup: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_ttl_secs: 3600,
            resequence_on_startup: true,
        }
    }
}

impl RosterConfig {
    /// Loads the layered configuration for the data directory `dir`.
    ///
    /// A missing `roster.toml` is fine; a malformed one is an error.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(dir.join(CONFIG_FILENAME))
            .load()
            .map_err(|e| RosterError::Config(e.to_string()))
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// A commented `roster.toml` listing every setting with its default.
    pub fn template() -> String {
        confique::toml::template::<RosterConfig>(confique::toml::FormatOptions::default())
    }
}
