//! # Context Setup
//!
//! [`initialize`] resolves where the data lives, loads the configuration found there and
//! wires the production store and cache into a [`RosterApi`].
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override` (the CLI's `--data` flag), used as is.
//! 2. The `ROSTER_DATA` environment variable.
//! 3. The OS data directory for roster (via the `directories` crate).
//!
//! ## Cache Selection
//!
//! The file cache is used unless `cache_enabled` is off in the configuration or the
//! caller asked for no cache for this run.

use crate::api::RosterApi;
use crate::cache::fs::FileCache;
use crate::cache::{Cache, NoCache};
use crate::commands::RosterPaths;
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub const DATA_ENV: &str = "ROSTER_DATA";

pub struct RosterContext {
    pub api: RosterApi<FileStore, Box<dyn Cache>>,
    pub config: RosterConfig,
}

/// The data directory to use, following the resolution order above.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine a data directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>, no_cache: bool) -> Result<RosterContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = RosterConfig::load(&data_dir)?;

    let cache: Box<dyn Cache> = if no_cache || !config.cache_enabled {
        Box::new(NoCache)
    } else {
        Box::new(FileCache::new(data_dir.clone()))
    };
    debug!(
        data = %data_dir.display(),
        cache = !no_cache && config.cache_enabled,
        "initialized roster context"
    );

    let store = FileStore::new(data_dir.clone());
    let paths = RosterPaths { data: data_dir };
    let api = RosterApi::new(store, cache, paths, config.clone());

    Ok(RosterContext { api, config })
}
