//! # Query Cache
//!
//! Listings and searches are read-through cached: the command layer asks the [`Cache`]
//! first and only scans the store on a miss, storing the rows it produced. Any mutation
//! drops every entry with [`Cache::invalidate_all`], so a change is always visible to
//! the next query.
//!
//! Values are the JSON form of the rows a query returned. Entries expire after a TTL
//! (one hour unless configured otherwise).
//!
//! ## Implementations
//!
//! - [`fs::FileCache`]: `cache.json` in the data directory, shared across invocations.
//! - [`memory::MemCache`]: in-process, for tests.
//! - [`NoCache`]: caching turned off; every lookup misses.
//!
//! ## Keys
//!
//! - [`ALL_CUSTOMERS_KEY`] for the full listing.
//! - [`search_key`] for a name search, keyed on the lowercased term.

use crate::error::{Result, RosterError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

pub mod fs;
pub mod memory;

pub const ALL_CUSTOMERS_KEY: &str = "all_customers";

pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

pub fn search_key(term: &str) -> String {
    format!("search:{}", term.to_lowercase())
}

pub trait Cache {
    /// Returns the live value for `key`, if any. Expired entries read as absent.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key` until `ttl` has passed.
    fn set_with_expiry(&self, key: &str, value: Value, ttl: Duration) -> Result<()>;

    fn delete(&self, key: &str) -> Result<()>;

    /// Drops every entry.
    fn invalidate_all(&self) -> Result<()>;
}

impl<C: Cache + ?Sized> Cache for Box<C> {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn set_with_expiry(&self, key: &str, value: Value, ttl: Duration) -> Result<()> {
        (**self).set_with_expiry(key, value, ttl)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }

    fn invalidate_all(&self) -> Result<()> {
        (**self).invalidate_all()
    }
}

/// Caching disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl Cache for NoCache {
    fn get(&self, _key: &str) -> Result<Option<Value>> {
        Ok(None)
    }

    fn set_with_expiry(&self, _key: &str, _value: Value, _ttl: Duration) -> Result<()> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    fn invalidate_all(&self) -> Result<()> {
        Ok(())
    }
}

/// A stored value with its expiry time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub value: Value,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(value: Value, ttl: Duration) -> Result<Self> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| RosterError::Cache(format!("TTL out of range: {}", e)))?;
        let expires_at = Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| RosterError::Cache(format!("TTL too large: {}s", ttl.num_seconds())))?;
        Ok(Self { value, expires_at })
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
