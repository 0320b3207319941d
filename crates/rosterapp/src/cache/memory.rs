use super::{Cache, CacheEntry};
use crate::error::{Result, RosterError};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

/// In-process cache for tests.
#[derive(Default)]
pub struct MemCache {
    entries: RefCell<HashMap<String, CacheEntry>>,
    simulate_error: Cell<bool>,
}

impl MemCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation fail, to exercise degraded paths.
    pub fn set_simulate_error(&self, simulate: bool) {
        self.simulate_error.set(simulate);
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> Result<()> {
        if self.simulate_error.get() {
            return Err(RosterError::Cache("Simulated cache error".to_string()));
        }
        Ok(())
    }
}

impl Cache for MemCache {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        self.check()?;
        let mut entries = self.entries.borrow_mut();
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    fn set_with_expiry(&self, key: &str, value: Value, ttl: Duration) -> Result<()> {
        self.check()?;
        let entry = CacheEntry::new(value, ttl)?;
        self.entries.borrow_mut().insert(key.to_string(), entry);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn invalidate_all(&self) -> Result<()> {
        self.check()?;
        self.entries.borrow_mut().clear();
        Ok(())
    }
}
