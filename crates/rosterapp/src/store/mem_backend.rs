use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::Customer;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since roster is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` like the file backend.
#[derive(Default)]
pub struct MemBackend {
    index: RefCell<HashMap<Uuid, Customer>>,
    simulate_write_error: Cell<bool>,
    saves: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// How many times the index has been written.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn load_index(&self) -> Result<HashMap<Uuid, Customer>> {
        Ok(self.index.borrow().clone())
    }

    fn save_index(&self, new_index: &HashMap<Uuid, Customer>) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(RosterError::StoreUnavailable(
                "Simulated write error".to_string(),
            ));
        }
        *self.index.borrow_mut() = new_index.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
