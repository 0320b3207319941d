use super::backend::StorageBackend;
use super::{sort_by_customer_id, RecordStore};
use crate::error::{Result, RosterError};
use crate::model::{Customer, NewCustomer};
use uuid::Uuid;

pub struct CustomerStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> CustomerStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: StorageBackend> RecordStore for CustomerStore<B> {
    fn count(&self) -> Result<usize> {
        Ok(self.backend.load_index()?.len())
    }

    fn scan_ordered_by_customer_id(&self) -> Result<Vec<Customer>> {
        let mut records: Vec<Customer> = self.backend.load_index()?.into_values().collect();
        sort_by_customer_id(&mut records);
        Ok(records)
    }

    fn create_without_id(&mut self, fields: NewCustomer) -> Result<Customer> {
        let customer = Customer::new(fields);

        let mut index = self.backend.load_index()?;
        index.insert(customer.id, customer.clone());
        self.backend.save_index(&index)?;

        Ok(customer)
    }

    fn update_customer_id(&mut self, id: &Uuid, customer_id: &str) -> Result<()> {
        let mut index = self.backend.load_index()?;
        let record = index.get_mut(id).ok_or(RosterError::NotFound(*id))?;
        record.customer_id = Some(customer_id.to_string());
        self.backend.save_index(&index)
    }

    fn update_customer_ids(&mut self, changes: &[(Uuid, String)]) -> Result<()> {
        if changes.is_empty() {
            return Ok(());
        }

        // Every target must exist before anything is written
        let mut index = self.backend.load_index()?;
        for (id, customer_id) in changes {
            let record = index.get_mut(id).ok_or(RosterError::NotFound(*id))?;
            record.customer_id = Some(customer_id.clone());
        }
        self.backend.save_index(&index)
    }

    fn delete_by_internal_id(&mut self, id: &Uuid) -> Result<()> {
        let mut index = self.backend.load_index()?;
        if index.remove(id).is_none() {
            return Err(RosterError::NotFound(*id));
        }
        self.backend.save_index(&index)
    }

    fn get(&self, id: &Uuid) -> Result<Customer> {
        self.backend
            .load_index()?
            .remove(id)
            .ok_or(RosterError::NotFound(*id))
    }

    fn save(&mut self, customer: &Customer) -> Result<()> {
        let mut index = self.backend.load_index()?;
        let record = index
            .get_mut(&customer.id)
            .ok_or(RosterError::NotFound(customer.id))?;
        *record = customer.clone();
        self.backend.save_index(&index)
    }

    fn clear(&mut self) -> Result<usize> {
        let mut index = self.backend.load_index()?;
        let removed = index.len();
        if removed > 0 {
            index.clear();
            self.backend.save_index(&index)?;
        }
        Ok(removed)
    }
}
