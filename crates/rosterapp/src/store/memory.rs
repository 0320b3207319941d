use super::mem_backend::MemBackend;
use super::record_store::CustomerStore;

pub type InMemoryStore = CustomerStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        CustomerStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::ident::{format_id, padding_width};
    use crate::model::NewCustomer;
    use crate::sequence::assign_on_create;
    use crate::store::RecordStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` customers already numbered `1..=count` at the matching width.
        pub fn with_customers(mut self, count: usize) -> Self {
            let width = padding_width(count);
            for i in 1..=count {
                let fields = NewCustomer::parse(
                    &format!("First{}", i),
                    &format!("Last{}", i),
                    Some(&format!("customer{}@example.com", i)),
                    None,
                )
                .unwrap();
                let created = self.store.create_without_id(fields).unwrap();
                let id = format_id(i, width).unwrap();
                self.store.update_customer_id(&created.id, &id).unwrap();
            }
            self
        }

        /// Adds customers carrying exactly the given ids, valid or not.
        pub fn with_raw_ids(mut self, ids: &[&str]) -> Self {
            for (i, id) in ids.iter().enumerate() {
                let fields =
                    NewCustomer::parse(&format!("Raw{}", i + 1), "Record", None, None).unwrap();
                let created = self.store.create_without_id(fields).unwrap();
                self.store.update_customer_id(&created.id, id).unwrap();
            }
            self
        }

        /// Adds one customer, numbered after the existing ones.
        pub fn with_customer(mut self, firstname: &str, lastname: &str, email: &str) -> Self {
            let fields = NewCustomer::parse(firstname, lastname, Some(email), None).unwrap();
            let created = self.store.create_without_id(fields).unwrap();
            assign_on_create(&mut self.store, &created.id).unwrap();
            self
        }
    }
}
