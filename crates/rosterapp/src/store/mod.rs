//! # Storage Layer
//!
//! The [`RecordStore`] trait is everything the rest of roster knows about persistence.
//! The sequence module only needs a handful of its operations (count, ordered scan,
//! create without an id, rewrite one id); the command layer adds lookups and field
//! updates on top.
//!
//! ## Implementations
//!
//! [`record_store::CustomerStore`] implements the trait once, over a
//! [`backend::StorageBackend`] that knows how to load and save the record index:
//!
//! - [`fs::FileStore`]: `CustomerStore<FsBackend>`, records in `customers.json`.
//! - [`memory::InMemoryStore`]: `CustomerStore<MemBackend>`, for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── customers.json   # HashMap<Uuid, Customer>
//! ├── cache.json       # read-through cache (see crate::cache)
//! └── roster.toml      # optional configuration
//! ```
//!
//! ## Ordering
//!
//! [`sort_by_customer_id`] defines the one order every listing and every renumbering
//! pass uses. On a healthy collection it is plain id order; it also copes with mixed
//! widths left behind by an interrupted renumbering, which a string sort would not.

use crate::error::Result;
use crate::ident::parse_rank;
use crate::model::{Customer, NewCustomer};
use std::cmp::Ordering;
use uuid::Uuid;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod record_store;

/// Durable collection of customer records, keyed by their internal [`Uuid`].
pub trait RecordStore {
    /// Number of records, assigned or not.
    fn count(&self) -> Result<usize>;

    /// Every record, in [`sort_by_customer_id`] order.
    fn scan_ordered_by_customer_id(&self) -> Result<Vec<Customer>>;

    /// Persists a new record without a customer id and returns it.
    fn create_without_id(&mut self, fields: NewCustomer) -> Result<Customer>;

    /// Rewrites one record's customer id. Fails with `NotFound` if the record is gone.
    fn update_customer_id(&mut self, id: &Uuid, customer_id: &str) -> Result<()>;

    /// Rewrites several customer ids as one operation.
    ///
    /// Backends that can do better than one write per record override this; either way
    /// a missing record fails the call with `NotFound`.
    fn update_customer_ids(&mut self, changes: &[(Uuid, String)]) -> Result<()> {
        for (id, customer_id) in changes {
            self.update_customer_id(id, customer_id)?;
        }
        Ok(())
    }

    /// Removes a record permanently. Fails with `NotFound` if the record is gone.
    fn delete_by_internal_id(&mut self, id: &Uuid) -> Result<()>;

    /// Fetches one record.
    fn get(&self, id: &Uuid) -> Result<Customer>;

    /// Persists field changes to an existing record.
    fn save(&mut self, customer: &Customer) -> Result<()>;

    /// Removes every record, returning how many there were.
    fn clear(&mut self) -> Result<usize>;
}

/// Sorts records by the numeric value of their customer id.
///
/// Ties, which only a damaged collection can have, fall back to creation time and then
/// to the internal id. Records without a readable id go last, oldest first.
pub fn sort_by_customer_id(records: &mut [Customer]) {
    records.sort_by(compare_customer_ids);
}

fn compare_customer_ids(a: &Customer, b: &Customer) -> Ordering {
    let rank_a = a.customer_id.as_deref().and_then(parse_rank);
    let rank_b = b.customer_id.as_deref().and_then(parse_rank);

    let by_rank = match (rank_a, rank_b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_rank
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}
