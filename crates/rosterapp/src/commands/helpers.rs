use crate::cache::Cache;
use crate::error::{Result, RosterError};
use crate::model::{Customer, CustomerRow};
use crate::store::RecordStore;
use std::time::Duration;
use tracing::{debug, warn};

/// Serves `key` from the cache, or runs `load` and caches what it returns.
///
/// The cache is best effort: a failing or unreadable cache is logged and the rows come
/// from `load` instead. Returns the rows and whether they came from the cache.
pub fn read_through<C, F>(
    cache: &C,
    key: &str,
    ttl: Duration,
    load: F,
) -> Result<(Vec<CustomerRow>, bool)>
where
    C: Cache,
    F: FnOnce() -> Result<Vec<CustomerRow>>,
{
    match cache.get(key) {
        Ok(Some(value)) => match serde_json::from_value::<Vec<CustomerRow>>(value) {
            Ok(rows) => {
                debug!(key, rows = rows.len(), "cache hit");
                return Ok((rows, true));
            }
            Err(e) => warn!(key, error = %e, "ignoring unreadable cache entry"),
        },
        Ok(None) => debug!(key, "cache miss"),
        Err(e) => warn!(key, error = %e, "cache read failed"),
    }

    let rows = load()?;
    match serde_json::to_value(&rows) {
        Ok(value) => {
            if let Err(e) = cache.set_with_expiry(key, value, ttl) {
                warn!(key, error = %e, "cache write failed");
            }
        }
        Err(e) => warn!(key, error = %e, "could not encode rows for the cache"),
    }
    Ok((rows, false))
}

/// All records as rows, in id order.
pub fn all_rows<S: RecordStore>(store: &S) -> Result<Vec<CustomerRow>> {
    Ok(store
        .scan_ordered_by_customer_id()?
        .iter()
        .map(Customer::to_row)
        .collect())
}

/// The record whose customer id is exactly `customer_id`.
pub fn find_by_customer_id<S: RecordStore>(store: &S, customer_id: &str) -> Result<Customer> {
    let customer_id = customer_id.trim();
    store
        .scan_ordered_by_customer_id()?
        .into_iter()
        .find(|c| c.customer_id.as_deref() == Some(customer_id))
        .ok_or_else(|| RosterError::CustomerNotFound(customer_id.to_string()))
}

/// Case-insensitive substring match on first or last name.
pub fn name_matches(customer: &Customer, needle_lower: &str) -> bool {
    customer.firstname.to_lowercase().contains(needle_lower)
        || customer.lastname.to_lowercase().contains(needle_lower)
}
