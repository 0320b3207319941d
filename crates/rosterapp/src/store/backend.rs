use crate::error::Result;
use crate::model::Customer;
use std::collections::HashMap;
use uuid::Uuid;

/// Raw storage I/O for the record index.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::record_store::CustomerStore`] handles the "what" (lookups, id rewrites).
pub trait StorageBackend {
    /// Load every record. A collection that was never written loads as empty.
    fn load_index(&self) -> Result<HashMap<Uuid, Customer>>;

    /// Replace the stored records. MUST be atomic to avoid partial writes.
    fn save_index(&self, index: &HashMap<Uuid, Customer>) -> Result<()>;
}
