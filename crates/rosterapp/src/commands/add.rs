use crate::cache::Cache;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewCustomer;
use crate::sequence::assign_on_create;
use crate::store::RecordStore;
use tracing::warn;

pub fn run<S: RecordStore, C: Cache>(
    store: &mut S,
    cache: &C,
    fields: NewCustomer,
) -> Result<CmdResult> {
    let created = store.create_without_id(fields)?;

    let assigned = match assign_on_create(store, &created.id) {
        Ok(assigned) => assigned,
        Err(e) => {
            // Leave no record without a customer id behind
            if let Err(cleanup) = store.delete_by_internal_id(&created.id) {
                warn!(id = %created.id, error = %cleanup, "could not remove unnumbered customer");
            }
            return Err(e);
        }
    };
    cache.invalidate_all()?;

    let customer = store.get(&created.id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Customer added ({}): {}",
        assigned,
        customer.full_name()
    )));
    result.affected_customers.push(customer.to_row());
    Ok(result)
}
