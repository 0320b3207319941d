use crate::cache::Cache;
use crate::commands::helpers::find_by_customer_id;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CustomerField;
use crate::store::RecordStore;

/// Changes one field of the customer numbered `customer_id`. The number itself stays.
pub fn run<S: RecordStore, C: Cache>(
    store: &mut S,
    cache: &C,
    customer_id: &str,
    field: CustomerField,
    value: &str,
) -> Result<CmdResult> {
    let mut customer = find_by_customer_id(store, customer_id)?;
    customer.apply(field, value)?;
    store.save(&customer)?;
    cache.invalidate_all()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Customer updated ({}): {} is now {}",
        customer.display_id(),
        field,
        value.trim()
    )));
    result.affected_customers.push(customer.to_row());
    Ok(result)
}
