use crate::cache::Cache;
use crate::commands::helpers::name_matches;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::Customer;
use crate::sequence::resequence_all;
use crate::store::RecordStore;
use tracing::debug;

/// Removes the customer picked by `selector`, then closes the gap in the numbering.
///
/// The selector is tried as an exact customer id, then as an exact email, then as part
/// of a first or last name. A name fragment must pick out exactly one customer.
pub fn run<S: RecordStore, C: Cache>(store: &mut S, cache: &C, selector: &str) -> Result<CmdResult> {
    let customer = resolve(store, selector)?;
    store.delete_by_internal_id(&customer.id)?;
    let report = resequence_all(store)?;
    cache.invalidate_all()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Customer deleted ({}): {}",
        customer.display_id(),
        customer.full_name()
    )));
    if report.rewritten > 0 {
        result.add_message(CmdMessage::info(format!(
            "Renumbered {} customer{}",
            report.rewritten,
            if report.rewritten == 1 { "" } else { "s" }
        )));
    }
    result.affected_customers.push(customer.to_row());
    Ok(result)
}

fn resolve<S: RecordStore>(store: &S, selector: &str) -> Result<Customer> {
    let selector = selector.trim();
    if selector.is_empty() {
        return Err(RosterError::Validation(
            "A customer id, email or name is required".to_string(),
        ));
    }
    let records = store.scan_ordered_by_customer_id()?;

    if let Some(c) = records
        .iter()
        .find(|c| c.customer_id.as_deref() == Some(selector))
    {
        debug!(selector, "matched by customer id");
        return Ok(c.clone());
    }
    if let Some(c) = records.iter().find(|c| c.email == selector) {
        debug!(selector, "matched by email");
        return Ok(c.clone());
    }

    let needle = selector.to_lowercase();
    let mut by_name = records.into_iter().filter(|c| name_matches(c, &needle));
    match (by_name.next(), by_name.count()) {
        (None, _) => Err(RosterError::CustomerNotFound(selector.to_string())),
        (Some(c), 0) => Ok(c),
        (Some(_), others) => Err(RosterError::Ambiguous {
            term: selector.to_string(),
            count: others + 1,
        }),
    }
}
