use crate::cache::Cache;
use crate::commands::{add, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewCustomer;
use crate::store::RecordStore;

/// (firstname, lastname, email, phone)
const SAMPLE_CUSTOMERS: [(&str, &str, &str, &str); 9] = [
    ("John", "Doe", "john.doe@example.com", "123-456-7890"),
    ("Jane", "Smith", "jane.smith@example.com", "234-567-8901"),
    ("Robert", "Johnson", "robert.j@example.com", "345-678-9012"),
    ("Sarah", "Williams", "sarah.w@example.com", "456-789-0123"),
    ("Michael", "Brown", "michael.b@example.com", "567-890-1234"),
    ("Emily", "Davis", "emily.d@example.com", "678-901-2345"),
    ("David", "Miller", "david.m@example.com", "789-012-3456"),
    ("Lisa", "Wilson", "lisa.w@example.com", "890-123-4567"),
    ("James", "Taylor", "james.t@example.com", "901-234-5678"),
];

/// Replaces every customer with the sample set, numbered through the normal add path.
pub fn run<S: RecordStore, C: Cache>(store: &mut S, cache: &C) -> Result<CmdResult> {
    let removed = store.clear()?;
    cache.invalidate_all()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Cleared {} existing customers",
        removed
    )));

    for (first, last, email, phone) in SAMPLE_CUSTOMERS {
        let fields = NewCustomer::parse(first, last, Some(email), Some(phone))?;
        let added = add::run(store, cache, fields)?;
        result.affected_customers.extend(added.affected_customers);
    }

    result.add_message(CmdMessage::success(format!(
        "Seeded {} customers",
        result.affected_customers.len()
    )));
    Ok(result)
}
