use crate::cache::{search_key, Cache};
use crate::commands::helpers::{name_matches, read_through};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::Customer;
use crate::store::RecordStore;
use std::time::Duration;

/// Customers whose first or last name contains `term`, ignoring case.
pub fn run<S: RecordStore, C: Cache>(
    store: &S,
    cache: &C,
    ttl: Duration,
    term: &str,
) -> Result<CmdResult> {
    let term = term.trim();
    if term.is_empty() {
        return Err(RosterError::Validation("Search term is required".to_string()));
    }
    let needle = term.to_lowercase();

    let (rows, from_cache) = read_through(cache, &search_key(term), ttl, || {
        Ok(store
            .scan_ordered_by_customer_id()?
            .iter()
            .filter(|c| name_matches(c, &needle))
            .map(Customer::to_row)
            .collect())
    })?;

    let mut result = CmdResult::default().with_listed_customers(rows);
    result.from_cache = from_cache;
    if result.listed_customers.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No customers found matching \"{}\"",
            term
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::memory::MemCache;
    use crate::cache::NoCache;
    use crate::commands::update;
    use crate::model::CustomerField;
    use crate::store::memory::fixtures::StoreFixture;

    const TTL: Duration = Duration::from_secs(3600);

    fn fixture() -> crate::store::memory::InMemoryStore {
        StoreFixture::new()
            .with_customer("John", "Doe", "john@example.com")
            .with_customer("Jane", "Johnson", "jane@example.com")
            .with_customer("Robert", "Smith", "robert@example.com")
            .store
    }

    #[test]
    fn matches_first_or_last_name_ignoring_case() {
        let store = fixture();
        let result = run(&store, &NoCache, TTL, "JOHN").unwrap();

        let names: Vec<&str> = result
            .listed_customers
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["John Doe", "Jane Johnson"]);
    }

    #[test]
    fn no_match_is_empty_with_message() {
        let store = fixture();
        let result = run(&store, &NoCache, TTL, "zed").unwrap();
        assert!(result.listed_customers.is_empty());
        assert!(result.messages[0].content.contains("zed"));
    }

    #[test]
    fn blank_term_is_rejected() {
        let store = fixture();
        assert!(matches!(
            run(&store, &NoCache, TTL, "   "),
            Err(RosterError::Validation(_))
        ));
    }

    #[test]
    fn searches_differing_only_in_case_share_an_entry() {
        let store = fixture();
        let cache = MemCache::new();

        let first = run(&store, &cache, TTL, "smith").unwrap();
        let second = run(&store, &cache, TTL, "SMITH").unwrap();

        assert!(!first.from_cache);
        assert!(second.from_cache);
        assert_eq!(first.listed_customers, second.listed_customers);
    }

    #[test]
    fn update_is_visible_to_the_next_search() {
        let mut store = fixture();
        let cache = MemCache::new();
        assert_eq!(run(&store, &cache, TTL, "smyth").unwrap().listed_customers.len(), 0);

        update::run(&mut store, &cache, "3", CustomerField::LastName, "Smyth").unwrap();

        let result = run(&store, &cache, TTL, "smyth").unwrap();
        assert!(!result.from_cache);
        assert_eq!(result.listed_customers.len(), 1);
    }
}
