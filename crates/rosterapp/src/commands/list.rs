use crate::cache::{Cache, ALL_CUSTOMERS_KEY};
use crate::commands::helpers::{all_rows, read_through};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;
use std::time::Duration;

pub fn run<S: RecordStore, C: Cache>(store: &S, cache: &C, ttl: Duration) -> Result<CmdResult> {
    let (rows, from_cache) = read_through(cache, ALL_CUSTOMERS_KEY, ttl, || all_rows(store))?;

    let mut result = CmdResult::default().with_listed_customers(rows);
    result.from_cache = from_cache;
    if result.listed_customers.is_empty() {
        result.add_message(CmdMessage::info("No customers found"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::memory::MemCache;
    use crate::cache::NoCache;
    use crate::commands::{add, delete};
    use crate::model::NewCustomer;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    const TTL: Duration = Duration::from_secs(3600);

    #[test]
    fn lists_in_id_order() {
        let store = StoreFixture::new().with_customers(11).store;
        let result = run(&store, &NoCache, TTL).unwrap();

        let ids: Vec<&str> = result
            .listed_customers
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids.len(), 11);
        assert_eq!(ids[0], "01");
        assert_eq!(ids[9], "10");
        assert_eq!(ids[10], "11");
    }

    #[test]
    fn empty_store_says_so() {
        let store = InMemoryStore::new();
        let result = run(&store, &NoCache, TTL).unwrap();
        assert!(result.listed_customers.is_empty());
        assert_eq!(result.messages[0].content, "No customers found");
    }

    #[test]
    fn repeated_listing_comes_from_cache_unchanged() {
        let store = StoreFixture::new().with_customers(3).store;
        let cache = MemCache::new();

        let first = run(&store, &cache, TTL).unwrap();
        let second = run(&store, &cache, TTL).unwrap();

        assert!(!first.from_cache);
        assert!(second.from_cache);
        assert_eq!(first.listed_customers, second.listed_customers);
    }

    #[test]
    fn mutations_are_visible_to_the_next_listing() {
        let mut store = StoreFixture::new().with_customers(3).store;
        let cache = MemCache::new();
        run(&store, &cache, TTL).unwrap();

        let fields = NewCustomer::parse("Newest", "Customer", None, None).unwrap();
        add::run(&mut store, &cache, fields).unwrap();
        let after_add = run(&store, &cache, TTL).unwrap();
        assert!(!after_add.from_cache);
        assert_eq!(after_add.listed_customers.len(), 4);

        delete::run(&mut store, &cache, "1").unwrap();
        let after_delete = run(&store, &cache, TTL).unwrap();
        assert!(!after_delete.from_cache);
        assert_eq!(after_delete.listed_customers.len(), 3);
        assert_eq!(after_delete.listed_customers[0].name, "First2 Last2");
        assert_eq!(after_delete.listed_customers[0].id, "1");
    }
}
