//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for every roster
//! operation. It owns the store, the cache and the effective configuration, and hands
//! them to the matching `commands::*::run` function.
//!
//! The facade normalizes raw inputs (field names, optional contact fields) into typed
//! values; the logic itself lives in the command modules.
//!
//! ## Generic Over Store and Cache
//!
//! - Production: `RosterApi<FileStore, Box<dyn Cache>>`
//! - Testing: `RosterApi<InMemoryStore, MemCache>`
//!
//! API tests only check dispatch and argument handling. Command behavior is tested in
//! the command modules.

use crate::cache::Cache;
use crate::commands::{self, config::ConfigAction, CmdResult, RosterPaths};
use crate::config::RosterConfig;
use crate::error::Result;
use crate::model::{CustomerField, NewCustomer};
use crate::store::RecordStore;

pub struct RosterApi<S: RecordStore, C: Cache> {
    store: S,
    cache: C,
    paths: RosterPaths,
    config: RosterConfig,
}

impl<S: RecordStore, C: Cache> RosterApi<S, C> {
    pub fn new(store: S, cache: C, paths: RosterPaths, config: RosterConfig) -> Self {
        Self {
            store,
            cache,
            paths,
            config,
        }
    }

    /// Repairs the id sequence if configured to. Call once before other operations.
    pub fn recover(&mut self) -> Result<CmdResult> {
        commands::startup::recover(
            &mut self.store,
            &self.cache,
            self.config.resequence_on_startup,
        )
    }

    pub fn add_customer(
        &mut self,
        firstname: &str,
        lastname: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<CmdResult> {
        let fields = NewCustomer::parse(firstname, lastname, email, phone)?;
        commands::add::run(&mut self.store, &self.cache, fields)
    }

    pub fn list_customers(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.cache, self.config.cache_ttl())
    }

    pub fn find_customers(&self, term: &str) -> Result<CmdResult> {
        commands::find::run(&self.store, &self.cache, self.config.cache_ttl(), term)
    }

    pub fn update_customer(
        &mut self,
        customer_id: &str,
        field: &str,
        value: &str,
    ) -> Result<CmdResult> {
        let field: CustomerField = field.parse()?;
        commands::update::run(&mut self.store, &self.cache, customer_id, field, value)
    }

    pub fn delete_customer(&mut self, selector: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, &self.cache, selector)
    }

    pub fn resequence(&mut self) -> Result<CmdResult> {
        commands::resequence::run(&mut self.store, &self.cache)
    }

    pub fn seed(&mut self) -> Result<CmdResult> {
        commands::seed::run(&mut self.store, &self.cache)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config, action)
    }

    pub fn paths(&self) -> &RosterPaths {
        &self.paths
    }

    pub fn settings(&self) -> &RosterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::memory::MemCache;
    use crate::error::RosterError;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn make_api() -> RosterApi<InMemoryStore, MemCache> {
        RosterApi::new(
            InMemoryStore::new(),
            MemCache::new(),
            RosterPaths {
                data: PathBuf::from("/tmp/roster-test"),
            },
            RosterConfig::default(),
        )
    }

    #[test]
    fn add_then_list() {
        let mut api = make_api();
        api.add_customer("John", "Doe", Some("john@example.com"), None)
            .unwrap();
        api.add_customer("Jane", "Smith", None, Some("555-123-4567"))
            .unwrap();

        let result = api.list_customers().unwrap();
        assert_eq!(result.listed_customers.len(), 2);
        assert_eq!(result.listed_customers[1].phone, "555-123-4567");
    }

    #[test]
    fn add_validates_before_touching_the_store() {
        let mut api = make_api();
        let err = api.add_customer("John", "Doe", Some("not-an-email"), None);
        assert!(matches!(err, Err(RosterError::Validation(_))));
        assert!(api.list_customers().unwrap().listed_customers.is_empty());
    }

    #[test]
    fn update_parses_field_names() {
        let mut api = make_api();
        api.add_customer("John", "Doe", None, None).unwrap();

        api.update_customer("1", "First Name", "Johnny").unwrap();
        assert_eq!(
            api.find_customers("johnny").unwrap().listed_customers[0].name,
            "Johnny Doe"
        );

        let err = api.update_customer("1", "age", "40");
        assert!(matches!(err, Err(RosterError::Validation(_))));
    }

    #[test]
    fn delete_and_resequence_dispatch() {
        let mut api = make_api();
        api.seed().unwrap();

        api.delete_customer("5").unwrap();
        let result = api.resequence().unwrap();
        assert!(result.messages[0].content.contains("already in sequence"));
        assert_eq!(api.list_customers().unwrap().listed_customers.len(), 8);
    }

    #[test]
    fn recover_respects_config() {
        let mut api = make_api();
        api.config.resequence_on_startup = false;
        let result = api.recover().unwrap();
        assert!(result.messages.is_empty());
    }

    #[test]
    fn config_show_reports_settings() {
        let api = make_api();
        let result = api.config(ConfigAction::Show).unwrap();
        assert_eq!(result.config.as_ref(), Some(api.settings()));
    }
}
