//! # Command Layer
//!
//! This module contains the **business logic** of roster. Each command lives in its own
//! submodule as a `run` function over a [`RecordStore`](crate::store::RecordStore) and a
//! [`Cache`](crate::cache::Cache).
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or formatting
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_customers`: rows that were added, changed or removed
//! - `listed_customers`: rows to display for `list` and `find`
//! - `from_cache`: whether the listing was served from the cache
//! - `messages`: structured messages with levels (info, success, warning)
//! - `config`: configuration data (for `config`)
//!
//! ## Cache Discipline
//!
//! Queries read through the cache (see [`helpers::read_through`]). Every command that
//! writes to the store invalidates the whole cache before returning.
//!
//! ## Command Modules
//!
//! - [`add`]: Create a customer and number it
//! - [`list`]: All customers in id order
//! - [`find`]: Name search
//! - [`update`]: Change one field of a customer
//! - [`delete`]: Remove a customer and close the gap
//! - [`resequence`]: Renumber on demand
//! - [`seed`]: Reset to the sample customers
//! - [`startup`]: Recovery run before every CLI command
//! - [`init`]: Create the data directory
//! - [`config`]: Show configuration

use crate::config::RosterConfig;
use crate::model::CustomerRow;
use serde::Serialize;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod find;
pub mod helpers;
pub mod init;
pub mod list;
pub mod resequence;
pub mod seed;
pub mod startup;
pub mod update;

#[derive(Debug, Clone)]
pub struct RosterPaths {
    pub data: PathBuf,
}

impl RosterPaths {
    pub fn config_file(&self) -> PathBuf {
        self.data.join(crate::config::CONFIG_FILENAME)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_customers: Vec<CustomerRow>,
    pub listed_customers: Vec<CustomerRow>,
    pub from_cache: bool,
    pub messages: Vec<CmdMessage>,
    pub config: Option<RosterConfig>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_customers(mut self, rows: Vec<CustomerRow>) -> Self {
        self.listed_customers = rows;
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }
}
