//! # Roster Architecture
//!
//! Roster keeps a list of customers, each addressed by a short number that is always
//! contiguous and zero-padded: with 42 customers the ids are exactly `"01"` to `"42"`.
//! Adding the hundredth customer widens every id to three digits; deleting one closes
//! the gap. The library does all of that. The `roster` binary is only a client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (roster binary)                                        │
//! │  - Parses arguments, renders output, owns stdout/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, normalizes raw input                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, cache read-through and invalidation      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sequence (sequence.rs, ident.rs)                           │
//! │  - Assigns and rewrites customer ids                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/) and Cache (cache/)                        │
//! │  - FileStore / InMemoryStore, FileCache / MemCache          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout or stderr and never exits the
//! process. Diagnostics go through `tracing`; whoever runs the library decides whether
//! and where they are printed.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`sequence`]: Id assignment and full renumbering
//! - [`ident`]: Id width and formatting rules
//! - [`store`]: Storage abstraction and implementations
//! - [`cache`]: Query cache abstraction and implementations
//! - [`model`]: `Customer` and its field rules
//! - [`config`]: Configuration
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod ident;
pub mod init;
pub mod model;
pub mod sequence;
pub mod store;
