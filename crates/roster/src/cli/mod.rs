//! # CLI Behavior
//!
//! This is **one possible UI client** for roster, not the application itself. It is
//! the only place that knows about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution
//!
//! Running `roster` with no subcommand lists every customer.
//!
//! ## Startup Recovery
//!
//! Before any command that reads or writes customers, the CLI runs the library's
//! recovery pass (unless `resequence_on_startup` is off), so ids damaged by an
//! interrupted run are repaired before they are shown.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Dispatch from parsed arguments to the API
//! - `logging`: `tracing` subscriber setup
//! - `render`: Output formatting (tables, messages, JSON)
//! - `styles`: Terminal styles
//! - `templates`: Output templates

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
