//! # Roster CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this file only
//! invokes `cli::run()` and turns an error into an exit code.
//!
//! ## Workspace Structure
//!
//! - `crates/rosterapp/`: the library with all record keeping and id sequencing
//! - `crates/roster/`: this CLI, a client of the library
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/roster/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging, context wiring and dispatch (commands.rs)       │
//! │  - Terminal rendering via outstanding templates (render.rs) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/rosterapp/src/api.rs)                    │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering
//!
//! Output goes through the `outstanding` crate. Templates live in
//! `src/cli/templates/` and are embedded with `include_str!()`; `render.rs` computes
//! column layout in Rust and hands the rows to the templates. `--output json` skips
//! the templates and prints the rows and messages as JSON.
//!
//! ## Testing
//!
//! - Rendering: canned rows and messages in, text out (`cli/render.rs`).
//! - End to end: `tests/cli_e2e.rs` runs the binary against a temporary data
//!   directory through `ROSTER_DATA`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
