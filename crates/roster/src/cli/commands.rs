//! Dispatch from parsed arguments to the roster API.
//!
//! The CLI layer is the only place that:
//! - Knows about stdout and stderr
//! - Chooses between text and JSON output
//! - Turns errors into exit codes (via `main`)

use super::logging::init_logging;
use super::render::{print_messages, render_config, render_customer_table, to_json, JsonOutput};
use super::setup::{Cli, Commands, OutputFormat};
use anyhow::{bail, Context, Result};
use clap::Parser;
use rosterapp::commands::config::ConfigAction;
use rosterapp::commands::CmdResult;
use rosterapp::init::initialize;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Naked `roster` lists
    let command = cli.command.unwrap_or(Commands::List);
    debug!(?command, "dispatching");

    let ctx = initialize(cli.data, cli.no_cache).context("Failed to open the roster store")?;
    let mut api = ctx.api;

    let mut startup = CmdResult::default();
    if needs_recovery(&command) {
        startup = api.recover()?;
    }

    let query = is_query(&command);
    let result = match command {
        Commands::Add {
            firstname,
            lastname,
            email,
            phone,
        } => api.add_customer(&firstname, &lastname, email.as_deref(), phone.as_deref())?,
        Commands::List => api.list_customers()?,
        Commands::Find { term } => api.find_customers(&term)?,
        Commands::Update { id, field, value } => api.update_customer(&id, &field, &value)?,
        Commands::Delete { selector } => api.delete_customer(&selector)?,
        Commands::Resequence => api.resequence()?,
        Commands::Seed { yes } => {
            if !yes {
                bail!("seed removes every existing customer, re-run with --yes to confirm");
            }
            api.seed()?
        }
        Commands::Init => api.init()?,
        Commands::Config { template } => {
            let action = if template {
                ConfigAction::Template
            } else {
                ConfigAction::Show
            };
            api.config(action)?
        }
    };

    match cli.output {
        OutputFormat::Json => {
            let mut messages = startup.messages;
            messages.extend(result.messages.iter().cloned());
            let customers = if result.listed_customers.is_empty() {
                &result.affected_customers
            } else {
                &result.listed_customers
            };
            println!(
                "{}",
                to_json(&JsonOutput {
                    customers,
                    messages: &messages,
                    config: result.config.as_ref(),
                })
            );
        }
        OutputFormat::Text => {
            print_messages(&startup.messages);
            print_text(&result, query, &api.paths().config_file());
        }
    }
    Ok(())
}

/// Commands that touch customers run the startup repair first.
fn needs_recovery(command: &Commands) -> bool {
    !matches!(command, Commands::Init | Commands::Config { .. })
}

/// List and find print a table; everything else prints messages only.
fn is_query(command: &Commands) -> bool {
    matches!(command, Commands::List | Commands::Find { .. })
}

fn print_text(result: &CmdResult, is_query: bool, config_file: &std::path::Path) {
    if let Some(config) = &result.config {
        print!("{}", render_config(config, config_file));
    }

    // List and find carry their "nothing found" line as a message
    if is_query && !result.listed_customers.is_empty() {
        print!(
            "{}",
            render_customer_table(&result.listed_customers, "", result.from_cache)
        );
    }

    print_messages(&result.messages);
}
