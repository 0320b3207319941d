use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.2"
/// Format for dev builds: "v0.3.2\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    bin_name = "roster",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Customer records with short, always-contiguous ids", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory [default: $ROSTER_DATA, else the OS data directory]
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Skip the query cache for this run
    #[arg(long, global = true, help_heading = "Options")]
    pub no_cache: bool,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help_heading = "Options"
    )]
    pub output: OutputFormat,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a customer
    Add {
        firstname: String,
        lastname: String,

        /// Email address
        #[arg(short, long)]
        email: Option<String>,

        /// Phone number
        #[arg(short, long)]
        phone: Option<String>,
    },

    /// List all customers (default)
    #[command(alias = "ls")]
    List,

    /// Find customers by first or last name
    #[command(alias = "search")]
    Find {
        /// Part of a first or last name, case-insensitive
        term: String,
    },

    /// Change one field of a customer
    Update {
        /// Customer id as shown by `list`
        id: String,

        /// firstname, lastname, email or phone
        field: String,

        value: String,
    },

    /// Delete a customer and renumber the rest
    #[command(alias = "rm")]
    Delete {
        /// Customer id, email, or part of a name matching exactly one customer
        selector: String,
    },

    /// Renumber every customer id
    Resequence,

    /// Replace all customers with sample data
    Seed {
        /// Confirm that existing customers are removed
        #[arg(long)]
        yes: bool,
    },

    /// Create the data directory
    Init,

    /// Show configuration
    Config {
        /// Print a commented sample roster.toml instead
        #[arg(long)]
        template: bool,
    },
}
