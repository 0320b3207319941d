//! `tracing` subscriber for the CLI.
//!
//! Log lines go to stderr so they never mix with table or JSON output on stdout.
//! The filter comes from `ROSTER_LOG` (same syntax as `RUST_LOG`) and defaults to
//! `warn`; `--verbose` lowers it to `debug`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "ROSTER_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(default_directive(true));
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(false)))
}

pub fn init_logging(verbose: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr);

    // A second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(fmt_layer)
        .try_init();
}
