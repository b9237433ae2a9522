//! Log setup for the `animals-web` binary.
//!
//! Logs go to stderr. Stdout carries only the `Enter animal name: ` prompt and
//! the final "generated" line, so a caller can pipe or script the tool without
//! log noise mixed in.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn filter(verbose: bool) -> EnvFilter {
    let directive = if verbose {
        "animals_web=debug,info"
    } else {
        "animals_web=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Human readable logs for interactive runs.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

/// One JSON object per event for scripted runs (`--log-json`), e.g. a cron job
/// regenerating the page and shipping stderr to a log collector.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .json()
                .with_current_span(false)
                .flatten_event(true),
        )
        .init();
}

