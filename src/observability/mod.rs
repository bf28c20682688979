//! Logging setup for the command-line binary.
//!
//! Library code emits `tracing` events (and `log` records from the config
//! loader, bridged by the subscriber). Logs go to stderr so report output on
//! stdout stays machine-readable.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Default level for a `-v` count: warn, info, debug, then trace.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the verbosity flag.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbosity).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
