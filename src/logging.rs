//! Logger setup for the command-line binary.

use log::LevelFilter;

/// Maps the `-v` count to a log level.
///
/// No flag shows warnings only; each `-v` adds one level up to trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs `env_logger` writing to stderr.
///
/// `RUST_LOG` overrides the level picked from `verbose`. Calling this more
/// than once keeps the first logger.
pub fn init(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false);

    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
