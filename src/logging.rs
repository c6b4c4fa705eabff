//! Tracing subscriber setup for the `epc` binary.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map `-v`/`-q` flags to a level: info by default, debug with `-v`, trace
/// with `-vv`, errors only with `-q`.
pub fn level_from_flags(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr fmt layer. A subscriber installed earlier (tests) is kept.
pub fn init(level: LevelFilter) {
    // Dependencies stay at warn; our own crate follows the requested level.
    let directives = format!("warn,{}={level}", env!("CARGO_CRATE_NAME"));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(directives));

    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
