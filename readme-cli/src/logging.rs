//! Log subscriber setup for the `generate-readme` binary.

use readme_core::Verbosity;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr `fmt` subscriber.
///
/// `-v` / `-vv` pick the level outright. Without either, `RUST_LOG` is
/// honoured and the fallback is `warn`.
pub fn init_tracing(verbosity: Verbosity) {
    let directive = verbosity.filter_directive();
    let filter = match verbosity {
        Verbosity::Quiet => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
        }
        Verbosity::Info | Verbosity::Debug => EnvFilter::new(directive),
    };
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
