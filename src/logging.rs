//! `tracing` setup shared by the binaries. Log lines go to stderr so stdout
//! stays reserved for what the host application reads.
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins when set; otherwise `debug`
/// with `verbose`, else `default_level`. Calling it twice is harmless.
pub fn init(verbose: bool, default_level: &str) {
    let fallback = if verbose { "debug" } else { default_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
