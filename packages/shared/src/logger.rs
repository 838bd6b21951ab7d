//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Without it, `default_level` is applied to the
/// given binary and to `tower_http`, and everything else logs at `warn`.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    // Ignore the error: a subscriber may already be installed (e.g. in tests)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}

/// Build the filter directives used when `RUST_LOG` is not set.
fn default_directives(bin_name: &str, default_level: &str) -> String {
    let crate_name = bin_name.replace('-', "_");
    format!("warn,{crate_name}={default_level},tower_http={default_level}")
}
