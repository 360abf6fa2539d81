use std::env;

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber: JSON lines in production, human-readable otherwise.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let production = env::var("APP_ENV")
        .map(|v| v.eq_ignore_ascii_case("production"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // A subscriber may already be set (tests, embedding); keep it.
    let _ = if production {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
