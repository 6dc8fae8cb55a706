//! Diagnostic logging to stderr.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::env_vars;

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber filtered by `CRYPTO_TOOLS_LOG`.
///
/// stdout stays reserved for primary output (PEM text, completions).
pub fn init() {
    let filter =
        EnvFilter::try_from_env(env_vars::LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
