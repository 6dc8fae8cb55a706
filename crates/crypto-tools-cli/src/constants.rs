//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: Any detected failure (policy violation, rejected input, I/O)
/// - 2: Misuse of shell command (clap argument errors)
pub mod exit_codes {
    /// Every failure the tools detect themselves.
    pub const FAILURE: i32 = 1;
}

/// Environment variables read by the CLI.
pub mod env_vars {
    /// Passphrase for `generate-private-key` when no terminal is available.
    pub const PASSPHRASE: &str = "CRYPTO_TOOLS_PASSPHRASE";

    /// Path of the display program used by `show-file`.
    pub const OPENSSL: &str = "CRYPTO_TOOLS_OPENSSL";

    /// Explicit config file location.
    pub const CONFIG: &str = "CRYPTO_TOOLS_CONFIG";

    /// Log filter directives (`tracing_subscriber::EnvFilter` syntax).
    pub const LOG: &str = "CRYPTO_TOOLS_LOG";
}
