//! Optional TOML configuration shared by both tools.
//!
//! ```toml
//! [keygen]
//! key_length = 4096
//!
//! [show]
//! openssl = "/usr/bin/openssl"
//! ```
//!
//! A missing file means defaults. Command-line flags and environment variables
//! take precedence over anything set here.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::env_vars;

#[derive(Debug, Default, Deserialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub keygen: KeygenSection,
    #[serde(default)]
    pub show: ShowSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct KeygenSection {
    /// Default key length in bits; still subject to the 2048-bit floor.
    pub key_length: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ShowSection {
    /// Display program, `openssl` on PATH when unset.
    pub openssl: Option<String>,
}

/// Default config location under the XDG config directory.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_config_dir().map(|dir| dir.join("config.toml"))
}

pub fn xdg_config_dir() -> Option<PathBuf> {
    if let Some(value) = non_empty_env("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(value).join("crypto-tools"));
    }
    non_empty_env("HOME").map(|home| PathBuf::from(home).join(".config").join("crypto-tools"))
}

/// Load `$CRYPTO_TOOLS_CONFIG`, or the default location if a file is there.
pub fn load_config() -> anyhow::Result<ToolsConfig> {
    let explicit = non_empty_env(env_vars::CONFIG).map(PathBuf::from);
    load_config_from(explicit.as_deref(), default_config_path().as_deref())
}

/// An explicit path must exist; the default one may be absent.
fn load_config_from(
    explicit: Option<&Path>,
    default: Option<&Path>,
) -> anyhow::Result<ToolsConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    match default {
        Some(path) if path.exists() => read_config(path),
        _ => Ok(ToolsConfig::default()),
    }
}

pub fn read_config(path: &Path) -> anyhow::Result<ToolsConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn parse_config(contents: &str) -> Result<ToolsConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub(crate) fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
