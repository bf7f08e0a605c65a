//! Centralized path definitions for lichen
//!
//! ```text
//! ~/.config/lichen/
//! └── config.toml               # Tool binary, timeout, child environment
//! ```
//!
//! `LICHEN_CONFIG` overrides the config file location.

use std::path::PathBuf;

/// Application directory name under the user config dir
const APP_DIR: &str = "lichen";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "LICHEN_CONFIG";

/// Get the user-level config directory (`~/.config/lichen`)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get the config file path, honoring `LICHEN_CONFIG`
#[must_use]
pub fn global_config() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|p| !p.is_empty())
        .map_or_else(|| global_config_dir().join(CONFIG_FILE), PathBuf::from)
}
