//! XDG-style path utilities for the configuration directory.
//!
//! Prefers the XDG Base Directory convention over OS-specific locations,
//! so the config lives in the same place on Linux and macOS.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for bavard.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/bavard` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/bavard` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join("bavard"));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join("bavard"))
}
