//! Centralized configuration paths for tokenbridge
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/tokenbridge/`
//! - Windows: `%APPDATA%\tokenbridge\`

use std::{env, fs, path::PathBuf};

use anyhow::Context;

const APP_DIR: &str = "tokenbridge";

/// Base name of the rotating log file
pub const LOG_FILE_NAME: &str = "tokenbridge.log";

/// Base config directory for tokenbridge
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/tokenbridge`
///   - Else: `~/.config/tokenbridge`
///
/// Windows:
///   - `%APPDATA%\tokenbridge`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/tokenbridge/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/tokenbridge/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs dir (and the config dir above it) if missing, returning it
pub fn ensure_logs_dir() -> anyhow::Result<PathBuf> {
    let logs = logs_dir().context("No config directory available")?;
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create directory {}", logs.display()))?;
    Ok(logs)
}
