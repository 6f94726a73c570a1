//! Where lesson-editor keeps its files on disk
//!
//! Everything lives under:
//! - Unix/macOS: `~/.config/lesson-editor/`
//! - Windows: `%APPDATA%\lesson-editor\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "lesson-editor";

/// Base config directory
///
/// Unix/macOS: `$XDG_CONFIG_HOME/lesson-editor` when set, otherwise
/// `~/.config/lesson-editor`. Windows: `%APPDATA%\lesson-editor`.
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

/// `~/.config/lesson-editor/themes/`
pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("themes"))
}

/// `~/.config/lesson-editor/surface.yaml`, the surface config the CLI falls
/// back to when no `--config` is given
pub fn default_surface_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("surface.yaml"))
}

/// `~/.config/lesson-editor/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}
