//! Optional `link.toml` configuration.
pub mod toml_loader;

use serde::Deserialize;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::error::ConfigError;
use crate::walker::DEFAULT_SUBDIR_MARKER;

/// Settings read from `link.toml`.
///
/// Every key is optional; an absent file is the same as an empty one.
///
/// ```toml
/// marker = ".dotfiles-subdir"
/// sort_entries = true
/// progress = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkConfig {
    /// Name of the subdir marker file.
    pub marker: String,
    /// Visit directory entries in sorted order.
    pub sort_entries: bool,
    /// Stream results while linking, as if `--progress` were given.
    pub progress: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_SUBDIR_MARKER.to_string(),
            sort_entries: true,
            progress: false,
        }
    }
}

impl LinkConfig {
    /// Load and validate the config at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it
    /// holds an invalid marker.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml_loader::load_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that `marker` is a single, plain file name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMarker`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_marker(&self.marker)
    }
}

/// Check that `marker` names a file directly inside a directory: non-empty,
/// no separators, not `.` or `..`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidMarker`] if it does not.
pub fn validate_marker(marker: &str) -> Result<(), ConfigError> {
    let mut components = Path::new(marker).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == OsStr::new(marker) => Ok(()),
        _ => Err(ConfigError::InvalidMarker(marker.to_string())),
    }
}

/// Default config location: `$XDG_CONFIG_HOME/dotfiles/link.toml`, falling
/// back to `<home>/.config/dotfiles/link.toml`.
#[must_use]
pub fn default_path(home: &Path) -> PathBuf {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map_or_else(|| home.join(".config"), PathBuf::from)
        .join("dotfiles")
        .join("link.toml")
}
