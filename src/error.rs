//! Domain-specific error types for the linker's entry point.
//!
//! The linking core never fails; every per-entry problem becomes a
//! [`LinkResult`](crate::resources::LinkResult).  The errors here cover
//! what can go wrong *before* a run starts: resolving directories and
//! loading configuration.  Command handlers convert them to
//! [`anyhow::Error`] via `?`.
//!
//! # Error hierarchy
//!
//! ```text
//! SetupError
//! ├── MissingDirectory     --src-dir / --dst-dir is not an existing directory
//! ├── HomeNotFound         no HOME / USERPROFILE to derive defaults from
//! ├── CurrentDir           the working directory cannot be determined
//! └── Config(ConfigError)  reading or validating link.toml
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent a linking run from starting.
#[derive(Error, Debug)]
pub enum SetupError {
    /// A directory argument does not name an existing directory.
    #[error("The {flag} directory {} does not exist.", .path.display())]
    MissingDirectory {
        /// The command-line flag the directory came from.
        flag: &'static str,
        /// The resolved absolute path.
        path: PathBuf,
    },

    /// The home directory could not be determined.
    #[error("cannot determine home directory: {0}")]
    HomeNotFound(String),

    /// The current working directory could not be read.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that arise from loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("IO error reading config file {}: {source}", .path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the expected schema.
    #[error("Invalid TOML in {}: {message}", .path.display())]
    InvalidSyntax {
        /// Path to the offending file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The marker name is not a single, non-empty file name.
    #[error("Invalid subdir marker '{0}': must be a single file name")]
    InvalidMarker(String),
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_directory_display() {
        let e = SetupError::MissingDirectory {
            flag: "--src-dir",
            path: PathBuf::from("/home/u/dotfiles/u"),
        };
        assert_eq!(
            e.to_string(),
            "The --src-dir directory /home/u/dotfiles/u does not exist."
        );
    }

    #[test]
    fn home_not_found_display() {
        let e = SetupError::HomeNotFound("HOME is not set".to_string());
        assert_eq!(e.to_string(), "cannot determine home directory: HOME is not set");
    }

    #[test]
    fn config_error_io_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::Io {
            path: PathBuf::from("/conf/link.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.to_string().contains("/conf/link.toml"));
        assert!(e.source().is_some());
    }

    #[test]
    fn invalid_marker_display() {
        let e = ConfigError::InvalidMarker("a/b".to_string());
        assert_eq!(
            e.to_string(),
            "Invalid subdir marker 'a/b': must be a single file name"
        );
    }

    #[test]
    fn setup_error_from_config_error() {
        let e: SetupError = ConfigError::InvalidMarker(String::new()).into();
        assert!(e.to_string().starts_with("Configuration error"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<SetupError>();
        assert_send_sync::<ConfigError>();
    }

    #[test]
    fn setup_error_converts_to_anyhow() {
        let e = SetupError::HomeNotFound("x".to_string());
        let _anyhow_err: anyhow::Error = e.into();
    }
}
