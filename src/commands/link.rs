//! The `dotfiles-link` command: resolve options, validate, walk, summarize.
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::cli::Cli;
use crate::config::{self, LinkConfig};
use crate::error::{ConfigError, SetupError};
use crate::logging::{Log, Logger};
use crate::platform;
use crate::walker::Linker;

/// Fully resolved settings for one linking run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOptions {
    /// Absolute source directory.
    pub src_dir: PathBuf,
    /// Absolute destination directory.
    pub dst_dir: PathBuf,
    /// Subdir marker file name.
    pub marker: String,
    /// Visit entries in sorted order.
    pub sort_entries: bool,
    /// Stream each result as it is produced.
    pub progress: bool,
}

impl LinkOptions {
    /// Resolve options from the command line, the config file and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a default needs the home directory and none is
    /// set, if the config file cannot be loaded, or if a marker is invalid.
    pub fn resolve(cli: &Cli) -> Result<Self, SetupError> {
        let home = platform::home_dir();
        Self::resolve_with(cli, home.as_deref(), platform::dotfiles_root)
    }

    /// [`resolve`](Self::resolve) with the home directory and dotfiles root
    /// lookup supplied by the caller.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_with(
        cli: &Cli,
        home: Option<&Path>,
        dotfiles_root: impl FnOnce(&str) -> Option<PathBuf>,
    ) -> Result<Self, SetupError> {
        let require_home = || {
            home.ok_or_else(|| SetupError::HomeNotFound("HOME is not set".to_string()))
        };

        let config = match (&cli.config, home) {
            (Some(path), _) if !path.exists() => {
                return Err(ConfigError::Io {
                    path: path.clone(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }
                .into());
            }
            (Some(path), _) => LinkConfig::load(path)?,
            (None, Some(home)) => LinkConfig::load(&config::default_path(home))?,
            (None, None) => LinkConfig::default(),
        };

        let marker = match &cli.marker {
            Some(marker) => {
                config::validate_marker(marker)?;
                marker.clone()
            }
            None => config.marker,
        };

        let src_dir = match &cli.src_dir {
            Some(dir) => dir.clone(),
            None => {
                let home = require_home()?;
                let user = platform::username(home).ok_or_else(|| {
                    SetupError::HomeNotFound(format!(
                        "no username in home directory {}",
                        home.display()
                    ))
                })?;
                dotfiles_root(&user).unwrap_or_default().join(user)
            }
        };

        let dst_dir = match &cli.dst_dir {
            Some(dir) => dir.clone(),
            None => require_home()?.to_path_buf(),
        };

        Ok(Self {
            src_dir: std::path::absolute(&src_dir).map_err(SetupError::CurrentDir)?,
            dst_dir: std::path::absolute(&dst_dir).map_err(SetupError::CurrentDir)?,
            marker,
            sort_entries: config.sort_entries,
            progress: cli.progress || config.progress,
        })
    }

    /// One error per directory argument that is not an existing directory.
    #[must_use]
    pub fn missing_dirs(&self) -> Vec<SetupError> {
        [("--src-dir", &self.src_dir), ("--dst-dir", &self.dst_dir)]
            .into_iter()
            .filter(|(_, path)| !path.is_dir())
            .map(|(flag, path)| SetupError::MissingDirectory {
                flag,
                path: path.clone(),
            })
            .collect()
    }
}

/// Run the link command.
///
/// Returns [`ExitCode::FAILURE`] after reporting each missing directory,
/// otherwise links the tree, prints the summary and returns success.
///
/// # Errors
///
/// Returns an error if the options cannot be resolved.
pub fn run(cli: &Cli, log: &Logger) -> Result<ExitCode> {
    let opts = LinkOptions::resolve(cli).context("resolving link options")?;
    log.debug(&format!("os: {}", platform::Os::detect()));
    log.debug(&format!("src dir: {}", opts.src_dir.display()));
    log.debug(&format!("dst dir: {}", opts.dst_dir.display()));
    log.debug(&format!("marker: {}", opts.marker));

    let missing = opts.missing_dirs();
    if !missing.is_empty() {
        for err in &missing {
            log.error(&err.to_string());
        }
        return Ok(ExitCode::FAILURE);
    }

    let mut linker = Linker::new(&opts.src_dir, &opts.dst_dir)
        .with_marker(&opts.marker)
        .with_sorted_entries(opts.sort_entries);
    if opts.progress {
        linker = linker.with_progress(log as &dyn Log);
    }

    let results = linker.run();
    if opts.progress {
        println!();
    }
    println!("{}", results.summary());

    if let Some(path) = log.log_path() {
        log.debug(&format!("log written to {}", path.display()));
    }
    Ok(ExitCode::SUCCESS)
}
