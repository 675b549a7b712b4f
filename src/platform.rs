//! Platform-dependent defaults: home directory, username, dotfiles root.
use std::fmt;
use std::path::{Path, PathBuf};

/// Detected operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    /// Linux, macOS and other Unix-like systems.
    Unix,
    /// Windows.
    Windows,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl Os {
    /// The OS this binary was built for.
    #[must_use]
    pub const fn detect() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }

    /// Environment variables holding the home directory, in lookup order.
    #[must_use]
    pub const fn home_vars(self) -> &'static [&'static str] {
        match self {
            Self::Unix => &["HOME"],
            Self::Windows => &["USERPROFILE", "HOME"],
        }
    }
}

/// The current user's home directory, or `None` if no home variable is set.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    home_dir_from(Os::detect(), |name| std::env::var_os(name))
}

fn home_dir_from(
    os: Os,
    lookup: impl Fn(&str) -> Option<std::ffi::OsString>,
) -> Option<PathBuf> {
    os.home_vars()
        .iter()
        .find_map(|name| lookup(name).filter(|v| !v.is_empty()))
        .map(PathBuf::from)
}

/// Guess the username from the last component of the home directory.
#[must_use]
pub fn username(home: &Path) -> Option<String> {
    home.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// Locate the dotfiles repository root that holds one directory per user.
///
/// Checked in order: `DOTFILES_ROOT`, the directory containing the
/// executable (and the repository root above `target/<profile>/` when run
/// from a cargo build), then the current directory.  The first candidate
/// that contains a directory named `user` wins; without a match the
/// executable's directory is returned so the caller reports a clear
/// "does not exist" error for the derived path.
#[must_use]
pub fn dotfiles_root(user: &str) -> Option<PathBuf> {
    if let Some(root) = std::env::var_os("DOTFILES_ROOT").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(root));
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    let mut candidates = Vec::new();
    if let Some(dir) = &exe_dir {
        candidates.push(dir.clone());
        if let Some(repo) = dir.parent().and_then(Path::parent) {
            candidates.push(repo.to_path_buf());
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }

    candidates
        .iter()
        .find(|c| c.join(user).is_dir())
        .cloned()
        .or(exe_dir)
}
