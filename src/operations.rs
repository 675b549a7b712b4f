//! Filesystem operation abstractions for dependency injection.
//!
//! Provides the [`FileSystemOps`] trait so that the link primitives and the
//! tree walker can be tested with injected failures.  Production code uses
//! [`SystemFileSystemOps`].

use std::ffi::OsString;
use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};

/// Abstraction over the filesystem calls made while linking.
pub trait FileSystemOps: Send + Sync + std::fmt::Debug {
    /// Metadata of `path` itself, without following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing exists at `path` or it cannot be queried.
    fn symlink_metadata(&self, path: &Path) -> io::Result<Metadata>;

    /// Returns `true` if `path` resolves (following symlinks) to an existing entry.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if `path` resolves (following symlinks) to a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Fully resolve `path`, following every symlink.
    ///
    /// # Errors
    ///
    /// Returns an error if any component does not exist.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// The stored target of the symlink at `path`, unresolved.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not a symlink.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Create a single directory (parents must exist).
    ///
    /// # Errors
    ///
    /// Returns the OS error unchanged, e.g. `AlreadyExists` or `PermissionDenied`.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Create a symlink at `link` pointing to `target`.
    ///
    /// # Errors
    ///
    /// Returns the OS error unchanged; `AlreadyExists` signals an occupied path.
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()>;

    /// File names of the immediate children of `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be opened or read as a directory.
    fn read_dir_names(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    /// Returns `true` if both paths are readable regular files (after
    /// following symlinks) with byte-for-byte equal content.
    fn files_identical(&self, a: &Path, b: &Path) -> bool;
}

/// Production [`FileSystemOps`] implementation that delegates to [`std::fs`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFileSystemOps;

impl FileSystemOps for SystemFileSystemOps {
    fn symlink_metadata(&self, path: &Path) -> io::Result<Metadata> {
        std::fs::symlink_metadata(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        dunce::canonicalize(path)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::read_link(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        create_symlink(target, link)
    }

    fn read_dir_names(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }

    fn files_identical(&self, a: &Path, b: &Path) -> bool {
        crate::resources::helpers::fs::files_identical(a, b)
    }
}

/// Create a symlink at `link` pointing to `target`.
#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

/// Create a symlink at `link` pointing to `target`.
///
/// Windows distinguishes file and directory links; the kind is chosen from
/// what `target` currently resolves to.
#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}
