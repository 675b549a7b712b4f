// Shared helpers for integration tests.
//
// Provides a temporary source/destination pair and a fluent builder so each
// integration test can lay out a dotfiles tree without repeating filesystem
// boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::ffi::OsString;
use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};

use dotfiles_link::operations::{FileSystemOps, SystemFileSystemOps};

/// An isolated source tree and destination directory backed by a
/// [`tempfile::TempDir`].
pub struct LinkTestContext {
    /// Temporary directory holding both trees.
    pub root: tempfile::TempDir,
}

impl LinkTestContext {
    /// Create empty `src/` and `dst/` directories.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir(root.path().join("src")).expect("create src dir");
        std::fs::create_dir(root.path().join("dst")).expect("create dst dir");
        Self { root }
    }

    /// The source tree root.
    pub fn src(&self) -> PathBuf {
        self.root.path().join("src")
    }

    /// The destination root.
    pub fn dst(&self) -> PathBuf {
        self.root.path().join("dst")
    }

    /// Returns `true` if `dst/<rel>` is a symlink whose target is `src/<rel>`.
    pub fn is_linked(&self, rel: &str) -> bool {
        std::fs::read_link(self.dst().join(rel)).is_ok_and(|t| t == self.src().join(rel))
    }

    /// Returns `true` if `dst/<rel>` is a real directory, not a symlink.
    pub fn is_real_dir(&self, rel: &str) -> bool {
        std::fs::symlink_metadata(self.dst().join(rel)).is_ok_and(|m| m.is_dir())
    }
}

/// Fluent builder for [`LinkTestContext`].
pub struct LinkTreeBuilder {
    ctx: LinkTestContext,
}

impl LinkTreeBuilder {
    /// Begin with empty source and destination directories.
    pub fn new() -> Self {
        Self {
            ctx: LinkTestContext::new(),
        }
    }

    /// Write `src/<rel>` with `content`, creating parent directories.
    pub fn with_source_file(self, rel: &str, content: &str) -> Self {
        write_file(&self.ctx.src().join(rel), content);
        self
    }

    /// Create the directory `src/<rel>`.
    pub fn with_source_dir(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.ctx.src().join(rel)).expect("create source dir");
        self
    }

    /// Mark `src/<rel>` to be linked as a whole.
    pub fn with_marker(self, rel: &str) -> Self {
        write_file(&self.ctx.src().join(rel).join(".dotfiles-subdir"), "");
        self
    }

    /// Write `dst/<rel>` with `content`, creating parent directories.
    pub fn with_dest_file(self, rel: &str, content: &str) -> Self {
        write_file(&self.ctx.dst().join(rel), content);
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> LinkTestContext {
        self.ctx
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write file");
}

/// [`FileSystemOps`] over the real filesystem that refuses to create a
/// symlink at one chosen path.
#[derive(Debug)]
pub struct RefuseLinkAt {
    path: PathBuf,
}

impl RefuseLinkAt {
    /// Fail `symlink` calls whose link path equals `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FileSystemOps for RefuseLinkAt {
    fn symlink_metadata(&self, path: &Path) -> io::Result<Metadata> {
        SystemFileSystemOps.symlink_metadata(path)
    }

    fn exists(&self, path: &Path) -> bool {
        SystemFileSystemOps.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        SystemFileSystemOps.is_dir(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        SystemFileSystemOps.canonicalize(path)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        SystemFileSystemOps.read_link(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        SystemFileSystemOps.create_dir(path)
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        if link == self.path {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        SystemFileSystemOps.symlink(target, link)
    }

    fn read_dir_names(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        SystemFileSystemOps.read_dir_names(dir)
    }

    fn files_identical(&self, a: &Path, b: &Path) -> bool {
        SystemFileSystemOps.files_identical(a, b)
    }
}
