//! Tree walker: mirror a dotfiles source tree into a destination with symlinks.
//!
//! At every source directory the walker first makes sure the matching
//! destination directory exists, then visits each entry:
//!
//! - a real directory **without** the subdir marker is a nested collection:
//!   it is materialized at the destination and its entries are visited in
//!   turn;
//! - anything else (a file, a symlink, or a directory that **contains** the
//!   marker) is a leaf and becomes a single symlink.
//!
//! Symlinked directories in the source are leaves, so the walk never
//! follows a link and cannot loop.  Traversal uses an explicit work-list
//! instead of native recursion; results come out in the same depth-first
//! pre-order a recursive walk would produce.
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::logging::Log;
use crate::operations::{FileSystemOps, SystemFileSystemOps};
use crate::report::ResultLog;
use crate::resources::{LinkResult, subdir, symlink};

/// Default name of the subdir marker file.
pub const DEFAULT_SUBDIR_MARKER: &str = ".dotfiles-subdir";

static SYSTEM_FS: SystemFileSystemOps = SystemFileSystemOps;

/// A configured linking run from one source tree into one destination.
///
/// # Examples
///
/// ```no_run
/// use dotfiles_link::walker::Linker;
///
/// let log = Linker::new("/home/user/dotfiles/user", "/home/user").run();
/// println!("{}", log.summary());
/// ```
pub struct Linker<'a> {
    src_dir: PathBuf,
    dst_dir: PathBuf,
    marker: OsString,
    sort_entries: bool,
    progress: Option<&'a dyn Log>,
    fs: &'a dyn FileSystemOps,
}

impl fmt::Debug for Linker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Linker")
            .field("src_dir", &self.src_dir)
            .field("dst_dir", &self.dst_dir)
            .field("marker", &self.marker)
            .field("sort_entries", &self.sort_entries)
            .field("progress", &self.progress.map(|_| "<dyn Log>"))
            .field("fs", &self.fs)
            .finish()
    }
}

/// One directory whose entries are still being visited.
struct Frame {
    src_dir: PathBuf,
    dst_dir: PathBuf,
    names: std::vec::IntoIter<OsString>,
}

impl<'a> Linker<'a> {
    /// Create a run linking the contents of `src_dir` into `dst_dir`, with
    /// the default marker, sorted entries, no progress output, and the real
    /// filesystem.
    #[must_use]
    pub fn new(src_dir: impl Into<PathBuf>, dst_dir: impl Into<PathBuf>) -> Self {
        Self {
            src_dir: src_dir.into(),
            dst_dir: dst_dir.into(),
            marker: OsString::from(DEFAULT_SUBDIR_MARKER),
            sort_entries: true,
            progress: None,
            fs: &SYSTEM_FS,
        }
    }

    /// Use `marker` as the subdir marker file name.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<OsString>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Visit entries sorted by name (`true`) or in directory-listing order.
    #[must_use]
    pub const fn with_sorted_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Stream a progress line to `log` as each result is produced.
    #[must_use]
    pub fn with_progress(mut self, log: &'a dyn Log) -> Self {
        self.progress = Some(log);
        self
    }

    /// Perform filesystem work through `fs`.
    #[must_use]
    pub fn with_fs_ops(mut self, fs: &'a dyn FileSystemOps) -> Self {
        self.fs = fs;
        self
    }

    /// The source directory.
    #[must_use]
    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    /// The destination directory.
    #[must_use]
    pub fn dst_dir(&self) -> &Path {
        &self.dst_dir
    }

    /// Walk the whole tree once and return every result in order.
    ///
    /// Never fails: per-entry problems are recorded in the log and the walk
    /// moves on to the next entry.
    #[must_use]
    pub fn run(&self) -> ResultLog {
        let mut log = ResultLog::new();
        let mut pending: Vec<Frame> = Vec::new();

        if let Some(root) = self.enter(self.src_dir.clone(), self.dst_dir.clone(), &mut log) {
            pending.push(root);
        }

        while let Some(frame) = pending.last_mut() {
            let Some(name) = frame.names.next() else {
                pending.pop();
                continue;
            };
            let src_path = frame.src_dir.join(&name);
            let dst_path = frame.dst_dir.join(&name);

            if self.is_nested_collection(&src_path) {
                if let Some(child) = self.enter(src_path, dst_path, &mut log) {
                    pending.push(child);
                }
            } else {
                let result = symlink::link(self.fs, &src_path, &dst_path);
                self.record(&mut log, result);
            }
        }

        log
    }

    /// Materialize `dst_dir` and list the entries of `src_dir` to visit.
    ///
    /// Children are visited even when the destination could not be
    /// materialized; their own failures are recorded individually.
    fn enter(&self, src_dir: PathBuf, dst_dir: PathBuf, log: &mut ResultLog) -> Option<Frame> {
        let result = subdir::materialize(self.fs, &dst_dir);
        self.record(log, result);

        let mut names = match self.fs.read_dir_names(&src_dir) {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!("cannot list {}: {e}", src_dir.display());
                return None;
            }
        };
        names.retain(|name| *name != self.marker);
        if self.sort_entries {
            names.sort();
        }

        Some(Frame {
            src_dir,
            dst_dir,
            names: names.into_iter(),
        })
    }

    /// A real (non-symlink) directory without the marker is walked into;
    /// everything else is linked as a unit.
    fn is_nested_collection(&self, src_path: &Path) -> bool {
        let is_real_dir = self
            .fs
            .symlink_metadata(src_path)
            .map(|m| m.is_dir())
            .unwrap_or(false);
        is_real_dir && self.fs.symlink_metadata(&src_path.join(&self.marker)).is_err()
    }

    fn record(&self, log: &mut ResultLog, result: LinkResult) {
        tracing::debug!("{}", result.progress_line());
        if let Some(progress) = self.progress {
            progress.progress(&result.progress_line());
        }
        log.push(result);
    }
}

/// Link `src_dir` into `dst_dir` with default settings and return the log.
#[must_use]
pub fn run(src_dir: &Path, dst_dir: &Path) -> ResultLog {
    Linker::new(src_dir, dst_dir).run()
}
