//! Idempotent link primitives and the classified result they produce.
//!
//! Every primitive in this module reports its outcome as a [`LinkResult`]
//! instead of an error: expected filesystem failures are part of the result
//! model, not exceptional control flow.
pub mod helpers;
pub mod subdir;
pub mod symlink;

use std::fmt;
use std::path::{Path, PathBuf};

/// Reason recorded when a non-directory occupies a destination directory path.
pub const REASON_OCCUPIED: &str = "something already exists here";

/// Reason recorded when a link path holds a file with different content.
pub const REASON_DIFFERENT: &str = "a different file already exists";

/// Reason recorded when a link path holds a file with identical content.
pub const REASON_IDENTICAL: &str = "an identical file already exists";

/// The closed set of result kinds a run can produce.
///
/// # Examples
///
/// ```
/// use dotfiles_link::resources::ResultKind;
///
/// assert_eq!(ResultKind::LinkCreated.as_str(), "link.created");
/// assert_eq!(ResultKind::SubdirNotCreated.heading(), "Subdirs not created");
/// assert!(ResultKind::LinkExists.is_noop());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResultKind {
    /// A destination directory was created.
    SubdirCreated,
    /// A destination directory already existed.
    SubdirExists,
    /// A destination directory could not be created.
    SubdirNotCreated,
    /// A symlink was created.
    LinkCreated,
    /// The correct symlink was already in place.
    LinkExists,
    /// A symlink could not be created.
    LinkNotCreated,
}

impl ResultKind {
    /// All kinds in the order the summary lists them.
    pub const ALL: [Self; 6] = [
        Self::SubdirCreated,
        Self::SubdirExists,
        Self::SubdirNotCreated,
        Self::LinkCreated,
        Self::LinkExists,
        Self::LinkNotCreated,
    ];

    /// Width of the longest kind name, used to align progress output.
    pub const MAX_WIDTH: usize = 18;

    /// Dotted machine-readable name, e.g. `subdir.not-created`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SubdirCreated => "subdir.created",
            Self::SubdirExists => "subdir.exists",
            Self::SubdirNotCreated => "subdir.not-created",
            Self::LinkCreated => "link.created",
            Self::LinkExists => "link.exists",
            Self::LinkNotCreated => "link.not-created",
        }
    }

    /// Heading used for this kind in the run summary.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::SubdirCreated => "Subdirs created",
            Self::SubdirExists => "Subdirs already created",
            Self::SubdirNotCreated => "Subdirs not created",
            Self::LinkCreated => "Links created",
            Self::LinkExists => "Links already created",
            Self::LinkNotCreated => "Links not created",
        }
    }

    /// `true` for the kinds that leave the filesystem untouched because the
    /// desired state was already in place.
    #[must_use]
    pub const fn is_noop(self) -> bool {
        matches!(self, Self::SubdirExists | Self::LinkExists)
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// What happened at a single destination path.
///
/// Only the `*NotCreated` variants carry a reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The destination directory was created.
    SubdirCreated,
    /// The destination directory already existed.
    SubdirExists,
    /// The destination directory could not be created.
    SubdirNotCreated {
        /// Why the directory was not created.
        reason: String,
    },
    /// The symlink was created.
    LinkCreated,
    /// The symlink already pointed at the right target.
    LinkExists,
    /// The symlink could not be created.
    LinkNotCreated {
        /// Why the link was not created.
        reason: String,
    },
}

impl Outcome {
    /// The kind of this outcome.
    #[must_use]
    pub const fn kind(&self) -> ResultKind {
        match self {
            Self::SubdirCreated => ResultKind::SubdirCreated,
            Self::SubdirExists => ResultKind::SubdirExists,
            Self::SubdirNotCreated { .. } => ResultKind::SubdirNotCreated,
            Self::LinkCreated => ResultKind::LinkCreated,
            Self::LinkExists => ResultKind::LinkExists,
            Self::LinkNotCreated { .. } => ResultKind::LinkNotCreated,
        }
    }

    /// The reason attached to a `*NotCreated` outcome.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::SubdirNotCreated { reason } | Self::LinkNotCreated { reason } => Some(reason),
            _ => None,
        }
    }
}

/// The outcome of one link attempt or one directory materialization.
///
/// # Examples
///
/// ```
/// use dotfiles_link::resources::{LinkResult, Outcome, ResultKind};
///
/// let result = LinkResult::new(
///     "/home/user/.bashrc",
///     Outcome::LinkNotCreated { reason: "a different file already exists".into() },
/// );
/// assert_eq!(result.kind(), ResultKind::LinkNotCreated);
/// assert_eq!(
///     result.summary_line(),
///     "  /home/user/.bashrc (a different file already exists)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResult {
    /// The destination path the outcome applies to.
    pub path: PathBuf,
    /// What happened at `path`.
    pub outcome: Outcome,
}

impl LinkResult {
    /// Create a result for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, outcome: Outcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }

    /// The kind of this result.
    #[must_use]
    pub const fn kind(&self) -> ResultKind {
        self.outcome.kind()
    }

    /// The reason for a `*.not-created` result.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.outcome.reason()
    }

    /// The destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// One progress line: the kind padded to [`ResultKind::MAX_WIDTH`], then
    /// the path and any reason.
    #[must_use]
    pub fn progress_line(&self) -> String {
        let head = format!(
            "{:<width$} {}",
            self.kind(),
            self.path.display(),
            width = ResultKind::MAX_WIDTH
        );
        self.with_reason(head)
    }

    /// One indented line as listed under a summary heading.
    #[must_use]
    pub fn summary_line(&self) -> String {
        self.with_reason(format!("  {}", self.path.display()))
    }

    fn with_reason(&self, line: String) -> String {
        match self.reason() {
            Some(reason) => format!("{line} ({reason})"),
            None => line,
        }
    }
}
