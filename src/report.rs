//! The per-run result log and its human-readable summary.
use std::collections::BTreeMap;

use crate::resources::{LinkResult, REASON_DIFFERENT, ResultKind};

/// Summary shown when a run changed nothing and hit no failures.
pub const NOTHING_CHANGED: &str = "Everything is linked. No changes made.";

/// Append-only, ordered record of every result produced by one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultLog {
    results: Vec<LinkResult>,
}

impl ResultLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Append a result.
    pub fn push(&mut self, result: LinkResult) {
        self.results.push(result);
    }

    /// Iterate over results in the order they were produced.
    pub fn iter(&self) -> std::slice::Iter<'_, LinkResult> {
        self.results.iter()
    }

    /// Number of recorded results.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.results.len()
    }

    /// `true` if nothing has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of results of `kind`.
    #[must_use]
    pub fn count(&self, kind: ResultKind) -> usize {
        self.iter().filter(|r| r.kind() == kind).count()
    }

    /// `true` if any link was blocked by a file with different content.
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        self.iter()
            .any(|r| r.kind() == ResultKind::LinkNotCreated && r.reason() == Some(REASON_DIFFERENT))
    }

    /// Render the summary for this log; see [`summarize`].
    #[must_use]
    pub fn summary(&self) -> String {
        summarize(self)
    }
}

impl<'a> IntoIterator for &'a ResultLog {
    type Item = &'a LinkResult;
    type IntoIter = std::slice::Iter<'a, LinkResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<LinkResult> for ResultLog {
    fn extend<T: IntoIterator<Item = LinkResult>>(&mut self, iter: T) {
        self.results.extend(iter);
    }
}

/// Build the human-readable report for a run.
///
/// Results are grouped under their kind's heading, kinds in canonical order
/// and paths in the order they were produced.  The `*.exists` kinds changed
/// nothing and are left out; when nothing else remains the fixed
/// [`NOTHING_CHANGED`] message is returned.
///
/// # Examples
///
/// ```
/// use dotfiles_link::report::{ResultLog, summarize};
/// use dotfiles_link::resources::{LinkResult, Outcome};
///
/// let mut log = ResultLog::new();
/// log.push(LinkResult::new("/home/u", Outcome::SubdirExists));
/// log.push(LinkResult::new("/home/u/.vimrc", Outcome::LinkCreated));
///
/// assert_eq!(summarize(&log), "Links created\n  /home/u/.vimrc");
/// ```
#[must_use]
pub fn summarize(log: &ResultLog) -> String {
    let mut lines_by_kind: BTreeMap<ResultKind, Vec<String>> = BTreeMap::new();
    for result in log.iter().filter(|r| !r.kind().is_noop()) {
        lines_by_kind
            .entry(result.kind())
            .or_default()
            .push(result.summary_line());
    }

    let mut lines = Vec::new();
    for kind in ResultKind::ALL {
        if let Some(group) = lines_by_kind.remove(&kind) {
            lines.push(kind.heading().to_string());
            lines.extend(group);
        }
    }

    if lines.is_empty() {
        NOTHING_CHANGED.to_string()
    } else {
        lines.join("\n")
    }
}
