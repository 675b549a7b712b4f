//! Symlink primitive: create one link idempotently and classify the outcome.
use std::io;
use std::path::{Component, Path, PathBuf};

use super::{LinkResult, Outcome, REASON_DIFFERENT, REASON_IDENTICAL};
use crate::operations::FileSystemOps;

/// Create a symbolic link at `link` pointing to `target`.
///
/// Never fails: every expected condition is returned as a classified
/// [`LinkResult`].
///
/// - `link` is already a symlink resolving to the same place as `target`:
///   [`Outcome::LinkExists`], nothing is touched.
/// - The link is created: [`Outcome::LinkCreated`].
/// - Something else occupies `link`: [`Outcome::LinkNotCreated`] saying
///   whether its content is identical to `target`.  The existing entry is
///   never modified.
/// - Any other OS failure: [`Outcome::LinkNotCreated`] with the error text.
pub fn link(fs: &dyn FileSystemOps, target: &Path, link: &Path) -> LinkResult {
    if points_to(fs, link, target) {
        return LinkResult::new(link, Outcome::LinkExists);
    }

    let outcome = match fs.symlink(target, link) {
        Ok(()) => Outcome::LinkCreated,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            let reason = if fs.files_identical(target, link) {
                REASON_IDENTICAL
            } else {
                REASON_DIFFERENT
            };
            Outcome::LinkNotCreated {
                reason: reason.to_string(),
            }
        }
        Err(e) => Outcome::LinkNotCreated {
            reason: e.to_string(),
        },
    };
    LinkResult::new(link, outcome)
}

/// Returns `true` if `link` is itself a symlink and both paths resolve to
/// the same final location.
///
/// When either side cannot be fully resolved (a dangling chain), the stored
/// link text is compared with `target` instead, relative text being taken
/// from the link's parent directory.
fn points_to(fs: &dyn FileSystemOps, link: &Path, target: &Path) -> bool {
    let is_symlink = fs
        .symlink_metadata(link)
        .map(|m| m.is_symlink())
        .unwrap_or(false);
    if !is_symlink {
        return false;
    }
    match (fs.canonicalize(link), fs.canonicalize(target)) {
        (Ok(resolved_link), Ok(resolved_target)) => resolved_link == resolved_target,
        _ => fs.read_link(link).is_ok_and(|stored| {
            let stored = match link.parent() {
                Some(parent) if stored.is_relative() => parent.join(stored),
                _ => stored,
            };
            paths_equal(&stored, target)
        }),
    }
}

/// Compare two paths component-wise, ignoring `.` components and a Windows
/// verbatim prefix.
fn paths_equal(a: &Path, b: &Path) -> bool {
    let normalize = |p: &Path| -> PathBuf {
        let p = dunce::simplified(p);
        p.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    };
    normalize(a) == normalize(b)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::operations::SystemFileSystemOps;
    use crate::operations::test_helpers::FailingFileSystemOps;
    use crate::resources::ResultKind;

    fn setup() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("source");
        let link_path = dir.path().join("link");
        std::fs::write(&target, "A").unwrap();
        (dir, target, link_path)
    }

    #[test]
    fn creates_missing_link() {
        let (_dir, target, link_path) = setup();
        let result = link(&SystemFileSystemOps, &target, &link_path);

        assert_eq!(result.outcome, Outcome::LinkCreated);
        assert_eq!(result.path, link_path);
        assert_eq!(std::fs::read_link(&link_path).unwrap(), target);
    }

    #[test]
    fn second_attempt_reports_exists() {
        let (_dir, target, link_path) = setup();
        link(&SystemFileSystemOps, &target, &link_path);
        let result = link(&SystemFileSystemOps, &target, &link_path);

        assert_eq!(result.outcome, Outcome::LinkExists);
        assert!(result.reason().is_none());
    }

    #[test]
    fn identical_regular_file_is_left_alone() {
        let (_dir, target, link_path) = setup();
        std::fs::write(&link_path, "A").unwrap();

        let result = link(&SystemFileSystemOps, &target, &link_path);

        assert_eq!(result.kind(), ResultKind::LinkNotCreated);
        assert_eq!(result.reason(), Some(REASON_IDENTICAL));
        assert!(!std::fs::symlink_metadata(&link_path).unwrap().is_symlink());
    }

    #[test]
    fn different_regular_file_is_left_alone() {
        let (_dir, target, link_path) = setup();
        std::fs::write(&link_path, "B").unwrap();

        let result = link(&SystemFileSystemOps, &target, &link_path);

        assert_eq!(result.reason(), Some(REASON_DIFFERENT));
        assert_eq!(std::fs::read_to_string(&link_path).unwrap(), "B");
    }

    #[test]
    fn directory_at_link_path_is_different() {
        let (_dir, target, link_path) = setup();
        std::fs::create_dir(&link_path).unwrap();

        let result = link(&SystemFileSystemOps, &target, &link_path);

        assert_eq!(result.reason(), Some(REASON_DIFFERENT));
        assert!(link_path.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn link_to_other_file_with_same_content_is_identical() {
        let (dir, target, link_path) = setup();
        let other = dir.path().join("other");
        std::fs::write(&other, "A").unwrap();
        std::os::unix::fs::symlink(&other, &link_path).unwrap();

        let result = link(&SystemFileSystemOps, &target, &link_path);

        assert_eq!(result.reason(), Some(REASON_IDENTICAL));
        assert_eq!(std::fs::read_link(&link_path).unwrap(), other);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_link_at_link_path_is_different() {
        let (dir, target, link_path) = setup();
        std::os::unix::fs::symlink(dir.path().join("gone"), &link_path).unwrap();

        let result = link(&SystemFileSystemOps, &target, &link_path);

        assert_eq!(result.reason(), Some(REASON_DIFFERENT));
    }

    #[cfg(unix)]
    #[test]
    fn link_to_dangling_target_is_recognized() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join(".tool-rc");
        std::os::unix::fs::symlink(dir.path().join("missing"), &target).unwrap();
        let link_path = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link_path).unwrap();

        let result = link(&SystemFileSystemOps, &target, &link_path);

        assert_eq!(result.outcome, Outcome::LinkExists);
    }

    #[cfg(unix)]
    #[test]
    fn relative_link_to_dangling_target_is_recognized() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join(".tool-rc");
        std::os::unix::fs::symlink(dir.path().join("missing"), &target).unwrap();
        let link_path = dir.path().join("link");
        std::os::unix::fs::symlink("./.tool-rc", &link_path).unwrap();

        let result = link(&SystemFileSystemOps, &target, &link_path);

        assert_eq!(result.outcome, Outcome::LinkExists);
    }

    #[test]
    fn paths_equal_ignores_cur_dir() {
        assert!(paths_equal(Path::new("/a/./b"), Path::new("/a/b")));
        assert!(!paths_equal(Path::new("/a/b"), Path::new("/a/c")));
    }

    #[cfg(unix)]
    #[test]
    fn relative_link_resolving_to_target_exists() {
        let (_dir, target, link_path) = setup();
        std::os::unix::fs::symlink("source", &link_path).unwrap();

        let result = link(&SystemFileSystemOps, &target, &link_path);

        assert_eq!(result.outcome, Outcome::LinkExists);
    }

    #[test]
    fn missing_parent_reports_os_error() {
        let (dir, target, _) = setup();
        let link_path = dir.path().join("no-such-dir").join("link");

        let result = link(&SystemFileSystemOps, &target, &link_path);

        assert_eq!(result.kind(), ResultKind::LinkNotCreated);
        let reason = result.reason().unwrap();
        assert_ne!(reason, REASON_DIFFERENT);
        assert_ne!(reason, REASON_IDENTICAL);
        assert!(!reason.is_empty());
    }

    #[test]
    fn injected_already_exists_is_classified_by_content() {
        let (_dir, target, link_path) = setup();
        let fs = FailingFileSystemOps::new()
            .fail_symlink_at(&link_path)
            .with_error_kind(io::ErrorKind::AlreadyExists);

        let result = link(&fs, &target, &link_path);

        assert_eq!(result.kind(), ResultKind::LinkNotCreated);
        assert_eq!(result.reason(), Some(REASON_DIFFERENT));
    }

    #[test]
    fn injected_failure_reason_is_error_text() {
        let (_dir, target, link_path) = setup();
        let fs = FailingFileSystemOps::new().fail_symlink_at(&link_path);

        let result = link(&fs, &target, &link_path);

        assert_eq!(
            result.reason(),
            Some(io::Error::from(io::ErrorKind::PermissionDenied).to_string().as_str())
        );
        assert!(std::fs::symlink_metadata(&link_path).is_err());
    }
}
