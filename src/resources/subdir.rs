//! Destination directory primitive.
use std::path::Path;

use super::{LinkResult, Outcome, REASON_OCCUPIED};
use crate::operations::FileSystemOps;

/// Make sure `dir` exists as a directory, without ever replacing anything.
///
/// An existing directory (or a symlink to one) yields
/// [`Outcome::SubdirExists`].  Any other existing entry yields
/// [`Outcome::SubdirNotCreated`] and is left alone.  Otherwise the directory
/// is created, and a creation failure is reported with the OS error text.
pub fn materialize(fs: &dyn FileSystemOps, dir: &Path) -> LinkResult {
    let outcome = if fs.exists(dir) {
        if fs.is_dir(dir) {
            Outcome::SubdirExists
        } else {
            Outcome::SubdirNotCreated {
                reason: REASON_OCCUPIED.to_string(),
            }
        }
    } else {
        match fs.create_dir(dir) {
            Ok(()) => Outcome::SubdirCreated,
            Err(e) => Outcome::SubdirNotCreated {
                reason: e.to_string(),
            },
        }
    };
    LinkResult::new(dir, outcome)
}
