//! Link a dotfiles source tree into a destination directory with symlinks.
//!
//! The source tree mirrors the destination.  Files become symlinks; plain
//! directories are recreated at the destination and walked into; a
//! directory holding the subdir marker file (`.dotfiles-subdir` by default)
//! is linked as a single unit.  Runs are idempotent and never overwrite
//! anything: every entry ends up as one classified
//! [`LinkResult`](resources::LinkResult).
//!
//! The public API is organised into layers:
//!
//! - **[`resources`]**: result model and the idempotent `link` / `materialize` primitives
//! - **[`operations`]**: the filesystem seam those primitives go through
//! - **[`walker`]**: the tree walk that drives them
//! - **[`report`]**: the result log and its human-readable summary
//! - **[`commands`]**: option resolution and the command-line entry point
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod platform;
pub mod report;
pub mod resources;
pub mod walker;

pub use report::{ResultLog, summarize};
pub use resources::{LinkResult, Outcome, ResultKind};
pub use walker::{Linker, run};
