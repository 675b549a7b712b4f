//! Shared helpers for the link primitives.
pub mod fs;
