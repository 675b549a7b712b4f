//! The [`Log`] trait shared by every logging backend.

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) routes messages into the tracing
/// pipeline; tests substitute recorders.  Linking code takes `&dyn Log` so
/// it never depends on how output is rendered.
pub trait Log: Send + Sync {
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Emit one progress line exactly as given, without decoration.
    fn progress(&self, line: &str);
}
