//! Logging facilities for tagcomplete.
//!
//! This module provides:
//! - Target and span names for filtering tagcomplete's `tracing` output
//! - [`PerfSpan`], a guard for timing operations
//!
//! # Tracing Integration
//!
//! tagcomplete uses the `tracing` crate for instrumentation and never installs
//! a subscriber itself. To see logs, install one in the host application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("tagcomplete=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout tagcomplete for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "tagcomplete::signal";
    /// Raw input handling span.
    pub const INPUT: &str = "tagcomplete::input";
    /// Suggestion computation span.
    pub const SUGGEST: &str = "tagcomplete::suggest";
    /// Tag mutation span.
    pub const TAGS: &str = "tagcomplete::tags";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "tagcomplete_core::signal";
    /// Configuration store target.
    pub const CONFIG: &str = "tagcomplete::config";
    /// Suggestion matcher target.
    pub const MATCHER: &str = "tagcomplete::matcher";
    /// Tag set target.
    pub const TAGS: &str = "tagcomplete::tags";
    /// Autocomplete controller target.
    pub const CONTROLLER: &str = "tagcomplete::controller";
    /// Render adapter boundary target.
    pub const RENDER: &str = "tagcomplete::render";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "tagcomplete::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
