//! Logging facilities for Lattice Sections.
//!
//! Lattice Sections uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("lattice_sections=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout Lattice Sections for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Section rescan span.
    pub const RESCAN: &str = "lattice_sections::rescan";
    /// Sidebar population span.
    pub const SIDEBAR: &str = "lattice_sections::sidebar";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "lattice_sections_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_sections_core::signal";
    /// Section discovery and position mapping target.
    pub const SECTIONS: &str = "lattice_sections::sections";
    /// Fast-scroll sidebar target.
    pub const SIDEBAR: &str = "lattice_sections::sidebar";
    /// Performance spans target.
    pub const PERF: &str = "lattice_sections::perf";
}

/// A guard that keeps a tracing span entered until it is dropped.
///
/// This is useful for tracking the duration of operations such as a full
/// section rescan.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
