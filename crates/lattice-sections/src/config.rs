//! Configuration for sectioned adapters.

use crate::view::HorizontalAlignment;

/// Settings passed to a [`SectionedListAdapter`](crate::model::SectionedListAdapter)
/// when it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionConfig {
    /// Emit a `debug` event with the number of sections found on every rescan.
    pub trace_sections: bool,
    /// Alignment of the labels added to the fast-scroll sidebar.
    pub sidebar_text_alignment: HorizontalAlignment,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            trace_sections: false,
            sidebar_text_alignment: HorizontalAlignment::Center,
        }
    }
}

impl SectionConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the per-rescan section count trace.
    pub fn with_trace_sections(mut self, enabled: bool) -> Self {
        self.trace_sections = enabled;
        self
    }

    /// Sets the alignment of sidebar labels.
    pub fn with_sidebar_text_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.sidebar_text_alignment = alignment;
        self
    }
}
