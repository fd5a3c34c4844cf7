//! Error types for building sectioned adapters.
//!
//! Every variant describes a programmer error detected while assembling a
//! [`SectionedListAdapter`](crate::model::SectionedListAdapter). None of them
//! can occur once an adapter has been built.

use crate::view::{LayoutId, ViewId};

/// Result type alias for section adapter construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a sectioned adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No layout inflater (rendering context) was supplied.
    #[error("A layout inflater is required to build section headers")]
    MissingInflater,

    /// No wrapped list adapter was supplied.
    #[error("A source list adapter is required")]
    MissingAdapter,

    /// No sectionizer was supplied.
    #[error("A sectionizer is required")]
    MissingSectionizer,

    /// No section header layout was supplied.
    #[error("A section header layout is required")]
    MissingHeaderLayout,

    /// The header layout could not be inflated.
    #[error("Section header layout {layout} could not be inflated")]
    UnknownLayout { layout: LayoutId },

    /// The title view id does not occur in the header layout.
    #[error("View {view} was not found in section header layout {layout}")]
    TitleViewNotFound { layout: LayoutId, view: ViewId },

    /// The title view id resolves to a view that cannot display text.
    #[error("View {view} in section header layout {layout} is not a text view")]
    TitleNotTextView { layout: LayoutId, view: ViewId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::TitleNotTextView {
            layout: LayoutId(7),
            view: ViewId(3),
        };
        assert_eq!(
            err.to_string(),
            "View #3 in section header layout @7 is not a text view"
        );
        assert_eq!(
            Error::MissingSectionizer.to_string(),
            "A sectionizer is required"
        );
    }
}
