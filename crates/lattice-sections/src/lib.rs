//! Lattice Sections - section headers and a fast-scroll index for list adapters.
//!
//! [`SectionedListAdapter`] decorates any [`ListAdapter`] whose items are
//! already sorted by section. It inserts a header row before the first item of
//! every section, keeps its section map current as the source changes, and can
//! fill a sidebar with the section initials that scrolls the list on touch.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lattice_sections::prelude::*;
//!
//! fn main() -> lattice_sections::Result<()> {
//!     let inflater = Arc::new(TemplateInflater::new());
//!     inflater.register(
//!         LayoutId(1),
//!         ViewNode::container().with_child(ViewNode::text("").with_id(ViewId(2))),
//!     );
//!
//!     let contacts = Arc::new(ListModel::text_rows(vec!["Ada", "Alan", "Barbara", "Claude"]));
//!     let adapter = SectionedListAdapter::builder()
//!         .source(contacts)
//!         .inflater(inflater)
//!         .header_layout(LayoutId(1), ViewId(2))
//!         .sectionizer(|name: &&str| name.chars().take(1).collect())
//!         .sidebar(ViewNode::container())
//!         .build()?;
//!
//!     assert_eq!(adapter.count(), 7);
//!     assert_eq!(adapter.sections(), vec!["A", "B", "C"]);
//!     assert_eq!(adapter.position_for_section(2), 5);
//!
//!     adapter.section_signals().scroll_requested.connect(|position| {
//!         println!("scroll to {position}");
//!     });
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod sidebar;
pub mod view;

pub use config::SectionConfig;
pub use error::{Error, Result};
pub use model::{
    ListAdapter, ListModel, Row, SectionIndexer, SectionMap, SectionedListAdapter,
    SectionedListAdapterBuilder,
};
pub use sidebar::{SectionSidebar, TouchAction, TouchEvent};

pub use lattice_sections_core::{ConnectionId, Signal};

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::config::SectionConfig;
    pub use crate::model::{
        AdapterSignals, ListAdapter, ListModel, Row, SectionIndexer, SectionedListAdapter,
    };
    pub use crate::sidebar::{TouchAction, TouchEvent};
    pub use crate::view::{
        HorizontalAlignment, LayoutId, LayoutInflater, Point, Size, TemplateInflater, ViewId,
        ViewNode,
    };
    pub use lattice_sections_core::Signal;
}
