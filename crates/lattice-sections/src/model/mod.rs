//! List adapters and the sectioning decorator.
//!
//! # Core Types
//!
//! - `ListAdapter`: The trait a scrolling list consumes
//! - `AdapterSignals`: Change notifications every adapter carries
//! - `SectionIndexer`: Section lookups for fast-scroll indexes
//!
//! # Implementations
//!
//! - `ListModel`: `Vec`-backed adapter with closure-based rendering
//! - `SectionedListAdapter`: Wraps a sorted adapter and interleaves section headers
//! - `SectionMap`: The header bookkeeping behind `SectionedListAdapter`
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐  data_set_changed  ┌──────────────────────┐
//! │  ListModel  │───────────────────>│ SectionedListAdapter │───> host list
//! │   (items)   │<───────────────────│ SectionMap + sidebar │
//! └─────────────┘  item(undecorated) └──────────────────────┘
//! ```

mod list_model;
mod section_map;
mod sectioned;
mod traits;

pub use list_model::{EnabledExtractor, IdExtractor, ItemRenderer, ListModel, ViewTypeExtractor};
pub use section_map::{Section, SectionMap};
pub use sectioned::{
    HEADER_VIEW_TYPE, Row, SectionSignals, SectionedListAdapter, SectionedListAdapterBuilder,
};
pub use traits::{AdapterSignals, ListAdapter, SectionIndexer, SectionizerFn};
