//! Core systems for Lattice Sections.
//!
//! This crate provides the foundational pieces shared by the list adapters in
//! `lattice-sections`:
//!
//! - **Signal/Slot System**: Type-safe change notification between adapters
//!   and the views (or decorators) observing them
//! - **Logging**: Tracing targets, span names, and a performance span guard
//!
//! # Signal/Slot Example
//!
//! ```
//! use lattice_sections_core::Signal;
//!
//! // Create a signal that notifies when a data set changes
//! let data_set_changed = Signal::<()>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = data_set_changed.connect(|_| {
//!     println!("Data set changed");
//! });
//!
//! // Emit the signal
//! data_set_changed.emit(());
//!
//! // Disconnect when done
//! data_set_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
