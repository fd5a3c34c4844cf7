//! Core traits for list adapters.
//!
//! This module defines the capability set a scrolling list consumes from an
//! adapter, the signals adapters use to announce changes, and the section
//! index used by fast-scroll sidebars.

use std::sync::Arc;

use lattice_sections_core::Signal;

use crate::view::ViewNode;

/// Maps a data item to the title of the section it belongs to.
///
/// The wrapped data must already be grouped by this title when traversed in
/// order.
pub type SectionizerFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// The core trait for list adapters.
///
/// A `ListAdapter` supplies a scrolling list with its item count, per-item
/// views, and stable item identity. Positions are always `0..count()`.
///
/// # Implementation Requirements
///
/// At minimum, you must implement:
/// - [`count`](ListAdapter::count) - Number of rows
/// - [`item`](ListAdapter::item) - The data item at a position
/// - [`item_id`](ListAdapter::item_id) - Identity of the row at a position
/// - [`view`](ListAdapter::view) - The view for a position
/// - [`signals`](ListAdapter::signals) - Change notifications
///
/// Adapters with more than one kind of row also override
/// [`item_view_type`](ListAdapter::item_view_type) and
/// [`view_type_count`](ListAdapter::view_type_count) so the host only hands
/// back recycled views of the matching type.
pub trait ListAdapter: Send + Sync {
    /// The data item type.
    type Item: Clone;

    /// Returns the number of rows.
    fn count(&self) -> usize;

    /// Returns the item at `position`, or `None` if out of range.
    fn item(&self, position: usize) -> Option<Self::Item>;

    /// Returns the identity of the row at `position`.
    fn item_id(&self, position: usize) -> u64;

    /// Returns the view for `position`.
    ///
    /// `recycled` is a view previously returned for a row of the same view
    /// type, which the adapter may rebind instead of building a new one.
    fn view(&self, position: usize, recycled: Option<ViewNode>) -> ViewNode;

    /// Returns the signals for this adapter.
    fn signals(&self) -> &AdapterSignals;

    // -------------------------------------------------------------------------
    // Optional methods with default implementations
    // -------------------------------------------------------------------------

    /// Returns the view type of the row at `position`, in `0..view_type_count()`.
    fn item_view_type(&self, _position: usize) -> usize {
        0
    }

    /// Returns the number of distinct view types.
    fn view_type_count(&self) -> usize {
        1
    }

    /// Returns `true` if the row at `position` can be selected and clicked.
    fn is_enabled(&self, _position: usize) -> bool {
        true
    }

    /// Returns `true` if every row is enabled.
    fn all_items_enabled(&self) -> bool {
        true
    }

    /// Returns `true` if item ids stay attached to the same data across changes.
    fn has_stable_ids(&self) -> bool {
        false
    }

    /// Returns `true` if the adapter has no rows.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Announces that the underlying data changed.
    fn notify_data_set_changed(&self) {
        self.signals().data_set_changed.emit(());
    }

    /// Announces that the underlying data is no longer available.
    fn notify_data_set_invalidated(&self) {
        self.signals().data_set_invalidated.emit(());
    }
}

/// Signals emitted by list adapters.
///
/// Views (and decorating adapters) connect to these to stay synchronized.
#[derive(Debug)]
pub struct AdapterSignals {
    /// Emitted after the data behind the adapter changed.
    pub data_set_changed: Signal<()>,

    /// Emitted when the data behind the adapter became invalid.
    pub data_set_invalidated: Signal<()>,
}

impl Default for AdapterSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterSignals {
    /// Creates a new set of adapter signals.
    pub fn new() -> Self {
        Self {
            data_set_changed: Signal::new(),
            data_set_invalidated: Signal::new(),
        }
    }
}

/// Quick-navigation index over the sections of a list.
///
/// Ordinals count sections from 0 in on-screen order; positions are rows of
/// the adapter exposing the index.
pub trait SectionIndexer {
    /// Returns the full titles of all sections, in order.
    fn sections(&self) -> Vec<String>;

    /// Returns the position of the header row of section `section`.
    fn position_for_section(&self, section: usize) -> usize;

    /// Returns the ordinal of the section containing `position`.
    fn section_for_position(&self, position: usize) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct Fixed {
        rows: Vec<&'static str>,
        signals: AdapterSignals,
    }

    impl ListAdapter for Fixed {
        type Item = &'static str;

        fn count(&self) -> usize {
            self.rows.len()
        }

        fn item(&self, position: usize) -> Option<Self::Item> {
            self.rows.get(position).copied()
        }

        fn item_id(&self, position: usize) -> u64 {
            position as u64
        }

        fn view(&self, position: usize, _recycled: Option<ViewNode>) -> ViewNode {
            ViewNode::text(self.rows[position])
        }

        fn signals(&self) -> &AdapterSignals {
            &self.signals
        }
    }

    #[test]
    fn test_defaults() {
        let adapter = Fixed {
            rows: vec!["a", "b"],
            signals: AdapterSignals::new(),
        };
        assert!(!adapter.is_empty());
        assert_eq!(adapter.view_type_count(), 1);
        assert_eq!(adapter.item_view_type(1), 0);
        assert!(adapter.is_enabled(0));
        assert!(adapter.all_items_enabled());
        assert!(!adapter.has_stable_ids());
    }

    #[test]
    fn test_notify_emits_signals() {
        let adapter = Fixed {
            rows: Vec::new(),
            signals: AdapterSignals::new(),
        };
        let events = Arc::new(Mutex::new(Vec::new()));

        let e1 = events.clone();
        adapter.signals().data_set_changed.connect(move |_| {
            e1.lock().push("changed");
        });
        let e2 = events.clone();
        adapter.signals().data_set_invalidated.connect(move |_| {
            e2.lock().push("invalidated");
        });

        adapter.notify_data_set_changed();
        adapter.notify_data_set_invalidated();

        assert_eq!(*events.lock(), vec!["changed", "invalidated"]);
        assert!(adapter.is_empty());
    }
}
