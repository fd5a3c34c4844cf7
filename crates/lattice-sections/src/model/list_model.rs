//! Generic list model implementation.
//!
//! `ListModel<T>` is a `Vec`-backed [`ListAdapter`] whose rows are rendered by
//! a closure. Every mutation announces `data_set_changed`, so decorators and
//! views observing it stay in sync.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use super::traits::{AdapterSignals, ListAdapter};
use crate::view::ViewNode;

/// Type alias for a row renderer.
///
/// Receives the item and, if the host has one, a recycled view of the same
/// view type to rebind.
pub type ItemRenderer<T> = Arc<dyn Fn(&T, Option<ViewNode>) -> ViewNode + Send + Sync>;

/// Type alias for an item id extractor.
pub type IdExtractor<T> = Arc<dyn Fn(&T) -> u64 + Send + Sync>;

/// Type alias for an enabled-state extractor.
pub type EnabledExtractor<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Type alias for a view type extractor.
pub type ViewTypeExtractor<T> = Arc<dyn Fn(&T) -> usize + Send + Sync>;

/// A generic list model for displaying a list of items.
///
/// # Example
///
/// ```
/// use lattice_sections::model::{ListAdapter, ListModel};
///
/// let model = ListModel::text_rows(vec!["Apple", "Banana"]);
/// assert_eq!(model.count(), 2);
///
/// let view = model.view(1, None);
/// assert_eq!(view.text_content(), Some("Banana"));
///
/// model.push("Cherry");
/// assert_eq!(model.count(), 3);
/// ```
pub struct ListModel<T> {
    items: RwLock<Vec<T>>,
    renderer: ItemRenderer<T>,
    id_extractor: Option<IdExtractor<T>>,
    enabled_extractor: Option<EnabledExtractor<T>>,
    view_types: Option<(usize, ViewTypeExtractor<T>)>,
    signals: AdapterSignals,
}

impl<T: Clone + Send + Sync + 'static> ListModel<T> {
    /// Creates a list model that renders rows with `renderer`.
    pub fn new<F>(items: Vec<T>, renderer: F) -> Self
    where
        F: Fn(&T, Option<ViewNode>) -> ViewNode + Send + Sync + 'static,
    {
        Self {
            items: RwLock::new(items),
            renderer: Arc::new(renderer),
            id_extractor: None,
            enabled_extractor: None,
            view_types: None,
            signals: AdapterSignals::new(),
        }
    }

    /// Creates a list model that renders each item as a single text view.
    ///
    /// Recycled text views are rebound rather than rebuilt.
    pub fn text_rows(items: Vec<T>) -> Self
    where
        T: fmt::Display,
    {
        Self::new(items, |item, recycled| {
            let text = item.to_string();
            match recycled {
                Some(mut view) if view.is_text_view() => {
                    view.set_text(text);
                    view
                }
                _ => ViewNode::text(text),
            }
        })
    }

    /// Sets an id extractor. The model then reports stable ids.
    pub fn with_ids<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&T) -> u64 + Send + Sync + 'static,
    {
        self.id_extractor = Some(Arc::new(extractor));
        self
    }

    /// Sets an enabled-state extractor.
    pub fn with_enabled<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.enabled_extractor = Some(Arc::new(extractor));
        self
    }

    /// Declares `count` view types and how to pick one per item.
    pub fn with_view_types<F>(mut self, count: usize, extractor: F) -> Self
    where
        F: Fn(&T) -> usize + Send + Sync + 'static,
    {
        self.view_types = Some((count.max(1), Arc::new(extractor)));
        self
    }

    /// Returns the number of items in the model.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the model is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Appends an item to the end of the list.
    pub fn push(&self, item: T) {
        self.items.write().push(item);
        self.notify_data_set_changed();
    }

    /// Inserts an item at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&self, index: usize, item: T) {
        self.items.write().insert(index, item);
        self.notify_data_set_changed();
    }

    /// Removes and returns the item at the specified index, if any.
    pub fn remove(&self, index: usize) -> Option<T> {
        let removed = {
            let mut items = self.items.write();
            (index < items.len()).then(|| items.remove(index))
        };
        if removed.is_some() {
            self.notify_data_set_changed();
        }
        removed
    }

    /// Removes all items from the model.
    pub fn clear(&self) {
        self.items.write().clear();
        self.notify_data_set_changed();
    }

    /// Replaces all items in the model.
    pub fn set_items(&self, items: Vec<T>) {
        *self.items.write() = items;
        self.notify_data_set_changed();
    }

    /// Returns a reference to the items (read-only access).
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Provides mutable access to an item via a closure.
    ///
    /// Announces `data_set_changed` after modification.
    pub fn modify<F, R>(&self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = {
            let mut items = self.items.write();
            let item = items.get_mut(index)?;
            f(item)
        };
        self.notify_data_set_changed();
        Some(result)
    }
}

impl<T: Clone + Send + Sync + 'static> ListAdapter for ListModel<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn item(&self, position: usize) -> Option<T> {
        self.items.read().get(position).cloned()
    }

    fn item_id(&self, position: usize) -> u64 {
        match &self.id_extractor {
            Some(extract) => self
                .items
                .read()
                .get(position)
                .map_or(position as u64, |item| extract(item)),
            None => position as u64,
        }
    }

    fn view(&self, position: usize, recycled: Option<ViewNode>) -> ViewNode {
        let items = self.items.read();
        match items.get(position) {
            Some(item) => (self.renderer)(item, recycled),
            None => {
                tracing::warn!(
                    target: "lattice_sections::model",
                    position,
                    count = items.len(),
                    "view requested past the end of the list"
                );
                ViewNode::container()
            }
        }
    }

    fn signals(&self) -> &AdapterSignals {
        &self.signals
    }

    fn item_view_type(&self, position: usize) -> usize {
        match &self.view_types {
            Some((count, extract)) => self
                .items
                .read()
                .get(position)
                .map_or(0, |item| extract(item).min(count - 1)),
            None => 0,
        }
    }

    fn view_type_count(&self) -> usize {
        self.view_types.as_ref().map_or(1, |(count, _)| *count)
    }

    fn is_enabled(&self, position: usize) -> bool {
        match &self.enabled_extractor {
            Some(extract) => self.items.read().get(position).is_some_and(|item| extract(item)),
            None => true,
        }
    }

    fn all_items_enabled(&self) -> bool {
        match &self.enabled_extractor {
            Some(extract) => self.items.read().iter().all(|item| extract(item)),
            None => true,
        }
    }

    fn has_stable_ids(&self) -> bool {
        self.id_extractor.is_some()
    }
}

impl<T> fmt::Debug for ListModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListModel")
            .field("len", &self.items.read().len())
            .field("stable_ids", &self.id_extractor.is_some())
            .finish_non_exhaustive()
    }
}
