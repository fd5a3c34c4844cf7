//! Layout inflation.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::node::{LayoutId, ViewNode};

/// Produces view hierarchies from layout templates.
///
/// This is the rendering context a sectioned adapter needs to build its
/// header rows. Hosts typically back it with their own resource system.
pub trait LayoutInflater: Send + Sync {
    /// Inflates a fresh view hierarchy for `layout`.
    ///
    /// Returns `None` if the layout is unknown.
    fn inflate(&self, layout: LayoutId) -> Option<ViewNode>;
}

/// A [`LayoutInflater`] backed by registered template views.
///
/// Inflating a layout clones its template.
///
/// # Example
///
/// ```
/// use lattice_sections::view::{LayoutId, LayoutInflater, TemplateInflater, ViewId, ViewNode};
///
/// let inflater = TemplateInflater::new();
/// inflater.register(
///     LayoutId(1),
///     ViewNode::container().with_child(ViewNode::text("").with_id(ViewId(10))),
/// );
///
/// let header = inflater.inflate(LayoutId(1)).unwrap();
/// assert!(header.find_view(ViewId(10)).unwrap().is_text_view());
/// assert!(inflater.inflate(LayoutId(2)).is_none());
/// ```
#[derive(Debug, Default)]
pub struct TemplateInflater {
    templates: RwLock<HashMap<LayoutId, ViewNode>>,
}

impl TemplateInflater {
    /// Creates an inflater with no templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the template for `layout`.
    pub fn register(&self, layout: LayoutId, template: ViewNode) {
        self.templates.write().insert(layout, template);
    }

    /// Returns `true` if a template is registered for `layout`.
    pub fn contains(&self, layout: LayoutId) -> bool {
        self.templates.read().contains_key(&layout)
    }
}

impl LayoutInflater for TemplateInflater {
    fn inflate(&self, layout: LayoutId) -> Option<ViewNode> {
        self.templates.read().get(&layout).cloned()
    }
}
