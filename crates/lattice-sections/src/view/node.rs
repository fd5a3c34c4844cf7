//! A small retained view tree.
//!
//! `ViewNode` is the view abstraction adapters hand to the host list: a
//! container or a text label, with optional id, bounds assigned by the host's
//! layout pass, children, and an opaque per-view tag that adapters use to
//! cache lookups across recycling.

use std::any::Any;
use std::fmt;

use super::geometry::Rect;

/// Identifies a layout template known to a [`LayoutInflater`](super::LayoutInflater).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutId(pub u32);

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// Identifies a view within an inflated hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u32);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Align to the center.
    Center,
    /// Align to the right edge.
    Right,
}

/// What a [`ViewNode`] displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewKind {
    /// Groups child views.
    Container,
    /// Displays a single line of text.
    Text {
        text: String,
        alignment: HorizontalAlignment,
    },
}

/// A node in a view hierarchy.
///
/// Cloning a node copies its id, kind, bounds, and children, but never its tag:
/// a clone is a fresh view that has not been bound to any row yet.
pub struct ViewNode {
    id: Option<ViewId>,
    kind: ViewKind,
    bounds: Rect,
    children: Vec<ViewNode>,
    tag: Option<Box<dyn Any + Send + Sync>>,
}

impl ViewNode {
    fn with_kind(kind: ViewKind) -> Self {
        Self {
            id: None,
            kind,
            bounds: Rect::ZERO,
            children: Vec::new(),
            tag: None,
        }
    }

    /// Creates an empty container view.
    pub fn container() -> Self {
        Self::with_kind(ViewKind::Container)
    }

    /// Creates a left-aligned text view.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_kind(ViewKind::Text {
            text: text.into(),
            alignment: HorizontalAlignment::Left,
        })
    }

    /// Sets the view id.
    pub fn with_id(mut self, id: ViewId) -> Self {
        self.id = Some(id);
        self
    }

    /// Appends a child view.
    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the text alignment. Has no effect on containers.
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        if let ViewKind::Text { alignment: a, .. } = &mut self.kind {
            *a = alignment;
        }
        self
    }

    /// Returns the view id, if any.
    pub fn id(&self) -> Option<ViewId> {
        self.id
    }

    /// Returns what this view displays.
    pub fn kind(&self) -> &ViewKind {
        &self.kind
    }

    /// Returns `true` if this view can display text.
    pub fn is_text_view(&self) -> bool {
        matches!(self.kind, ViewKind::Text { .. })
    }

    /// Returns the displayed text for text views.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            ViewKind::Text { text, .. } => Some(text),
            ViewKind::Container => None,
        }
    }

    /// Returns the text alignment for text views.
    pub fn alignment(&self) -> Option<HorizontalAlignment> {
        match &self.kind {
            ViewKind::Text { alignment, .. } => Some(*alignment),
            ViewKind::Container => None,
        }
    }

    /// Replaces the displayed text.
    ///
    /// Returns `false` (and changes nothing) if this is not a text view.
    pub fn set_text(&mut self, value: impl Into<String>) -> bool {
        match &mut self.kind {
            ViewKind::Text { text, .. } => {
                *text = value.into();
                true
            }
            ViewKind::Container => false,
        }
    }

    /// Returns the bounds assigned by the last layout pass.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Assigns the view bounds.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    // -------------------------------------------------------------------------
    // Children
    // -------------------------------------------------------------------------

    /// Appends a child view.
    pub fn add_child(&mut self, child: ViewNode) {
        self.children.push(child);
    }

    /// Keeps only the direct children for which `keep` returns `true`.
    pub fn retain_children<F>(&mut self, keep: F)
    where
        F: FnMut(&ViewNode) -> bool,
    {
        self.children.retain(keep);
    }

    /// Returns the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the direct child at `index`.
    pub fn child(&self, index: usize) -> Option<&ViewNode> {
        self.children.get(index)
    }

    /// Returns the direct children.
    pub fn children(&self) -> &[ViewNode] {
        &self.children
    }

    /// Returns the direct children mutably.
    pub fn children_mut(&mut self) -> &mut [ViewNode] {
        &mut self.children
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Returns the child-index path from this view to the first view (depth
    /// first, self included) carrying `id`.
    ///
    /// An empty path means this view itself matches.
    pub fn find_path(&self, id: ViewId) -> Option<Vec<usize>> {
        if self.id == Some(id) {
            return Some(Vec::new());
        }
        self.children.iter().enumerate().find_map(|(i, child)| {
            child.find_path(id).map(|mut path| {
                path.insert(0, i);
                path
            })
        })
    }

    /// Follows a child-index path from this view.
    pub fn node_at_path(&self, path: &[usize]) -> Option<&ViewNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// Follows a child-index path from this view, mutably.
    pub fn node_at_path_mut(&mut self, path: &[usize]) -> Option<&mut ViewNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get_mut(index))
    }

    /// Finds the first view (depth first, self included) carrying `id`.
    pub fn find_view(&self, id: ViewId) -> Option<&ViewNode> {
        let path = self.find_path(id)?;
        self.node_at_path(&path)
    }

    /// Finds the first view (depth first, self included) carrying `id`, mutably.
    pub fn find_view_mut(&mut self, id: ViewId) -> Option<&mut ViewNode> {
        let path = self.find_path(id)?;
        self.node_at_path_mut(&path)
    }

    // -------------------------------------------------------------------------
    // Tag
    // -------------------------------------------------------------------------

    /// Attaches an opaque value to this view, replacing any previous tag.
    pub fn set_tag<T: Any + Send + Sync>(&mut self, tag: T) {
        self.tag = Some(Box::new(tag));
    }

    /// Returns the tag if one is attached and it has type `T`.
    pub fn tag<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.tag.as_ref()?.downcast_ref::<T>()
    }

    /// Returns `true` if any tag is attached.
    pub fn has_tag(&self) -> bool {
        self.tag.is_some()
    }

    /// Detaches and returns the tag if it has type `T`.
    ///
    /// A tag of any other type is left in place.
    pub fn take_tag<T: Any + Send + Sync>(&mut self) -> Option<T> {
        if !self.tag.as_ref().is_some_and(|tag| tag.is::<T>()) {
            return None;
        }
        self.tag.take()?.downcast::<T>().ok().map(|tag| *tag)
    }
}

impl Clone for ViewNode {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            kind: self.kind.clone(),
            bounds: self.bounds,
            children: self.children.clone(),
            tag: None,
        }
    }
}

impl fmt::Debug for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewNode")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("bounds", &self.bounds)
            .field("children", &self.children)
            .field("tagged", &self.tag.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_template() -> ViewNode {
        ViewNode::container().with_child(
            ViewNode::container()
                .with_id(ViewId(1))
                .with_child(ViewNode::text("").with_id(ViewId(2)))
                .with_child(ViewNode::text("").with_id(ViewId(3))),
        )
    }

    #[test]
    fn test_find_path() {
        let view = row_template();
        assert_eq!(view.find_path(ViewId(1)), Some(vec![0]));
        assert_eq!(view.find_path(ViewId(3)), Some(vec![0, 1]));
        assert_eq!(view.find_path(ViewId(9)), None);

        let label = ViewNode::text("x").with_id(ViewId(4));
        assert_eq!(label.find_path(ViewId(4)), Some(vec![]));
    }

    #[test]
    fn test_find_view_and_set_text() {
        let mut view = row_template();
        assert!(view.find_view(ViewId(2)).unwrap().is_text_view());
        assert!(!view.find_view(ViewId(1)).unwrap().is_text_view());

        assert!(view.find_view_mut(ViewId(3)).unwrap().set_text("Hello"));
        assert_eq!(
            view.find_view(ViewId(3)).and_then(ViewNode::text_content),
            Some("Hello")
        );

        // Containers refuse text.
        assert!(!view.find_view_mut(ViewId(1)).unwrap().set_text("nope"));
    }

    #[test]
    fn test_tag_roundtrip() {
        let mut view = ViewNode::container();
        assert!(!view.has_tag());

        view.set_tag(42u32);
        assert_eq!(view.tag::<u32>(), Some(&42));
        assert_eq!(view.tag::<String>(), None);

        // Wrong type leaves the tag attached.
        assert_eq!(view.take_tag::<String>(), None);
        assert!(view.has_tag());
        assert_eq!(view.take_tag::<u32>(), Some(42));
        assert!(!view.has_tag());
    }

    #[test]
    fn test_clone_drops_tag() {
        let mut view = row_template();
        view.set_tag("cached");
        let copy = view.clone();
        assert!(!copy.has_tag());
        assert_eq!(copy.child_count(), 1);
        assert_eq!(copy.find_path(ViewId(3)), Some(vec![0, 1]));
    }

    #[test]
    fn test_alignment() {
        let label = ViewNode::text("A").with_alignment(HorizontalAlignment::Center);
        assert_eq!(label.alignment(), Some(HorizontalAlignment::Center));
        assert_eq!(
            ViewNode::container()
                .with_alignment(HorizontalAlignment::Right)
                .alignment(),
            None
        );
    }
}
