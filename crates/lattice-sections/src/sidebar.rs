//! Fast-scroll sidebar index.
//!
//! A `SectionSidebar` owns a host-supplied container and fills it with one
//! text label per section, each showing the section's initial. The host lays
//! the container out and forwards touches to
//! [`SectionedListAdapter::handle_sidebar_touch`](crate::model::SectionedListAdapter::handle_sidebar_touch),
//! which hit-tests the labels and asks the list to scroll.
//!
//! Label bounds and touch positions are both local to the container.

use lattice_sections_core::PerfSpan;
use lattice_sections_core::logging::{span_names, targets};

use crate::model::SectionMap;
use crate::view::{HorizontalAlignment, Point, Rect, Size, ViewNode};

/// Phase of a touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// A finger went down.
    Down,
    /// A finger moved while down.
    Move,
    /// A finger was released.
    Up,
    /// The gesture was taken over by someone else.
    Cancel,
}

/// A touch delivered to the sidebar container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Gesture phase.
    pub action: TouchAction,
    /// Position local to the sidebar container.
    pub position: Point,
}

impl TouchEvent {
    /// Creates a touch event.
    pub fn new(action: TouchAction, position: Point) -> Self {
        Self { action, position }
    }

    /// Creates a release at `(x, y)`.
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Up, Point::new(x, y))
    }
}

/// Tag identifying the labels this sidebar added, carrying the label's initial.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SidebarEntry(String);

/// One label per section inside a host-supplied container.
#[derive(Debug)]
pub struct SectionSidebar {
    container: ViewNode,
    alignment: HorizontalAlignment,
    /// Size from the last layout pass, reapplied after every repopulate.
    layout_size: Option<Size>,
}

impl SectionSidebar {
    /// Wraps `container`. Children already present are left untouched.
    pub fn new(container: ViewNode, alignment: HorizontalAlignment) -> Self {
        Self {
            container,
            alignment,
            layout_size: None,
        }
    }

    /// Replaces the section labels with one label per section in `sections`.
    ///
    /// If the sidebar was laid out before, the new labels are stacked within
    /// the same size so they respond to touches straight away.
    pub fn populate(&mut self, sections: &SectionMap) {
        let _span = PerfSpan::new(span_names::SIDEBAR);

        self.container
            .retain_children(|child| child.tag::<SidebarEntry>().is_none());
        for initial in sections.initials() {
            let mut label = ViewNode::text(initial.clone()).with_alignment(self.alignment);
            label.set_tag(SidebarEntry(initial));
            self.container.add_child(label);
        }
        if let Some(size) = self.layout_size {
            self.layout_labels(size);
        }

        tracing::trace!(
            target: targets::SIDEBAR,
            labels = sections.len(),
            "populated sidebar"
        );
    }

    /// Stacks the section labels top to bottom at equal heights within a
    /// container of `size`.
    pub fn layout_labels(&mut self, size: Size) {
        self.layout_size = Some(size);
        let count = self.label_count();
        if count == 0 {
            return;
        }
        let height = size.height / count as f32;
        let mut row = 0;
        for child in self.container.children_mut() {
            if child.tag::<SidebarEntry>().is_some() {
                child.set_bounds(Rect::new(0.0, row as f32 * height, size.width, height));
                row += 1;
            }
        }
    }

    /// Returns the initial of the first section label containing `point`.
    pub fn hit_test(&self, point: Point) -> Option<&str> {
        let hit = self.container.children().iter().find_map(|child| {
            let entry = child.tag::<SidebarEntry>()?;
            child.bounds().contains(point).then_some(entry.0.as_str())
        });
        tracing::trace!(target: targets::SIDEBAR, x = point.x, y = point.y, ?hit, "sidebar hit test");
        hit
    }

    /// Returns the initials shown, top to bottom.
    pub fn labels(&self) -> Vec<&str> {
        self.container
            .children()
            .iter()
            .filter_map(|child| child.tag::<SidebarEntry>().map(|entry| entry.0.as_str()))
            .collect()
    }

    /// Returns the number of section labels.
    pub fn label_count(&self) -> usize {
        self.container
            .children()
            .iter()
            .filter(|child| child.tag::<SidebarEntry>().is_some())
            .count()
    }

    /// Returns the container.
    pub fn container(&self) -> &ViewNode {
        &self.container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewId;

    fn sidebar_for(titles: &[&str]) -> SectionSidebar {
        let mut sidebar = SectionSidebar::new(ViewNode::container(), HorizontalAlignment::Center);
        sidebar.populate(&SectionMap::scan(titles.iter().copied()));
        sidebar
    }

    #[test]
    fn test_populate_one_label_per_section() {
        let sidebar = sidebar_for(&["Alice", "Amy", "Bob", "Carol"]);
        assert_eq!(sidebar.labels(), vec!["A", "B", "C"]);

        let first = sidebar.container().child(0).unwrap();
        assert_eq!(first.text_content(), Some("A"));
        assert_eq!(first.alignment(), Some(HorizontalAlignment::Center));
    }

    #[test]
    fn test_repopulate_keeps_foreign_children() {
        let container = ViewNode::container().with_child(ViewNode::text("title").with_id(ViewId(1)));
        let mut sidebar = SectionSidebar::new(container, HorizontalAlignment::Left);

        sidebar.populate(&SectionMap::scan(["A", "B"]));
        assert_eq!(sidebar.container().child_count(), 3);

        sidebar.populate(&SectionMap::scan(["X"]));
        assert_eq!(sidebar.labels(), vec!["X"]);
        assert_eq!(sidebar.container().child_count(), 2);
        assert!(sidebar.container().find_view(ViewId(1)).is_some());
    }

    #[test]
    fn test_layout_and_hit_test() {
        let mut sidebar = sidebar_for(&["A", "B", "B", "C"]);
        sidebar.layout_labels(Size::new(20.0, 90.0));

        assert_eq!(
            sidebar.container().child(1).unwrap().bounds(),
            Rect::new(0.0, 30.0, 20.0, 30.0)
        );
        assert_eq!(sidebar.hit_test(Point::new(10.0, 5.0)), Some("A"));
        assert_eq!(sidebar.hit_test(Point::new(10.0, 30.0)), Some("B"));
        assert_eq!(sidebar.hit_test(Point::new(10.0, 89.0)), Some("C"));
        assert_eq!(sidebar.hit_test(Point::new(25.0, 10.0)), None);
        assert_eq!(sidebar.hit_test(Point::new(10.0, 95.0)), None);
    }

    #[test]
    fn test_repopulate_keeps_last_layout() {
        let mut sidebar = sidebar_for(&["A", "B", "C"]);
        sidebar.layout_labels(Size::new(20.0, 90.0));

        sidebar.populate(&SectionMap::scan(["A", "B", "C", "D"]));
        assert_eq!(
            sidebar.container().child(3).unwrap().bounds(),
            Rect::new(0.0, 67.5, 20.0, 22.5)
        );
        assert_eq!(sidebar.hit_test(Point::new(10.0, 45.0)), Some("C"));
    }

    #[test]
    fn test_populate_before_layout_leaves_labels_unsized() {
        let sidebar = sidebar_for(&["A", "B"]);
        assert_eq!(sidebar.container().child(0).unwrap().bounds(), Rect::ZERO);
        assert_eq!(sidebar.hit_test(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_empty_sidebar_layout_is_noop() {
        let mut sidebar = sidebar_for(&[]);
        sidebar.layout_labels(Size::new(20.0, 90.0));
        assert_eq!(sidebar.label_count(), 0);
        assert_eq!(sidebar.hit_test(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_touch_event_constructors() {
        let event = TouchEvent::up(3.0, 4.0);
        assert_eq!(event.action, TouchAction::Up);
        assert_eq!(event.position, Point::new(3.0, 4.0));
    }
}
