//! Sectioned adapter tests against the public API.

use std::sync::Arc;

use parking_lot::Mutex;

use lattice_sections::model::HEADER_VIEW_TYPE;
use lattice_sections::prelude::*;
use lattice_sections::{Error, SectionConfig};

const HEADER: LayoutId = LayoutId(100);
const TITLE: ViewId = ViewId(101);
const DIVIDER: ViewId = ViewId(102);

#[derive(Debug, Clone, PartialEq)]
struct Contact {
    id: u64,
    name: &'static str,
    blocked: bool,
}

fn contact(id: u64, name: &'static str) -> Contact {
    Contact {
        id,
        name,
        blocked: false,
    }
}

fn header_inflater() -> Arc<TemplateInflater> {
    let inflater = TemplateInflater::new();
    inflater.register(
        HEADER,
        ViewNode::container()
            .with_child(ViewNode::text("").with_id(TITLE))
            .with_child(ViewNode::container().with_id(DIVIDER)),
    );
    Arc::new(inflater)
}

fn contacts(names: &[&'static str]) -> Arc<ListModel<Contact>> {
    let items = names
        .iter()
        .enumerate()
        .map(|(i, name)| contact(i as u64 + 1, name))
        .collect();
    Arc::new(
        ListModel::new(items, |c: &Contact, _| ViewNode::text(c.name))
            .with_ids(|c| c.id)
            .with_enabled(|c| !c.blocked),
    )
}

fn by_initial(c: &Contact) -> String {
    c.name.chars().take(1).collect()
}

fn build(
    source: Arc<ListModel<Contact>>,
    sidebar: Option<ViewNode>,
) -> Arc<SectionedListAdapter<ListModel<Contact>>> {
    let builder = SectionedListAdapter::builder()
        .source(source)
        .inflater(header_inflater())
        .header_layout(HEADER, TITLE)
        .sectionizer(by_initial);
    let builder = match sidebar {
        Some(container) => builder.sidebar(container),
        None => builder,
    };
    builder.build().expect("valid adapter")
}

fn abc() -> Arc<ListModel<Contact>> {
    contacts(&["Ada", "Alan", "Barbara", "Bjarne", "Brian", "Claude"])
}

#[test]
fn test_headers_precede_each_section() {
    let adapter = build(abc(), None);

    assert_eq!(adapter.count(), 9);
    assert_eq!(adapter.sections(), vec!["A", "B", "C"]);
    let headers: Vec<usize> = (0..adapter.count())
        .filter(|&p| adapter.is_header(p))
        .collect();
    assert_eq!(headers, vec![0, 3, 7]);

    assert_eq!(adapter.section_title(3).as_deref(), Some("B"));
    assert_eq!(adapter.undecorated_index(5), 3);
    assert_eq!(
        adapter.item(5).and_then(Row::into_item).map(|c| c.name),
        Some("Bjarne")
    );
}

#[test]
fn test_section_indexer() {
    let adapter = build(abc(), None);

    assert_eq!(adapter.position_for_section(0), 0);
    assert_eq!(adapter.position_for_section(1), 3);
    assert_eq!(adapter.position_for_section(2), 7);
    assert_eq!(adapter.section_for_position(4), 1);
    assert_eq!(adapter.section_for_position(8), 2);
    assert_eq!(adapter.sidebar_section_letters(), vec!["A", "B", "C"]);
}

#[test]
fn test_empty_source() {
    let adapter = build(contacts(&[]), None);

    assert_eq!(adapter.count(), 0);
    assert_eq!(adapter.section_count(), 0);
    assert!(adapter.all_items_enabled());
    assert!(adapter.item(0).is_none());
}

#[test]
fn test_single_item() {
    let adapter = build(contacts(&["Solo"]), None);

    assert_eq!(adapter.count(), 2);
    assert_eq!(
        adapter.item(0),
        Some(Row::Header {
            title: "S".to_string()
        })
    );
    assert!(!adapter.item(1).is_some_and(|row| row.is_header()));
}

#[test]
fn test_item_rows_delegate_to_source() {
    let source = abc();
    source.modify(2, |c| c.blocked = true);
    let adapter = build(source, None);

    // Barbara sits at decorated position 4.
    assert!(!adapter.is_enabled(4));
    assert!(adapter.is_enabled(5));
    assert!(!adapter.is_enabled(3));
    assert!(!adapter.all_items_enabled());

    assert!(adapter.has_stable_ids());
    assert_eq!(adapter.item_id(4), 3);
    assert_ne!(adapter.item_id(0), adapter.item_id(3));

    assert_eq!(adapter.view_type_count(), 2);
    assert_eq!(adapter.item_view_type(7), HEADER_VIEW_TYPE);
    assert_eq!(adapter.item_view_type(8), 1);
    assert_eq!(adapter.view(8, None).text_content(), Some("Claude"));
}

#[test]
fn test_header_view_binds_title() {
    let adapter = build(abc(), None);

    let header = adapter.view(7, None);
    assert_eq!(
        header.find_view(TITLE).and_then(ViewNode::text_content),
        Some("C")
    );
    assert!(header.find_view(DIVIDER).is_some());

    let recycled = adapter.view(0, Some(header));
    assert_eq!(
        recycled.find_view(TITLE).and_then(ViewNode::text_content),
        Some("A")
    );
}

#[test]
fn test_source_mutations_rescan() {
    let source = abc();
    let adapter = build(source.clone(), Some(ViewNode::container()));
    let changes = Arc::new(Mutex::new(Vec::new()));

    let seen = changes.clone();
    let observer = adapter.clone();
    adapter.signals().data_set_changed.connect(move |_| {
        seen.lock().push(observer.count());
    });

    source.push(contact(7, "Dennis"));
    assert_eq!(adapter.sections(), vec!["A", "B", "C", "D"]);

    source.remove(5);
    assert_eq!(adapter.sections(), vec!["A", "B", "D"]);

    source.clear();
    assert_eq!(adapter.section_count(), 0);

    // Observers see the rescanned count.
    assert_eq!(*changes.lock(), vec![11, 9, 0]);
    assert_eq!(adapter.with_sidebar(|sidebar| sidebar.label_count()), Some(0));
}

#[test]
fn test_sidebar_scrolls_to_section() {
    let sidebar = ViewNode::container().with_id(ViewId(200));
    let adapter = build(abc(), Some(sidebar));
    adapter.layout_sidebar(Size::new(24.0, 300.0));

    assert_eq!(
        adapter.with_sidebar(|sidebar| sidebar.labels().join("")),
        Some("ABC".to_string())
    );

    let scrolled = Arc::new(Mutex::new(Vec::new()));
    let s = scrolled.clone();
    adapter
        .section_signals()
        .scroll_requested
        .connect(move |position| s.lock().push(*position));

    // Labels are 100 units tall; "B" spans 100..200.
    assert!(adapter.handle_sidebar_touch(TouchEvent::new(TouchAction::Move, Point::new(12.0, 150.0))));
    assert!(scrolled.lock().is_empty());

    assert!(adapter.handle_sidebar_touch(TouchEvent::up(12.0, 150.0)));
    assert!(adapter.handle_sidebar_touch(TouchEvent::up(12.0, 250.0)));
    assert_eq!(*scrolled.lock(), vec![3, 7]);
}

#[test]
fn test_sidebar_responds_after_source_change() {
    let source = contacts(&["Ada", "Barbara", "Claude"]);
    let adapter = build(source.clone(), Some(ViewNode::container()));
    adapter.layout_sidebar(Size::new(20.0, 90.0));

    let scrolled = Arc::new(Mutex::new(Vec::new()));
    let s = scrolled.clone();
    adapter
        .section_signals()
        .scroll_requested
        .connect(move |position| s.lock().push(*position));

    // "B" spans 30..60 before and after the change.
    adapter.handle_sidebar_touch(TouchEvent::up(10.0, 45.0));
    source.push(contact(4, "Cerf"));
    adapter.handle_sidebar_touch(TouchEvent::up(10.0, 45.0));
    assert_eq!(*scrolled.lock(), vec![2, 2]);

    // A new section shrinks the labels without another layout call.
    source.push(contact(5, "Dijkstra"));
    adapter.handle_sidebar_touch(TouchEvent::up(10.0, 80.0));
    assert_eq!(*scrolled.lock(), vec![2, 2, 7]);
}

#[test]
fn test_sidebar_alignment_from_config() {
    let adapter = SectionedListAdapter::builder()
        .source(abc())
        .inflater(header_inflater())
        .header_layout(HEADER, TITLE)
        .sectionizer(by_initial)
        .sidebar(ViewNode::container())
        .config(SectionConfig::new().with_sidebar_text_alignment(HorizontalAlignment::Right))
        .build()
        .unwrap();

    let alignment = adapter.with_sidebar(|sidebar| sidebar.container().child(0).and_then(ViewNode::alignment));
    assert_eq!(alignment, Some(Some(HorizontalAlignment::Right)));
}

#[test]
fn test_build_errors() {
    let missing_inflater = SectionedListAdapter::builder()
        .source(abc())
        .header_layout(HEADER, TITLE)
        .sectionizer(by_initial)
        .build();
    assert_eq!(missing_inflater.unwrap_err(), Error::MissingInflater);

    let missing_source = SectionedListAdapter::<ListModel<Contact>>::builder()
        .inflater(header_inflater())
        .header_layout(HEADER, TITLE)
        .sectionizer(by_initial)
        .build();
    assert_eq!(missing_source.unwrap_err(), Error::MissingAdapter);

    let missing_sectionizer = SectionedListAdapter::builder()
        .source(abc())
        .inflater(header_inflater())
        .header_layout(HEADER, TITLE)
        .build();
    assert_eq!(missing_sectionizer.unwrap_err(), Error::MissingSectionizer);

    let missing_header = SectionedListAdapter::builder()
        .source(abc())
        .inflater(header_inflater())
        .sectionizer(by_initial)
        .build();
    assert_eq!(missing_header.unwrap_err(), Error::MissingHeaderLayout);
}

#[test]
fn test_header_layout_errors() {
    let attempt = |layout: LayoutId, view: ViewId| {
        SectionedListAdapter::builder()
            .source(abc())
            .inflater(header_inflater())
            .header_layout(layout, view)
            .sectionizer(by_initial)
            .build()
            .map(|_| ())
    };

    assert_eq!(
        attempt(LayoutId(9), TITLE),
        Err(Error::UnknownLayout {
            layout: LayoutId(9)
        })
    );
    assert_eq!(
        attempt(HEADER, ViewId(9)),
        Err(Error::TitleViewNotFound {
            layout: HEADER,
            view: ViewId(9)
        })
    );
    assert_eq!(
        attempt(HEADER, DIVIDER),
        Err(Error::TitleNotTextView {
            layout: HEADER,
            view: DIVIDER
        })
    );
}

#[test]
fn test_dropping_adapter_releases_source() {
    let source = abc();
    let adapter = build(source.clone(), None);
    assert_eq!(source.signals().data_set_changed.connection_count(), 1);

    drop(adapter);
    assert_eq!(source.signals().data_set_changed.connection_count(), 0);
    assert_eq!(Arc::strong_count(&source), 1);
}
