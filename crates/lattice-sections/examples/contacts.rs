//! Contact list with letter headers and a fast-scroll sidebar.
//!
//! Prints the decorated rows, simulates a tap on the sidebar, then adds a
//! contact and prints the rescanned sections.
//!
//! Run with: cargo run -p lattice-sections --example contacts
//! Set `RUST_LOG=lattice_sections=debug` to see rescans.

use std::sync::Arc;

use lattice_sections::prelude::*;
use tracing_subscriber::EnvFilter;

const HEADER_LAYOUT: LayoutId = LayoutId(1);
const HEADER_TITLE: ViewId = ViewId(1);

fn print_rows(adapter: &SectionedListAdapter<ListModel<String>>) {
    for position in 0..adapter.count() {
        let view = adapter.view(position, None);
        match adapter.item(position) {
            Some(Row::Header { .. }) => {
                let title = view
                    .find_view(HEADER_TITLE)
                    .and_then(ViewNode::text_content)
                    .unwrap_or_default();
                println!("{position:>3}  == {title} ==");
            }
            Some(Row::Item(_)) => {
                println!("{position:>3}     {}", view.text_content().unwrap_or_default());
            }
            None => {}
        }
    }
}

fn main() -> lattice_sections::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let inflater = Arc::new(TemplateInflater::new());
    inflater.register(
        HEADER_LAYOUT,
        ViewNode::container().with_child(ViewNode::text("").with_id(HEADER_TITLE)),
    );

    let mut names: Vec<String> = [
        "Ada Lovelace",
        "Alan Turing",
        "Barbara Liskov",
        "Bjarne Stroustrup",
        "Dennis Ritchie",
        "Donald Knuth",
        "Edsger Dijkstra",
        "Grace Hopper",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    names.sort();

    let contacts = Arc::new(ListModel::text_rows(names));
    let adapter = SectionedListAdapter::builder()
        .source(contacts.clone())
        .inflater(inflater)
        .header_layout(HEADER_LAYOUT, HEADER_TITLE)
        .sectionizer(|name: &String| name.chars().take(1).collect())
        .sidebar(ViewNode::container())
        .config(
            SectionConfig::new()
                .with_trace_sections(true)
                .with_sidebar_text_alignment(HorizontalAlignment::Center),
        )
        .build()?;

    print_rows(&adapter);

    adapter.layout_sidebar(Size::new(24.0, 240.0));
    adapter.section_signals().scroll_requested.connect(|position| {
        println!("sidebar: scroll to row {position}");
    });
    // Five labels, 48 units each: this lands on "D".
    adapter.handle_sidebar_touch(TouchEvent::up(12.0, 110.0));

    contacts.insert(4, "Brian Kernighan".to_string());
    contacts.insert(5, "Claude Shannon".to_string());
    println!("sections after insert: {:?}", adapter.sections());
    println!("sidebar: {:?}", adapter.sidebar_section_letters());

    Ok(())
}
