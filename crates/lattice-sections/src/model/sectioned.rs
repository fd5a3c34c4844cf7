//! Sectioned list adapter.
//!
//! `SectionedListAdapter` wraps a [`ListAdapter`] whose data is already sorted
//! by section and interleaves a header row before the first item of every
//! section. It can also drive a fast-scroll sidebar listing the section
//! initials.

use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::{Arc, Weak};

use lattice_sections_core::logging::{span_names, targets};
use lattice_sections_core::{ConnectionId, PerfSpan, Signal};

use super::section_map::SectionMap;
use super::traits::{AdapterSignals, ListAdapter, SectionIndexer, SectionizerFn};
use crate::config::SectionConfig;
use crate::error::{Error, Result};
use crate::sidebar::{SectionSidebar, TouchAction, TouchEvent};
use crate::view::{LayoutId, LayoutInflater, Size, ViewId, ViewNode};

/// View type reported for header rows. Wrapped view types are shifted up by one.
pub const HEADER_VIEW_TYPE: usize = 0;

/// A row of a sectioned list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<T> {
    /// A section header.
    Header { title: String },
    /// An item of the wrapped adapter.
    Item(T),
}

impl<T> Row<T> {
    /// Returns `true` for header rows.
    pub fn is_header(&self) -> bool {
        matches!(self, Row::Header { .. })
    }

    /// Returns the header title, or `None` for item rows.
    pub fn title(&self) -> Option<&str> {
        match self {
            Row::Header { title } => Some(title),
            Row::Item(_) => None,
        }
    }

    /// Returns the wrapped item, or `None` for header rows.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Row::Item(item) => Some(item),
            Row::Header { .. } => None,
        }
    }

    /// Converts into the wrapped item, or `None` for header rows.
    pub fn into_item(self) -> Option<T> {
        match self {
            Row::Item(item) => Some(item),
            Row::Header { .. } => None,
        }
    }
}

/// Cached lookup attached to header views so a recycled header can be
/// rebound without searching for its title label again.
#[derive(Debug, Clone)]
struct SectionHolder {
    title_path: Vec<usize>,
}

/// Signals specific to sectioned adapters.
#[derive(Debug, Default)]
pub struct SectionSignals {
    /// Emitted when the sidebar asks the list to scroll smoothly to a position.
    pub scroll_requested: Signal<usize>,
}

/// A list adapter that adds section headers to a sorted source adapter.
///
/// Rows are addressed by *decorated* positions (headers and items
/// interleaved). Item rows delegate to the source adapter at the matching
/// *undecorated* position.
///
/// The source data must already be grouped by section title. A title that
/// reappears after a different one gets a second header.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use lattice_sections::model::{ListAdapter, ListModel, SectionedListAdapter};
/// use lattice_sections::view::{LayoutId, TemplateInflater, ViewId, ViewNode};
///
/// let inflater = Arc::new(TemplateInflater::new());
/// inflater.register(LayoutId(1), ViewNode::text("").with_id(ViewId(1)));
///
/// let names = Arc::new(ListModel::text_rows(vec!["Alice", "Amy", "Bob"]));
/// let adapter = SectionedListAdapter::builder()
///     .source(names.clone())
///     .inflater(inflater)
///     .header_layout(LayoutId(1), ViewId(1))
///     .sectionizer(|name: &&str| name[..1].to_string())
///     .build()
///     .unwrap();
///
/// assert_eq!(adapter.count(), 5);
/// assert_eq!(adapter.section_title(3).as_deref(), Some("B"));
///
/// names.push("Carol");
/// assert_eq!(adapter.count(), 7);
/// ```
pub struct SectionedListAdapter<A: ListAdapter> {
    source: Arc<A>,
    inflater: Arc<dyn LayoutInflater>,
    header_layout: LayoutId,
    title_view: ViewId,
    sectionizer: SectionizerFn<A::Item>,
    sections: RwLock<SectionMap>,
    sidebar: Option<Mutex<SectionSidebar>>,
    config: SectionConfig,
    signals: AdapterSignals,
    section_signals: SectionSignals,
    /// Connections to the source's `data_set_changed` and `data_set_invalidated`.
    source_connections: [ConnectionId; 2],
}

impl<A: ListAdapter + 'static> SectionedListAdapter<A> {
    /// Starts building a sectioned adapter.
    pub fn builder() -> SectionedListAdapterBuilder<A> {
        SectionedListAdapterBuilder::new()
    }

    /// Returns a reference to the source adapter.
    pub fn source(&self) -> &Arc<A> {
        &self.source
    }

    /// Returns the configuration this adapter was built with.
    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    /// Returns the sectioning-specific signals.
    pub fn section_signals(&self) -> &SectionSignals {
        &self.section_signals
    }

    /// Returns the current section map (read-only access).
    pub fn section_map(&self) -> impl std::ops::Deref<Target = SectionMap> + '_ {
        self.sections.read()
    }

    /// Returns the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.read().len()
    }

    /// Returns the index into the source adapter for a decorated position.
    pub fn undecorated_index(&self, position: usize) -> usize {
        self.sections.read().undecorated_index(position)
    }

    /// Returns the decorated position of the source item at `index`.
    pub fn decorated_position(&self, index: usize) -> usize {
        self.sections.read().decorated_position(index)
    }

    /// Returns `true` if the row at `position` is a section header.
    pub fn is_header(&self, position: usize) -> bool {
        self.sections.read().is_header(position)
    }

    /// Returns the title of the header at `position`, or `None` for item rows.
    pub fn section_title(&self, position: usize) -> Option<String> {
        self.sections.read().title_at(position).map(str::to_owned)
    }

    /// Returns the first character of every section title, for compact display.
    pub fn sidebar_section_letters(&self) -> Vec<String> {
        self.sections.read().initials()
    }

    /// Rescans the source adapter and rebuilds the section map.
    ///
    /// This runs automatically whenever the source announces a change. The
    /// sidebar, if any, is repopulated.
    pub fn rescan(&self) {
        let sections = scan_sections(self.source.as_ref(), &self.sectionizer, &self.config);
        if let Some(sidebar) = &self.sidebar {
            sidebar.lock().populate(&sections);
        }
        *self.sections.write() = sections;
    }

    fn on_source_changed(&self) {
        self.rescan();
        self.signals.data_set_changed.emit(());
    }

    fn on_source_invalidated(&self) {
        self.rescan();
        self.signals.data_set_invalidated.emit(());
    }

    // -------------------------------------------------------------------------
    // Sidebar
    // -------------------------------------------------------------------------

    /// Returns `true` if this adapter drives a sidebar.
    pub fn has_sidebar(&self) -> bool {
        self.sidebar.is_some()
    }

    /// Runs `f` with the sidebar, if there is one.
    pub fn with_sidebar<R>(&self, f: impl FnOnce(&mut SectionSidebar) -> R) -> Option<R> {
        self.sidebar.as_ref().map(|sidebar| f(&mut sidebar.lock()))
    }

    /// Stacks the sidebar labels within a container of `size`.
    pub fn layout_sidebar(&self, size: Size) {
        self.with_sidebar(|sidebar| sidebar.layout_labels(size));
    }

    /// Handles a touch on the sidebar container.
    ///
    /// On release over a label, emits
    /// [`scroll_requested`](SectionSignals::scroll_requested) with the header
    /// position of that label's section. Returns `true` when the touch was
    /// consumed, which is always the case while a sidebar is present.
    pub fn handle_sidebar_touch(&self, event: TouchEvent) -> bool {
        let Some(sidebar) = &self.sidebar else {
            return false;
        };
        if event.action != TouchAction::Up {
            return true;
        }

        let initial = sidebar.lock().hit_test(event.position).map(str::to_owned);
        let position = initial.and_then(|initial| self.sections.read().position_for_initial(&initial));
        if let Some(position) = position {
            tracing::debug!(target: targets::SIDEBAR, position, "sidebar requested scroll");
            self.section_signals.scroll_requested.emit(position);
        }
        true
    }

    // -------------------------------------------------------------------------
    // Header views
    // -------------------------------------------------------------------------

    fn inflate_header(&self) -> Option<(ViewNode, SectionHolder)> {
        let view = self.inflater.inflate(self.header_layout)?;
        let title_path = view.find_path(self.title_view)?;
        Some((view, SectionHolder { title_path }))
    }

    fn header_view(&self, title: &str, recycled: Option<ViewNode>) -> ViewNode {
        let bound = recycled
            .and_then(|mut view| view.take_tag::<SectionHolder>().map(|holder| (view, holder)));
        let Some((mut view, holder)) = bound.or_else(|| self.inflate_header()) else {
            tracing::warn!(
                target: targets::SECTIONS,
                layout = %self.header_layout,
                "section header layout no longer inflates, using a bare label"
            );
            return ViewNode::text(title);
        };

        match view.node_at_path_mut(&holder.title_path) {
            Some(label) => {
                label.set_text(title);
            }
            None => tracing::warn!(
                target: targets::SECTIONS,
                view = %self.title_view,
                "section title label missing from header view"
            ),
        }
        view.set_tag(holder);
        view
    }

    fn header_id(ordinal: usize) -> u64 {
        u64::MAX - ordinal as u64
    }
}

/// Scans `source` in order and records a header wherever the section title changes.
fn scan_sections<A: ListAdapter>(
    source: &A,
    sectionizer: &SectionizerFn<A::Item>,
    config: &SectionConfig,
) -> SectionMap {
    let _span = PerfSpan::new(span_names::RESCAN);

    let mut missing = 0;
    let titles: Vec<Option<String>> = (0..source.count())
        .map(|index| {
            let title = source.item(index).map(|item| sectionizer(&item));
            missing += usize::from(title.is_none());
            title
        })
        .collect();
    if missing > 0 {
        tracing::warn!(
            target: targets::SECTIONS,
            missing,
            count = titles.len(),
            "source reported items it could not supply; they join the preceding section"
        );
    }
    let sections = SectionMap::scan_with_gaps(titles);

    if config.trace_sections {
        tracing::debug!(
            target: targets::SECTIONS,
            sections = sections.len(),
            items = sections.item_count(),
            "Found {} sections.",
            sections.len()
        );
    }
    sections
}

/// Checks that `view` names a text view inside `layout`.
fn validate_title_view(inflater: &dyn LayoutInflater, layout: LayoutId, view: ViewId) -> Result<()> {
    let header = inflater
        .inflate(layout)
        .ok_or(Error::UnknownLayout { layout })?;
    match header.find_view(view) {
        None => Err(Error::TitleViewNotFound { layout, view }),
        Some(found) if !found.is_text_view() => Err(Error::TitleNotTextView { layout, view }),
        Some(_) => Ok(()),
    }
}

impl<A: ListAdapter + 'static> ListAdapter for SectionedListAdapter<A> {
    type Item = Row<A::Item>;

    fn count(&self) -> usize {
        self.source.count() + self.sections.read().len()
    }

    fn item(&self, position: usize) -> Option<Row<A::Item>> {
        let index = {
            let sections = self.sections.read();
            if let Some(section) = sections.header_at(position) {
                return Some(Row::Header {
                    title: section.title.clone(),
                });
            }
            sections.undecorated_index(position)
        };
        self.source.item(index).map(Row::Item)
    }

    fn item_id(&self, position: usize) -> u64 {
        let index = {
            let sections = self.sections.read();
            if let Some(ordinal) = sections.header_ordinal(position) {
                return Self::header_id(ordinal);
            }
            sections.undecorated_index(position)
        };
        self.source.item_id(index)
    }

    fn view(&self, position: usize, recycled: Option<ViewNode>) -> ViewNode {
        let (title, index) = {
            let sections = self.sections.read();
            (
                sections.title_at(position).map(str::to_owned),
                sections.undecorated_index(position),
            )
        };
        match title {
            Some(title) => self.header_view(&title, recycled),
            None => {
                // A header view is never handed to the source.
                let recycled = recycled.filter(|view| view.tag::<SectionHolder>().is_none());
                self.source.view(index, recycled)
            }
        }
    }

    fn signals(&self) -> &AdapterSignals {
        &self.signals
    }

    fn item_view_type(&self, position: usize) -> usize {
        let index = {
            let sections = self.sections.read();
            if sections.is_header(position) {
                return HEADER_VIEW_TYPE;
            }
            sections.undecorated_index(position)
        };
        self.source.item_view_type(index) + 1
    }

    fn view_type_count(&self) -> usize {
        self.source.view_type_count() + 1
    }

    fn is_enabled(&self, position: usize) -> bool {
        let index = {
            let sections = self.sections.read();
            if sections.is_header(position) {
                return false;
            }
            sections.undecorated_index(position)
        };
        self.source.is_enabled(index)
    }

    fn all_items_enabled(&self) -> bool {
        self.source.all_items_enabled() && self.sections.read().is_empty()
    }

    fn has_stable_ids(&self) -> bool {
        self.source.has_stable_ids()
    }

    fn notify_data_set_changed(&self) {
        // The source's signal drives the rescan and our own notification.
        self.source.notify_data_set_changed();
    }

    fn notify_data_set_invalidated(&self) {
        self.source.notify_data_set_invalidated();
    }
}

impl<A: ListAdapter + 'static> SectionIndexer for SectionedListAdapter<A> {
    fn sections(&self) -> Vec<String> {
        self.sections.read().titles()
    }

    fn position_for_section(&self, section: usize) -> usize {
        self.sections.read().position_for_section(section)
    }

    fn section_for_position(&self, position: usize) -> usize {
        self.sections.read().section_for_position(position)
    }
}

impl<A: ListAdapter> Drop for SectionedListAdapter<A> {
    fn drop(&mut self) {
        let [changed, invalidated] = self.source_connections;
        let signals = self.source.signals();
        signals.data_set_changed.disconnect(changed);
        signals.data_set_invalidated.disconnect(invalidated);
    }
}

impl<A: ListAdapter> fmt::Debug for SectionedListAdapter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionedListAdapter")
            .field("header_layout", &self.header_layout)
            .field("title_view", &self.title_view)
            .field("sections", &*self.sections.read())
            .field("sidebar", &self.sidebar.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SectionedListAdapter`].
///
/// The source adapter, layout inflater, header layout, and sectionizer are
/// required; [`build`](Self::build) reports the first one missing.
pub struct SectionedListAdapterBuilder<A: ListAdapter> {
    source: Option<Arc<A>>,
    inflater: Option<Arc<dyn LayoutInflater>>,
    header: Option<(LayoutId, ViewId)>,
    sectionizer: Option<SectionizerFn<A::Item>>,
    sidebar: Option<ViewNode>,
    config: SectionConfig,
}

impl<A: ListAdapter + 'static> Default for SectionedListAdapterBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ListAdapter + 'static> SectionedListAdapterBuilder<A> {
    /// Creates a builder with nothing set.
    pub fn new() -> Self {
        Self {
            source: None,
            inflater: None,
            header: None,
            sectionizer: None,
            sidebar: None,
            config: SectionConfig::default(),
        }
    }

    /// Sets the adapter to be sectioned.
    pub fn source(mut self, source: Arc<A>) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the inflater used to build header rows.
    pub fn inflater<I: LayoutInflater + 'static>(mut self, inflater: Arc<I>) -> Self {
        self.inflater = Some(inflater);
        self
    }

    /// Sets the header layout and the id of the text view showing the title.
    pub fn header_layout(mut self, layout: LayoutId, title_view: ViewId) -> Self {
        self.header = Some((layout, title_view));
        self
    }

    /// Sets the function mapping an item to its section title.
    pub fn sectionizer<F>(mut self, sectionizer: F) -> Self
    where
        F: Fn(&A::Item) -> String + Send + Sync + 'static,
    {
        self.sectionizer = Some(Arc::new(sectionizer));
        self
    }

    /// Supplies a container to fill with one label per section.
    pub fn sidebar(mut self, container: ViewNode) -> Self {
        self.sidebar = Some(container);
        self
    }

    /// Sets the configuration.
    pub fn config(mut self, config: SectionConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the parts, scans the source, and builds the adapter.
    ///
    /// The adapter subscribes to the source's change signals and rescans
    /// whenever they fire.
    pub fn build(self) -> Result<Arc<SectionedListAdapter<A>>> {
        let inflater = self.inflater.ok_or(Error::MissingInflater)?;
        let source = self.source.ok_or(Error::MissingAdapter)?;
        let sectionizer = self.sectionizer.ok_or(Error::MissingSectionizer)?;
        let (header_layout, title_view) = self.header.ok_or(Error::MissingHeaderLayout)?;
        validate_title_view(inflater.as_ref(), header_layout, title_view)?;

        let config = self.config;
        let sections = scan_sections(source.as_ref(), &sectionizer, &config);
        let sidebar = self.sidebar.map(|container| {
            let mut sidebar = SectionSidebar::new(container, config.sidebar_text_alignment);
            sidebar.populate(&sections);
            Mutex::new(sidebar)
        });

        let adapter = Arc::new_cyclic(|weak: &Weak<SectionedListAdapter<A>>| {
            let signals = source.signals();

            let on_changed = weak.clone();
            let changed = signals.data_set_changed.connect(move |_| {
                if let Some(adapter) = on_changed.upgrade() {
                    adapter.on_source_changed();
                }
            });

            let on_invalidated = weak.clone();
            let invalidated = signals.data_set_invalidated.connect(move |_| {
                if let Some(adapter) = on_invalidated.upgrade() {
                    adapter.on_source_invalidated();
                }
            });

            SectionedListAdapter {
                source,
                inflater,
                header_layout,
                title_view,
                sectionizer,
                sections: RwLock::new(sections),
                sidebar,
                config,
                signals: AdapterSignals::new(),
                section_signals: SectionSignals::default(),
                source_connections: [changed, invalidated],
            }
        });

        Ok(adapter)
    }
}

static_assertions::assert_impl_all!(
    SectionedListAdapter<super::ListModel<String>>: Send, Sync
);
static_assertions::assert_impl_all!(Row<String>: Send, Sync, Clone);
