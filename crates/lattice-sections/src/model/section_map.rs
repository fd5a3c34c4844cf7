//! Section header positions for a sectioned list.
//!
//! A `SectionMap` records where header rows sit once they are interleaved
//! with the items of a list that is grouped by section title. It is the
//! mapping a [`SectionedListAdapter`](super::SectionedListAdapter) consults to
//! translate between *decorated* positions (headers and items, as the host
//! list sees them) and *undecorated* positions (indices into the wrapped data).

use std::slice;

/// One section: its title and the decorated position of its header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Title shown in the header row.
    pub title: String,
    /// Decorated position of the header row.
    pub position: usize,
}

impl Section {
    /// Returns the first character of the title, or `""` for an empty title.
    pub fn initial(&self) -> &str {
        self.title
            .chars()
            .next()
            .map_or("", |c| &self.title[..c.len_utf8()])
    }
}

/// Ordered header positions for a list grouped by section title.
///
/// Sections are kept in on-screen order and their positions are strictly
/// increasing. Each header sits immediately before the first item of its
/// section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: Vec<Section>,
    item_count: usize,
}

impl SectionMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from the section titles of the wrapped items, in order.
    ///
    /// # Example
    ///
    /// ```
    /// use lattice_sections::model::SectionMap;
    ///
    /// let map = SectionMap::scan(["A", "A", "B", "B", "B", "C"]);
    /// let positions: Vec<_> = map.iter().map(|s| (s.title.as_str(), s.position)).collect();
    /// assert_eq!(positions, [("A", 0), ("B", 3), ("C", 7)]);
    /// assert_eq!(map.decorated_len(), 9);
    /// ```
    pub fn scan<I>(titles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut map = Self::new();
        map.rebuild(titles);
        map
    }

    /// Discards all sections and rescans `titles` in a single forward pass.
    ///
    /// A header is recorded whenever an item's title differs from the title of
    /// the section currently open. A title that reappears after a different
    /// one opens a new section rather than merging with the earlier one.
    pub fn rebuild<I>(&mut self, titles: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.rebuild_with_gaps(titles.into_iter().map(Some));
    }

    /// Builds a map from titles where some items have none.
    ///
    /// An untitled item stays in the section currently open (or before the
    /// first header if none is open yet) and never opens a header itself.
    pub fn scan_with_gaps<I, T>(titles: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
        T: Into<String>,
    {
        let mut map = Self::new();
        map.rebuild_with_gaps(titles);
        map
    }

    /// Like [`rebuild`](Self::rebuild), for titles where some items have none.
    pub fn rebuild_with_gaps<I, T>(&mut self, titles: I)
    where
        I: IntoIterator<Item = Option<T>>,
        T: Into<String>,
    {
        self.sections.clear();
        self.item_count = 0;

        for (index, title) in titles.into_iter().enumerate() {
            self.item_count = index + 1;
            let Some(title) = title.map(Into::into) else {
                continue;
            };
            if self.sections.last().is_some_and(|open| open.title == title) {
                continue;
            }
            let position = index + self.sections.len();
            self.sections.push(Section { title, position });
        }
    }

    /// Returns the number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if there are no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the number of wrapped items seen by the last scan.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns the number of rows once headers are interleaved with items.
    pub fn decorated_len(&self) -> usize {
        self.item_count + self.sections.len()
    }

    /// Iterates over the sections in order.
    pub fn iter(&self) -> slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Returns the sections as a slice.
    pub fn as_slice(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the full section titles, in order.
    pub fn titles(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.title.clone()).collect()
    }

    /// Returns the first character of every section title, in order.
    pub fn initials(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.initial().to_string()).collect()
    }

    // -------------------------------------------------------------------------
    // Position queries
    // -------------------------------------------------------------------------

    /// Returns the ordinal of the section whose header sits at `position`.
    pub fn header_ordinal(&self, position: usize) -> Option<usize> {
        self.sections
            .binary_search_by_key(&position, |s| s.position)
            .ok()
    }

    /// Returns the section whose header sits at `position`.
    pub fn header_at(&self, position: usize) -> Option<&Section> {
        self.header_ordinal(position).map(|i| &self.sections[i])
    }

    /// Returns `true` if `position` is a header row.
    pub fn is_header(&self, position: usize) -> bool {
        self.header_ordinal(position).is_some()
    }

    /// Returns the title of the header at `position`, or `None` for item rows.
    pub fn title_at(&self, position: usize) -> Option<&str> {
        self.header_at(position).map(|s| s.title.as_str())
    }

    /// Translates a decorated position into an index into the wrapped items.
    ///
    /// This is `position` minus the number of headers above it. For a header
    /// row it yields the index of the first item of that section.
    pub fn undecorated_index(&self, position: usize) -> usize {
        position - self.sections.partition_point(|s| s.position < position)
    }

    /// Translates an index into the wrapped items into its decorated position.
    pub fn decorated_position(&self, index: usize) -> usize {
        let mut position = index;
        for section in &self.sections {
            if section.position > position {
                break;
            }
            position += 1;
        }
        position
    }

    /// Returns the header position of section `ordinal`.
    ///
    /// An ordinal past the last section is returned unchanged.
    pub fn position_for_section(&self, ordinal: usize) -> usize {
        self.sections.get(ordinal).map_or(ordinal, |s| s.position)
    }

    /// Returns the ordinal of the section containing `position`.
    ///
    /// A position outside the decorated list is returned unchanged.
    pub fn section_for_position(&self, position: usize) -> usize {
        if position >= self.decorated_len() {
            return position;
        }
        match self.sections.partition_point(|s| s.position <= position) {
            0 => position,
            n => n - 1,
        }
    }

    /// Returns the header position of the first section whose title starts
    /// with the character `initial`.
    pub fn position_for_initial(&self, initial: &str) -> Option<usize> {
        self.sections
            .iter()
            .find(|s| !initial.is_empty() && s.initial() == initial)
            .map(|s| s.position)
    }
}

impl<'a> IntoIterator for &'a SectionMap {
    type Item = &'a Section;
    type IntoIter = slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
