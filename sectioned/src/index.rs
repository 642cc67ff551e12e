use alloc::vec::Vec;

use crate::{
    Error, HeaderSlot, ItemPosition, Result, Row, SectionOptions, SectionSource, SpanQuery,
    ViewKind,
};

/// Maps a flat list index space onto sections with interleaved header slots.
///
/// The index holds two derived maps, both rebuilt from scratch by [`SectionIndex::rebuild`]:
/// - header flat position → section, ordered by position (and therefore by section)
/// - item flat position → flat position of the header governing it
///
/// Positional queries are only meaningful for the data state seen by the last rebuild. The index
/// does not detect data changes on its own; it only reports [`Error::NotBuilt`] before the first
/// rebuild and after a layout-affecting option change.
#[derive(Clone, Debug, Default)]
pub struct SectionIndex {
    options: SectionOptions,
    headers: Vec<HeaderSlot>,
    governing: Vec<Option<usize>>, // one entry per flat position, `None` for header slots
    total: usize,
    generation: u64,
    built: bool,
}

impl SectionIndex {
    pub fn new(options: SectionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &SectionOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// Toggling `show_headers_for_empty_sections` changes the layout, so the index must be
    /// rebuilt before it answers queries again.
    pub fn set_options(&mut self, options: SectionOptions) {
        if options.show_headers_for_empty_sections != self.options.show_headers_for_empty_sections
        {
            self.built = false;
        }
        self.options = options;
        strace!(built = self.built, "SectionIndex::set_options");
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SectionOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Rebuilds both maps from the current counts of `source` and returns the total flat count.
    ///
    /// Sections are laid out back to back. A section gets a header slot followed by its items
    /// when it has items or when headers for empty sections are shown; otherwise it contributes
    /// no slots at all.
    pub fn rebuild<S: SectionSource + ?Sized>(&mut self, source: &S) -> usize {
        self.headers.clear();
        self.governing.clear();

        let show_empty = self.options.show_headers_for_empty_sections;
        let sections = source.section_count();
        let mut count = 0usize;
        for section in 0..sections {
            let items = source.item_count(section);
            if items == 0 && !show_empty {
                continue;
            }
            self.headers.push(HeaderSlot {
                position: count,
                section,
            });
            self.governing.push(None);
            self.governing.extend(core::iter::repeat_n(Some(count), items));
            count += items + 1;
        }
        debug_assert_eq!(self.governing.len(), count);

        self.total = count;
        self.generation = self.generation.wrapping_add(1);
        self.built = true;
        sdebug!(
            sections,
            headers = self.headers.len(),
            total = count,
            generation = self.generation,
            "SectionIndex::rebuild"
        );
        count
    }

    /// Total flat count as of the last rebuild.
    pub fn total_count(&self) -> usize {
        self.total
    }

    /// Incremented on every rebuild.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// Iterates the header location map in flat order.
    pub fn headers(&self) -> impl ExactSizeIterator<Item = HeaderSlot> + '_ {
        self.headers.iter().copied()
    }

    pub fn is_header(&self, position: usize) -> bool {
        self.built && self.header_ordinal(position).is_some()
    }

    /// Resolves an item slot to its section, its offset in the section and its offset among all
    /// items.
    ///
    /// Fails on header slots and on positions outside `[0, total_count)`.
    pub fn resolve(&self, position: usize) -> Result<ItemPosition> {
        self.check(position)?;

        let preceding = self.headers.partition_point(|h| h.position <= position);
        let Some(ordinal) = preceding.checked_sub(1) else {
            return Err(self.reject(Error::Orphan { position }));
        };
        let header = self.headers[ordinal];
        if header.position == position {
            return Err(self.reject(Error::HeaderPosition { position }));
        }

        Ok(ItemPosition {
            section: header.section,
            relative: position - header.position - 1,
            absolute: position - preceding,
        })
    }

    /// Returns the section of a header slot.
    pub fn header_section(&self, position: usize) -> Result<usize> {
        self.check(position)?;
        match self.header_ordinal(position) {
            Some(i) => Ok(self.headers[i].section),
            None => Err(self.reject(Error::NotHeader { position })),
        }
    }

    /// Returns the flat position of a section's header, or `None` if the section has no slot.
    pub fn header_position(&self, section: usize) -> Option<usize> {
        let i = self.section_ordinal(section)?;
        Some(self.headers[i].position)
    }

    /// Number of item slots of a shown section.
    pub fn section_len(&self, section: usize) -> Option<usize> {
        let i = self.section_ordinal(section)?;
        let start = self.headers[i].position;
        let end = self
            .headers
            .get(i + 1)
            .map_or(self.total, |next| next.position);
        Some(end - start - 1)
    }

    /// Maps `(section, relative)` back to a flat position.
    pub fn flat_position(&self, section: usize, relative: usize) -> Option<usize> {
        if relative >= self.section_len(section)? {
            return None;
        }
        Some(self.header_position(section)? + 1 + relative)
    }

    /// Returns the flat position of the header governing an item slot in O(1).
    pub fn governing_header(&self, position: usize) -> Result<usize> {
        self.check(position)?;
        match self.governing[position] {
            Some(header) => Ok(header),
            None if self.is_header(position) => {
                Err(self.reject(Error::HeaderPosition { position }))
            }
            None => Err(self.reject(Error::Orphan { position })),
        }
    }

    pub fn row(&self, position: usize) -> Result<Row> {
        self.check(position)?;
        if let Some(i) = self.header_ordinal(position) {
            return Ok(Row::Header {
                section: self.headers[i].section,
            });
        }
        self.resolve(position).map(Row::Item)
    }

    /// Number of grid cells the slot at `position` occupies.
    ///
    /// Headers take `full_span`; items go through the configured row span policy.
    pub fn span_size(&self, position: usize, full_span: usize) -> Result<usize> {
        Ok(match self.row(position)? {
            Row::Header { .. } => full_span,
            Row::Item(item) => self.options.item_span(SpanQuery {
                full_span,
                section: item.section,
                relative: item.relative,
                absolute: item.absolute,
            }),
        })
    }

    pub fn stable_id<S: SectionSource + ?Sized>(&self, position: usize, source: &S) -> Result<u64> {
        Ok(match self.row(position)? {
            Row::Header { section } => source.header_id(section),
            Row::Item(item) => source.item_id(item.section, item.relative),
        })
    }

    pub fn view_kind<S: SectionSource + ?Sized>(
        &self,
        position: usize,
        source: &S,
    ) -> Result<ViewKind> {
        Ok(match self.row(position)? {
            Row::Header { section } => ViewKind::Header(source.header_kind(section)),
            Row::Item(item) => {
                ViewKind::Item(source.item_kind(item.section, item.relative, item.absolute))
            }
        })
    }

    fn check(&self, position: usize) -> Result<()> {
        if !self.built {
            return Err(self.reject(Error::NotBuilt));
        }
        if position >= self.total {
            return Err(self.reject(Error::OutOfBounds {
                position,
                total: self.total,
            }));
        }
        Ok(())
    }

    fn reject(&self, err: Error) -> Error {
        strace!(%err, generation = self.generation, "SectionIndex: rejected query");
        err
    }

    fn header_ordinal(&self, position: usize) -> Option<usize> {
        self.headers.binary_search_by_key(&position, |h| h.position).ok()
    }

    // Shown sections are strictly increasing along with their header positions.
    fn section_ordinal(&self, section: usize) -> Option<usize> {
        if !self.built {
            return None;
        }
        self.headers.binary_search_by_key(&section, |h| h.section).ok()
    }
}
