use sectioned::{Result, Row, SectionIndex, SectionOptions, SectionSource, SpanQuery, ViewKind};

use crate::{BindHints, OverlaySurface, SectionBinder, StickyOverlay, ViewPool};

/// A framework-neutral adapter that wraps a [`SectionSource`] and a [`SectionIndex`] and exposes
/// the protocol a virtualized list host expects: a flat count plus per-position ids, view kinds,
/// spans and binding.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `notify_data_changed` whenever section or item counts may have changed
/// - the per-position queries while laying out rows
/// - `bind` to populate a realized view
///
/// Counting never mutates: the index is only rebuilt by `notify_data_changed` and by the
/// configuration setters.
#[derive(Clone, Debug)]
pub struct SectionedAdapter<S> {
    source: S,
    index: SectionIndex,
}

impl<S: SectionSource> SectionedAdapter<S> {
    /// Creates an adapter and builds the index for the current contents of `source`.
    pub fn new(source: S, options: SectionOptions) -> Self {
        let mut index = SectionIndex::new(options);
        index.rebuild(&source);
        Self { source, index }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the data. Call `notify_data_changed` once the counts are updated.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn index(&self) -> &SectionIndex {
        &self.index
    }

    pub fn options(&self) -> &SectionOptions {
        self.index.options()
    }

    /// Rebuilds the index from the source and returns the new flat count.
    pub fn notify_data_changed(&mut self) -> usize {
        let total = self.index.rebuild(&self.source);
        adebug!(total, "SectionedAdapter::notify_data_changed");
        total
    }

    pub fn set_show_headers_for_empty_sections(&mut self, show: bool) {
        if self.options().show_headers_for_empty_sections == show {
            return;
        }
        self.index.update_options(|o| o.show_headers_for_empty_sections = show);
        self.notify_data_changed();
    }

    /// Toggles sticky headers. Takes effect for overlays attached afterwards and for the
    /// recyclability hint of header views bound afterwards.
    pub fn set_sticky_headers(&mut self, sticky: bool) {
        self.index.update_options(|o| o.sticky_headers = sticky);
    }

    pub fn set_row_span(
        &mut self,
        row_span: Option<impl Fn(SpanQuery) -> usize + Send + Sync + 'static>,
    ) {
        let options = self.options().clone().with_row_span(row_span);
        self.index.set_options(options);
    }

    /// Flat count as of the last rebuild.
    pub fn item_count(&self) -> usize {
        self.index.total_count()
    }

    pub fn is_header(&self, position: usize) -> bool {
        self.index.is_header(position)
    }

    pub fn row(&self, position: usize) -> Result<Row> {
        self.index.row(position)
    }

    pub fn item_id(&self, position: usize) -> Result<u64> {
        self.index.stable_id(position, &self.source)
    }

    pub fn view_kind(&self, position: usize) -> Result<ViewKind> {
        self.index.view_kind(position, &self.source)
    }

    pub fn span_size(&self, position: usize, full_span: usize) -> Result<usize> {
        self.index.span_size(position, full_span)
    }

    /// A span lookup for grid layouts with `full_span` columns.
    ///
    /// Positions that fail to resolve take a single cell.
    pub fn span_lookup(&self, full_span: usize) -> impl Fn(usize) -> usize + '_ {
        move |position| match self.index.span_size(position, full_span) {
            Ok(span) => span,
            Err(_err) => {
                awarn!(err = %_err, position, "SectionedAdapter: span lookup failed");
                1
            }
        }
    }

    /// Routes a bind request for `position` to the header or item callback of `binder`.
    ///
    /// Errors are returned before `binder` is called, so a view is never populated with content
    /// from a guessed section.
    pub fn bind<V, B>(&self, position: usize, view: &mut V, binder: &mut B) -> Result<BindHints>
    where
        V: ?Sized,
        B: SectionBinder<V> + ?Sized,
    {
        match self.index.row(position)? {
            Row::Header { section } => {
                binder.bind_header(view, section);
                Ok(BindHints {
                    full_span: true,
                    recyclable: !self.options().sticky_headers,
                })
            }
            Row::Item(item) => {
                binder.bind_item(view, item.section, item.relative, item.absolute);
                Ok(BindHints {
                    full_span: false,
                    recyclable: true,
                })
            }
        }
    }

    /// Returns a sticky overlay when sticky headers are enabled.
    ///
    /// Call this when the adapter is attached to a host and keep the overlay next to it.
    pub fn attach_sticky_overlay<H: Clone>(&self) -> Option<StickyOverlay<H>> {
        self.options().sticky_headers.then(StickyOverlay::new)
    }

    /// Runs one overlay draw pass against this adapter's index.
    pub fn draw_sticky_header<P, D>(
        &self,
        overlay: &mut StickyOverlay<P::Handle>,
        visible: impl IntoIterator<Item = usize>,
        pool: &P,
        surface: &mut D,
    ) -> bool
    where
        P: ViewPool,
        D: OverlaySurface<P::Handle> + ?Sized,
    {
        overlay.on_draw_over(&self.index, visible, pool, surface)
    }
}
