use alloc::sync::Arc;

use crate::SpanQuery;

/// A policy returning how many grid cells an item occupies.
///
/// Headers never go through this policy: they always take the full row.
pub type RowSpan = Arc<dyn Fn(SpanQuery) -> usize + Send + Sync>;

/// Configuration for [`crate::SectionIndex`].
///
/// Cheap to clone: the span policy is stored in an `Arc`.
#[derive(Clone, Default)]
pub struct SectionOptions {
    /// Give zero-item sections a header slot. When unset, empty sections contribute nothing to
    /// the flat index space.
    pub show_headers_for_empty_sections: bool,

    /// Enables the sticky header overlay in adapters.
    pub sticky_headers: bool,

    /// Span policy for item slots. `None` means one cell per item.
    pub row_span: Option<RowSpan>,
}

impl SectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_show_headers_for_empty_sections(mut self, show: bool) -> Self {
        self.show_headers_for_empty_sections = show;
        self
    }

    pub fn with_sticky_headers(mut self, sticky: bool) -> Self {
        self.sticky_headers = sticky;
        self
    }

    pub fn with_row_span(
        mut self,
        row_span: Option<impl Fn(SpanQuery) -> usize + Send + Sync + 'static>,
    ) -> Self {
        self.row_span = row_span.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn item_span(&self, query: SpanQuery) -> usize {
        match &self.row_span {
            Some(f) => f(query),
            None => 1,
        }
    }
}

impl core::fmt::Debug for SectionOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SectionOptions")
            .field(
                "show_headers_for_empty_sections",
                &self.show_headers_for_empty_sections,
            )
            .field("sticky_headers", &self.sticky_headers)
            .field("row_span", &self.row_span.as_ref().map(|_| ".."))
            .finish()
    }
}
