/// Populates realized views with section content.
///
/// Called once per bind by [`crate::SectionedAdapter::bind`] with coordinates already resolved
/// from the flat position.
pub trait SectionBinder<V: ?Sized> {
    fn bind_header(&mut self, view: &mut V, section: usize);

    fn bind_item(&mut self, view: &mut V, section: usize, relative: usize, absolute: usize);
}

/// Layout hints for the view that was just bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindHints {
    /// The view spans the whole row in grid/staggered layouts. Set for headers.
    pub full_span: bool,
    /// The view may be returned to the recycling pool. Cleared for header views while sticky
    /// headers are enabled.
    pub recyclable: bool,
}
