/// The host widget's pool of realized views, seen from the sticky overlay.
///
/// Handles are lookups into the pool, never owners: a handle may be recycled and rebound to a
/// different position at any time, which is why the overlay re-validates cached handles with
/// [`ViewPool::position_of`] before every use.
pub trait ViewPool {
    type Handle: Clone;

    /// Returns the view currently laid out for `position`, if any.
    fn find_by_position(&self, position: usize) -> Option<Self::Handle>;

    /// Flat position the view is currently bound to, or `None` once it was unbound.
    fn position_of(&self, handle: &Self::Handle) -> Option<usize>;

    /// Leading edge of the view on the cross axis (the left edge for vertical lists).
    fn cross_start(&self, handle: &Self::Handle) -> i32;
}

/// Where an overlay view is painted, relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayOrigin {
    /// Offset on the scroll axis. The sticky header is pinned to the leading edge, i.e. `0`.
    pub main: i32,
    pub cross: i32,
}

/// A rendering surface that paints pre-measured views after normal content.
pub trait OverlaySurface<H> {
    fn draw_over(&mut self, handle: &H, origin: OverlayOrigin);
}
