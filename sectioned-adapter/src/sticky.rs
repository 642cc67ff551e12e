use sectioned::SectionIndex;

use crate::cache::HandleCache;
use crate::{OverlayOrigin, OverlaySurface, ViewPool};

/// Draws a floating copy of the header governing the top of the viewport.
///
/// The overlay never touches layout: on each draw pass it picks the header of the first visible
/// item slot and paints that header's view again, pinned to the leading edge, after normal
/// content.
///
/// Header views are looked up through the host's [`ViewPool`] and cached per header position.
/// Cache entries are only hints: each one is re-validated against the pool before use and
/// evicted when the view was rebound elsewhere. When the governing header has no realized view
/// (typically because it just scrolled out), the previously drawn view keeps being used.
#[derive(Clone, Debug)]
pub struct StickyOverlay<H> {
    enabled: bool,
    cache: HandleCache<H>,
    current: Option<(usize, H)>,
}

impl<H: Clone> Default for StickyOverlay<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Clone> StickyOverlay<H> {
    pub fn new() -> Self {
        Self {
            enabled: true,
            cache: HandleCache::new(),
            current: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling keeps the cache but makes draw passes no-ops.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flat position of the header drawn by the last pass.
    pub fn current_header(&self) -> Option<usize> {
        self.current.as_ref().map(|(position, _)| *position)
    }

    pub fn current_handle(&self) -> Option<&H> {
        self.current.as_ref().map(|(_, handle)| handle)
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Forgets every cached handle and the current header.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.current = None;
    }

    /// Picks the header view to draw for the given visible children.
    ///
    /// `visible` yields the flat positions of the visible children, front to back. Returns the
    /// handle that the next composite step will paint, if any.
    pub fn select<P>(
        &mut self,
        index: &SectionIndex,
        visible: impl IntoIterator<Item = usize>,
        pool: &P,
    ) -> Option<&H>
    where
        P: ViewPool<Handle = H>,
    {
        let Some(position) = visible.into_iter().find(|&p| !index.is_header(p)) else {
            atrace!("StickyOverlay: no item slot visible, keeping previous");
            return self.current_handle();
        };
        let header = match index.governing_header(position) {
            Ok(header) => header,
            Err(_err) => {
                awarn!(err = %_err, position, "StickyOverlay: no governing header");
                return self.current_handle();
            }
        };
        match self.lookup(header, pool) {
            Some(handle) => self.current = Some((header, handle)),
            None => {
                adebug!(
                    header,
                    previous = ?self.current_header(),
                    "StickyOverlay: header view not realized, keeping previous"
                );
            }
        }
        self.current_handle()
    }

    /// Runs one draw pass: selects the governing header and paints it over the viewport.
    ///
    /// Returns `true` when something was drawn.
    pub fn on_draw_over<P, D>(
        &mut self,
        index: &SectionIndex,
        visible: impl IntoIterator<Item = usize>,
        pool: &P,
        surface: &mut D,
    ) -> bool
    where
        P: ViewPool<Handle = H>,
        D: OverlaySurface<H> + ?Sized,
    {
        if !self.enabled {
            return false;
        }
        self.select(index, visible, pool);
        let Some((_header, handle)) = &self.current else {
            return false;
        };
        let origin = OverlayOrigin {
            main: 0,
            cross: pool.cross_start(handle),
        };
        atrace!(
            header = *_header,
            cross = origin.cross,
            "StickyOverlay::on_draw_over"
        );
        surface.draw_over(handle, origin);
        true
    }

    fn lookup<P>(&mut self, header: usize, pool: &P) -> Option<H>
    where
        P: ViewPool<Handle = H>,
    {
        if let Some(handle) = self.cache.get(&header).cloned() {
            if pool.position_of(&handle) == Some(header) {
                return Some(handle);
            }
            atrace!(header, "StickyOverlay: evicting stale header view");
            self.cache.remove(&header);
        }
        let handle = pool.find_by_position(header)?;
        self.cache.insert(header, handle.clone());
        Some(handle)
    }
}
