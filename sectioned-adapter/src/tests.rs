use crate::*;

use alloc::vec::Vec;
use sectioned::{Error, SectionOptions, SpanQuery, ViewKind};
use std::collections::HashMap;

/// A host pool: which view is laid out at which position, and what each view is bound to.
#[derive(Default)]
struct Pool {
    laid_out: HashMap<usize, u32>,
    bound: HashMap<u32, usize>,
    left: i32,
}

impl Pool {
    fn lay_out(&mut self, view: u32, position: usize) {
        self.laid_out.insert(position, view);
        self.bound.insert(view, position);
    }

    /// The view leaves the layout but keeps its content.
    fn scroll_off(&mut self, position: usize) {
        self.laid_out.remove(&position);
    }

    /// The view is reused for another position.
    fn recycle(&mut self, view: u32, position: usize) {
        self.laid_out.retain(|_, v| *v != view);
        self.lay_out(view, position);
    }
}

impl ViewPool for Pool {
    type Handle = u32;

    fn find_by_position(&self, position: usize) -> Option<u32> {
        self.laid_out.get(&position).copied()
    }

    fn position_of(&self, handle: &u32) -> Option<usize> {
        self.bound.get(handle).copied()
    }

    fn cross_start(&self, _handle: &u32) -> i32 {
        self.left
    }
}

#[derive(Default)]
struct Canvas {
    draws: Vec<(u32, OverlayOrigin)>,
}

impl Canvas {
    fn last(&self) -> Option<u32> {
        self.draws.last().map(|(view, _)| *view)
    }
}

impl OverlaySurface<u32> for Canvas {
    fn draw_over(&mut self, handle: &u32, origin: OverlayOrigin) {
        self.draws.push((*handle, origin));
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Bound {
    Header(usize),
    Item(usize, usize, usize),
}

#[derive(Default)]
struct Recorder {
    calls: usize,
}

impl SectionBinder<Option<Bound>> for Recorder {
    fn bind_header(&mut self, view: &mut Option<Bound>, section: usize) {
        self.calls += 1;
        *view = Some(Bound::Header(section));
    }

    fn bind_item(
        &mut self,
        view: &mut Option<Bound>,
        section: usize,
        relative: usize,
        absolute: usize,
    ) {
        self.calls += 1;
        *view = Some(Bound::Item(section, relative, absolute));
    }
}

fn sticky(counts: &[usize]) -> SectionedAdapter<Vec<usize>> {
    SectionedAdapter::new(counts.to_vec(), SectionOptions::new().with_sticky_headers(true))
}

#[test]
fn header_stays_pinned_after_scrolling_off() {
    let adapter = sticky(&[3]);
    let mut overlay = adapter.attach_sticky_overlay::<u32>().unwrap();
    let mut pool = Pool {
        left: 4,
        ..Pool::default()
    };
    for p in 0..4 {
        pool.lay_out(10 + p as u32, p);
    }
    let mut canvas = Canvas::default();

    assert!(adapter.draw_sticky_header(&mut overlay, 0..4, &pool, &mut canvas));
    assert_eq!(
        canvas.draws,
        alloc::vec![(10, OverlayOrigin { main: 0, cross: 4 })]
    );
    assert_eq!(overlay.current_header(), Some(0));

    pool.scroll_off(0);
    assert!(adapter.draw_sticky_header(&mut overlay, 1..4, &pool, &mut canvas));
    assert_eq!(canvas.last(), Some(10));
    assert_eq!(canvas.draws[1].1, OverlayOrigin { main: 0, cross: 4 });
    assert_eq!(overlay.cached_len(), 1);
}

#[test]
fn first_frame_without_header_view_draws_nothing() {
    let adapter = sticky(&[3]);
    let mut overlay = adapter.attach_sticky_overlay::<u32>().unwrap();
    let mut pool = Pool::default();
    for p in 1..4 {
        pool.lay_out(10 + p as u32, p);
    }
    let mut canvas = Canvas::default();

    assert!(!adapter.draw_sticky_header(&mut overlay, 1..4, &pool, &mut canvas));
    assert!(canvas.draws.is_empty());
    assert_eq!(overlay.current_header(), None);
    assert_eq!(overlay.cached_len(), 0);
}

#[test]
fn governing_header_follows_the_first_visible_item() {
    let adapter = sticky(&[2, 2]);
    let mut overlay = adapter.attach_sticky_overlay::<u32>().unwrap();
    let mut pool = Pool::default();
    for (view, p) in [(10, 0), (11, 1), (12, 2), (20, 3), (21, 4), (22, 5)] {
        pool.lay_out(view, p);
    }
    let mut canvas = Canvas::default();

    adapter.draw_sticky_header(&mut overlay, [0, 1, 2], &pool, &mut canvas);
    assert_eq!(canvas.last(), Some(10));

    adapter.draw_sticky_header(&mut overlay, [2, 3, 4], &pool, &mut canvas);
    assert_eq!(canvas.last(), Some(10));

    // The second header is visible but headers are skipped when picking the governing item.
    adapter.draw_sticky_header(&mut overlay, [3, 4, 5], &pool, &mut canvas);
    assert_eq!(canvas.last(), Some(20));
    assert_eq!(overlay.current_header(), Some(3));
    assert_eq!(overlay.cached_len(), 2);
}

#[test]
fn recycled_header_view_is_evicted_from_cache() {
    let adapter = sticky(&[3]);
    let mut overlay = adapter.attach_sticky_overlay::<u32>().unwrap();
    let mut pool = Pool::default();
    pool.lay_out(10, 0);
    pool.lay_out(11, 1);
    let mut canvas = Canvas::default();

    adapter.draw_sticky_header(&mut overlay, [0, 1], &pool, &mut canvas);
    assert_eq!(overlay.cached_len(), 1);

    pool.recycle(10, 3);
    // No live view for header 0: the previously drawn view is kept on screen.
    assert!(adapter.draw_sticky_header(&mut overlay, [1, 2, 3], &pool, &mut canvas));
    assert_eq!(canvas.last(), Some(10));
    assert_eq!(overlay.cached_len(), 0);

    pool.lay_out(30, 0);
    adapter.draw_sticky_header(&mut overlay, [0, 1], &pool, &mut canvas);
    assert_eq!(canvas.last(), Some(30));
    assert_eq!(overlay.cached_len(), 1);
}

#[test]
fn viewport_of_headers_keeps_previous_header() {
    let adapter = SectionedAdapter::new(
        alloc::vec![1usize, 0, 0],
        SectionOptions::new()
            .with_sticky_headers(true)
            .with_show_headers_for_empty_sections(true),
    );
    let mut overlay = adapter.attach_sticky_overlay::<u32>().unwrap();
    let mut pool = Pool::default();
    pool.lay_out(10, 0);
    let mut canvas = Canvas::default();

    adapter.draw_sticky_header(&mut overlay, [0, 1], &pool, &mut canvas);
    assert!(adapter.draw_sticky_header(&mut overlay, [2, 3], &pool, &mut canvas));
    assert_eq!(canvas.draws.len(), 2);
    assert_eq!(canvas.last(), Some(10));
    assert_eq!(overlay.current_header(), Some(0));
}

#[test]
fn overlay_is_only_attached_when_sticky() {
    let mut adapter = SectionedAdapter::new(alloc::vec![2usize], SectionOptions::new());
    assert!(adapter.attach_sticky_overlay::<u32>().is_none());

    adapter.set_sticky_headers(true);
    let mut overlay = adapter.attach_sticky_overlay::<u32>().unwrap();
    assert!(overlay.is_enabled());

    let mut pool = Pool::default();
    pool.lay_out(10, 0);
    let mut canvas = Canvas::default();
    overlay.set_enabled(false);
    assert!(!adapter.draw_sticky_header(&mut overlay, [0, 1], &pool, &mut canvas));
    assert!(canvas.draws.is_empty());

    overlay.set_enabled(true);
    assert!(adapter.draw_sticky_header(&mut overlay, [0, 1], &pool, &mut canvas));
    overlay.clear();
    assert_eq!(overlay.current_header(), None);
    assert_eq!(overlay.cached_len(), 0);
}

#[test]
fn bind_routes_to_header_and_item_callbacks() {
    let adapter = sticky(&[2, 0, 1]);
    let mut recorder = Recorder::default();

    let mut view = None;
    let hints = adapter.bind(0, &mut view, &mut recorder).unwrap();
    assert_eq!(view, Some(Bound::Header(0)));
    assert_eq!(
        hints,
        BindHints {
            full_span: true,
            recyclable: false,
        }
    );

    let hints = adapter.bind(4, &mut view, &mut recorder).unwrap();
    assert_eq!(view, Some(Bound::Item(2, 0, 2)));
    assert_eq!(
        hints,
        BindHints {
            full_span: false,
            recyclable: true,
        }
    );

    let mut untouched: Option<Bound> = None;
    assert_eq!(
        adapter.bind(5, &mut untouched, &mut recorder),
        Err(Error::OutOfBounds {
            position: 5,
            total: 5
        })
    );
    assert_eq!(untouched, None);
    assert_eq!(recorder.calls, 2);
}

#[test]
fn header_views_are_recyclable_without_sticky_headers() {
    let adapter = SectionedAdapter::new(alloc::vec![1usize], SectionOptions::new());
    let mut view: Option<Bound> = None;
    let hints = adapter.bind(0, &mut view, &mut Recorder::default()).unwrap();
    assert!(hints.full_span);
    assert!(hints.recyclable);
}

#[test]
fn counts_change_only_on_notify() {
    let mut adapter = SectionedAdapter::new(alloc::vec![2usize], SectionOptions::new());
    assert_eq!(adapter.item_count(), 3);

    adapter.source_mut().push(4);
    assert_eq!(adapter.item_count(), 3);
    assert_eq!(adapter.notify_data_changed(), 8);
    assert_eq!(adapter.item_count(), 8);
    assert!(adapter.is_header(3));
    assert_eq!(adapter.index().header_section(3), Ok(1));

    adapter.source_mut()[0] = 0;
    adapter.notify_data_changed();
    assert_eq!(adapter.item_count(), 5);
    assert_eq!(adapter.into_source(), alloc::vec![0, 4]);
}

#[test]
fn toggling_empty_headers_rebuilds() {
    let mut adapter = SectionedAdapter::new(alloc::vec![1usize, 0, 1], SectionOptions::new());
    assert_eq!(adapter.item_count(), 4);

    adapter.set_show_headers_for_empty_sections(true);
    assert_eq!(adapter.item_count(), 5);
    assert_eq!(adapter.index().header_section(2), Ok(1));
    assert!(adapter.options().show_headers_for_empty_sections);
}

#[test]
fn span_lookup_uses_row_span_policy() {
    let mut adapter = SectionedAdapter::new(alloc::vec![3usize], SectionOptions::new());
    {
        let lookup = adapter.span_lookup(4);
        assert_eq!((0..4).map(&lookup).collect::<Vec<_>>(), alloc::vec![4, 1, 1, 1]);
    }

    adapter.set_row_span(Some(|q: SpanQuery| {
        if q.absolute % 2 == 0 { 2 } else { 1 }
    }));
    let lookup = adapter.span_lookup(4);
    assert_eq!((0..4).map(&lookup).collect::<Vec<_>>(), alloc::vec![4, 2, 1, 2]);
    // Unresolvable positions take one cell.
    assert_eq!(lookup(10), 1);
    assert_eq!(
        adapter.span_size(10, 4),
        Err(Error::OutOfBounds {
            position: 10,
            total: 4
        })
    );
}

#[test]
fn ids_and_kinds_go_through_the_source() {
    let adapter = SectionedAdapter::new(alloc::vec![2usize, 1], SectionOptions::new());
    assert_eq!(adapter.item_id(0), Ok(0));
    assert_eq!(adapter.item_id(2), Ok(1));
    assert_eq!(adapter.item_id(3), Ok(1));
    assert_eq!(adapter.view_kind(3), Ok(ViewKind::Header(0)));
    assert_eq!(adapter.view_kind(4), Ok(ViewKind::Item(0)));
    assert_eq!(adapter.row(4).map(|row| row.section()), Ok(1));
}
