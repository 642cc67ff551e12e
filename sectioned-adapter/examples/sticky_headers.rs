// Example: a host simulation driving SectionedAdapter + StickyOverlay.
use std::collections::HashMap;

use sectioned::{SectionOptions, SectionSource};
use sectioned_adapter::{OverlayOrigin, OverlaySurface, SectionBinder, SectionedAdapter, ViewPool};

struct Contacts {
    groups: Vec<(char, Vec<&'static str>)>,
}

impl SectionSource for Contacts {
    fn section_count(&self) -> usize {
        self.groups.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.groups[section].1.len()
    }
}

/// Views are plain strings; the pool maps positions to view slots.
#[derive(Default)]
struct Host {
    views: Vec<String>,
    bound: HashMap<usize, usize>, // view -> position
    laid_out: HashMap<usize, usize>, // position -> view
}

impl ViewPool for Host {
    type Handle = usize;

    fn find_by_position(&self, position: usize) -> Option<usize> {
        self.laid_out.get(&position).copied()
    }

    fn position_of(&self, handle: &usize) -> Option<usize> {
        self.bound.get(handle).copied()
    }

    fn cross_start(&self, _handle: &usize) -> i32 {
        0
    }
}

struct Binder<'a> {
    contacts: &'a Contacts,
}

impl SectionBinder<String> for Binder<'_> {
    fn bind_header(&mut self, view: &mut String, section: usize) {
        *view = format!("== {} ==", self.contacts.groups[section].0);
    }

    fn bind_item(&mut self, view: &mut String, section: usize, relative: usize, _absolute: usize) {
        *view = self.contacts.groups[section].1[relative].to_string();
    }
}

struct Terminal<'a> {
    views: &'a [String],
}

impl OverlaySurface<usize> for Terminal<'_> {
    fn draw_over(&mut self, handle: &usize, origin: OverlayOrigin) {
        println!("  sticky @({}, {}): {}", origin.cross, origin.main, self.views[*handle]);
    }
}

fn main() {
    let contacts = Contacts {
        groups: vec![
            ('A', vec!["Ada", "Alan", "Alonzo"]),
            ('B', vec![]),
            ('G', vec!["Grace", "Guido"]),
        ],
    };
    let adapter = SectionedAdapter::new(&contacts, SectionOptions::new().with_sticky_headers(true));
    let mut overlay = adapter
        .attach_sticky_overlay::<usize>()
        .expect("sticky headers are enabled");

    let mut host = Host::default();
    let viewport = 3;
    for first in 0..adapter.item_count().saturating_sub(viewport - 1) {
        let visible: Vec<usize> = (first..first + viewport).collect();

        // Lay out: one view slot per position, bound on first use.
        host.laid_out.clear();
        for &p in &visible {
            if host.views.len() <= p {
                host.views.resize(p + 1, String::new());
            }
            let mut view = String::new();
            match adapter.bind(p, &mut view, &mut Binder { contacts: &contacts }) {
                Ok(_hints) => host.views[p] = view,
                Err(err) => println!("bind failed: {err}"),
            }
            host.laid_out.insert(p, p);
            host.bound.insert(p, p);
        }

        println!("frame {first}: {:?}", &host.views[first..first + viewport]);
        let Host { views, .. } = &host;
        let mut terminal = Terminal { views };
        adapter.draw_sticky_header(&mut overlay, visible.iter().copied(), &host, &mut terminal);
    }
}
