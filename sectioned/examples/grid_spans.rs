// Example: span sizes for a 3-column grid where the first item of every section is wide.
use sectioned::{SectionIndex, SectionOptions, SpanQuery};

fn main() {
    let columns = 3;
    let opts = SectionOptions::new().with_row_span(Some(|q: SpanQuery| {
        if q.relative == 0 { q.full_span } else { 1 }
    }));

    let mut index = SectionIndex::new(opts);
    let total = index.rebuild(&[4usize, 2][..]);

    let spans: Vec<usize> = (0..total)
        .map(|p| index.span_size(p, columns).unwrap_or(1))
        .collect();
    println!("spans={spans:?}");
}
