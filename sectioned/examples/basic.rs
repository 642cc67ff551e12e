use sectioned::{Row, SectionIndex, SectionOptions};

fn main() {
    // Three sections; the second one is empty.
    let counts = vec![2usize, 0, 1];

    let mut index = SectionIndex::new(SectionOptions::new());
    let total = index.rebuild(&counts);
    println!("total={total}");
    for position in 0..total {
        match index.row(position) {
            Ok(Row::Header { section }) => println!("{position}: header of section {section}"),
            Ok(Row::Item(it)) => println!(
                "{position}:   item {}.{} (absolute {})",
                it.section, it.relative, it.absolute
            ),
            Err(err) => println!("{position}: {err}"),
        }
    }

    // Empty sections can still get a header.
    index.update_options(|o| o.show_headers_for_empty_sections = true);
    println!("total with empty headers={}", index.rebuild(&counts));
    println!("header of section 1 at {:?}", index.header_position(1));

    // Headers never resolve to an item.
    println!("resolve(0) = {:?}", index.resolve(0));
}
