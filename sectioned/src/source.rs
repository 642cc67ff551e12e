/// The data behind a sectioned list.
///
/// Counts are re-queried on every [`crate::SectionIndex::rebuild`] and never cached across
/// rebuilds. The optional methods have defaults that mirror a plain list: headers are identified
/// by their section index, items by their offset inside the section, and every header/item shares
/// kind `0`.
pub trait SectionSource {
    fn section_count(&self) -> usize;

    fn item_count(&self, section: usize) -> usize;

    fn header_id(&self, section: usize) -> u64 {
        section as u64
    }

    fn item_id(&self, section: usize, relative: usize) -> u64 {
        let _ = section;
        relative as u64
    }

    fn header_kind(&self, section: usize) -> u32 {
        let _ = section;
        0
    }

    fn item_kind(&self, section: usize, relative: usize, absolute: usize) -> u32 {
        let _ = (section, relative, absolute);
        0
    }
}

impl<T: SectionSource + ?Sized> SectionSource for &T {
    fn section_count(&self) -> usize {
        (**self).section_count()
    }

    fn item_count(&self, section: usize) -> usize {
        (**self).item_count(section)
    }

    fn header_id(&self, section: usize) -> u64 {
        (**self).header_id(section)
    }

    fn item_id(&self, section: usize, relative: usize) -> u64 {
        (**self).item_id(section, relative)
    }

    fn header_kind(&self, section: usize) -> u32 {
        (**self).header_kind(section)
    }

    fn item_kind(&self, section: usize, relative: usize, absolute: usize) -> u32 {
        (**self).item_kind(section, relative, absolute)
    }
}

/// Section sizes as a plain slice: section `s` has `self[s]` items.
impl SectionSource for [usize] {
    fn section_count(&self) -> usize {
        self.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.get(section).copied().unwrap_or(0)
    }
}

impl SectionSource for alloc::vec::Vec<usize> {
    fn section_count(&self) -> usize {
        self.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.as_slice().item_count(section)
    }
}
