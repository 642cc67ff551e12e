/// A resolved item slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPosition {
    pub section: usize,
    /// Offset of the item inside its section (`0..item_count(section)`).
    pub relative: usize,
    /// Offset of the item among all item slots, headers excluded.
    pub absolute: usize,
}

/// What a flat position holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Row {
    Header { section: usize },
    Item(ItemPosition),
}

impl Row {
    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }

    pub fn section(&self) -> usize {
        match self {
            Self::Header { section } => *section,
            Self::Item(item) => item.section,
        }
    }
}

/// View kind reported to the host for recycling.
///
/// The tag keeps header and item kinds in separate namespaces, so a data source can use any
/// `u32` for either without colliding with the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewKind {
    Header(u32),
    Item(u32),
}

impl ViewKind {
    pub fn is_header(self) -> bool {
        matches!(self, Self::Header(_))
    }

    /// The data-source supplied kind, without its tag.
    pub fn kind(self) -> u32 {
        match self {
            Self::Header(k) | Self::Item(k) => k,
        }
    }
}

/// An entry of the header location map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderSlot {
    /// Flat position of the header.
    pub position: usize,
    pub section: usize,
}

/// Arguments passed to a [`crate::RowSpan`] policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanQuery {
    /// Number of cells in a full grid row.
    pub full_span: usize,
    pub section: usize,
    pub relative: usize,
    pub absolute: usize,
}
