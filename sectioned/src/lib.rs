//! Section and header index mapping for headless virtualized lists.
//!
//! A virtualized list widget addresses rows through a single flat index. This crate lets such a
//! widget present data grouped into sections, each preceded by a header slot, by translating
//! between the flat index space and `(section, relative, absolute)` coordinates.
//!
//! It is UI-agnostic. The data layer is expected to provide:
//! - the number of sections and the item count of each section ([`SectionSource`])
//! - optional stable ids and view kinds for headers and items
//!
//! For the host-facing adapter and the sticky header overlay, see the `sectioned-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod index;
mod options;
mod source;
mod types;


pub use error::{Error, Result};
pub use index::SectionIndex;
pub use options::{RowSpan, SectionOptions};
pub use source::SectionSource;
pub use types::{HeaderSlot, ItemPosition, Row, SpanQuery, ViewKind};
