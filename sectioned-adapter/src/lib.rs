//! Adapter utilities for the `sectioned` crate.
//!
//! The `sectioned` crate is UI-agnostic and only maps positions. This crate provides the pieces a
//! host list widget needs on top of it:
//!
//! - [`SectionedAdapter`]: counts, ids, view kinds, spans and bind dispatch for a host
//! - [`StickyOverlay`]: draws the header of the section under the viewport's leading edge on top
//!   of normal content
//!
//! Host capabilities are expressed as traits ([`ViewPool`], [`OverlaySurface`],
//! [`SectionBinder`]); this crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod binder;
mod cache;
mod host;
mod sticky;

#[cfg(test)]
mod tests;

pub use adapter::SectionedAdapter;
pub use binder::{BindHints, SectionBinder};
pub use host::{OverlayOrigin, OverlaySurface, ViewPool};
pub use sticky::StickyOverlay;
