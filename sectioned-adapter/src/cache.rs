#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Header flat position → last known view handle for that header.
#[cfg(feature = "std")]
pub(crate) type HandleCache<H> = HashMap<usize, H>;
#[cfg(not(feature = "std"))]
pub(crate) type HandleCache<H> = BTreeMap<usize, H>;
