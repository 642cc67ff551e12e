/// Errors returned by positional queries on a [`crate::SectionIndex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("position {position} is out of bounds (total count {total})")]
    OutOfBounds { position: usize, total: usize },

    #[error("position {position} is a header slot")]
    HeaderPosition { position: usize },

    #[error("position {position} is not a header slot")]
    NotHeader { position: usize },

    #[error("position {position} is not preceded by any header")]
    Orphan { position: usize },

    /// The index was queried before `rebuild`, or its options changed since the last one.
    #[error("section index has not been rebuilt for the current configuration")]
    NotBuilt,
}

impl Error {
    /// Returns `true` for errors caused by the queried position itself.
    pub fn is_invalid_position(&self) -> bool {
        !matches!(self, Self::NotBuilt)
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
