use thiserror::Error;

/// Precondition violations reported before any data is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("invalid range {start}..{end} for a sequence of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("cannot select {k} elements from a range of length {len}")]
    CountOutOfRange { k: usize, len: usize },

    #[error("index {index} at position {position} is out of bounds for {len} values")]
    IndexOutOfBounds {
        position: usize,
        index: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, SelectError>;
