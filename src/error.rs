use thiserror::Error;

/// Errors reported by the indexed and bounded queries of a tree.
///
/// Every variant is produced by a read-only operation, so a call that fails
/// leaves the tree untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("index {index} out of range for tree of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("tree is empty")]
    Empty,
    #[error("range start is greater than range end")]
    InvalidRange,
}

pub type Result<T> = std::result::Result<T, Error>;
