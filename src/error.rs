/// Result type alias for tree operations that can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`Tree`][crate::Tree] operations.
///
/// Most tree operations report failure with a plain `bool` (a rejected
/// duplicate, a missing value). Only operations without a sensible identity
/// value return an `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The tree has no root to render.
    #[error("cannot render an empty tree")]
    EmptyTree,
}
