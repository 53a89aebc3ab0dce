//! Errors returned by [`OrderedTree`][crate::OrderedTree] operations.

use thiserror::Error;

/// Everything that can go wrong when talking to an [`OrderedTree`][crate::OrderedTree].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// An operation that needs an element (or a collection of them) was handed `None`.
    #[error("{operation}: element is absent")]
    InvalidArgument {
        /// Name of the rejecting operation.
        operation: &'static str,
    },

    /// No element in the tree compares equal to the one requested.
    #[error("element was not found in the tree")]
    NotFound,
}

/// Shorthand for results whose error is a [`TreeError`].
pub type Result<T, E = TreeError> = std::result::Result<T, E>;
