//! Error types returned by tree construction and queries.

use thiserror::Error;

/// The ways in which building or querying a [`KdTree`](crate::KdTree) can
/// fail. Both are pure input errors: nothing is transient and nothing is
/// worth retrying.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A point or query target did not match the dimensionality the tree
    /// was built with. Co-ordinates are never truncated or zero-padded to
    /// fit; the mismatch is always surfaced.
    #[error("point has {actual} co-ordinate(s) but the tree is {expected}-dimensional")]
    DimensionMismatch {
        /// Dimensionality fixed at construction.
        expected: usize,
        /// Dimensionality of the offending point.
        actual: usize,
    },

    /// A nearest-neighbour query was made against a tree built from zero
    /// points. Whether that is a legitimate "nothing indexed yet" state or
    /// a bug is the caller's call.
    #[error("cannot query a tree containing no points")]
    EmptyTree,
}
