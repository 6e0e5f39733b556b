//! Error types for structural checks on a [`Tree`][crate::Tree].
//!
//! Ordinary outcomes such as a missing value or a duplicate insert are not errors and are
//! reported through `Option` and `bool` returns. These errors only describe a tree whose links
//! or ordering have been corrupted.

use thiserror::Error;

/// Result type for invariant checks.
pub type Result<T> = std::result::Result<T, InvariantError>;

/// A violated structural invariant, as found by [`Tree::check_invariants`][crate::Tree::check_invariants].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The root node links to a parent.
    #[error("root node has a parent link")]
    RootHasParent,

    /// A child does not link back to the node holding it.
    #[error("a child of the node at in-order position {position} does not link back to it")]
    BrokenParentLink {
        /// In-order position of the parent holding the mislinked child.
        position: usize,
    },

    /// The in-order sequence of values is not strictly ascending.
    #[error("value at in-order position {position} is not greater than its predecessor")]
    OutOfOrder {
        /// In-order position of the first value that breaks the ordering.
        position: usize,
    },

    /// Some stored nodes can't be reached from the root.
    #[error("only {reachable} of {stored} stored nodes are reachable from the root")]
    Unreachable {
        /// Nodes visited by walking down from the root.
        reachable: usize,
        /// Nodes held by the tree.
        stored: usize,
    },
}
