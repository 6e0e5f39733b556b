//! This crate exposes a mutable Binary Search Tree (BST) whose nodes know their
//! parents, for use as an ordered index inside a larger component.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`, where `height` is the number of nodes on the
//! longest path from the root to a leaf. This tree never rebalances, so the
//! height depends entirely on insertion order: sorted input gives a tree as
//! tall as it is large.
//!
//! ## Parent links
//!
//! Each node also links to its parent. That lets the in-order
//! [predecessor][in_order_predecessor] and [successor][in_order_successor]
//! of a node be found by walking links instead of traversing the tree, and
//! lets [`NodeRef::depth`] be read off the path to the root. The nodes are
//! stored in an arena owned by the [`Tree`], so those back-references are
//! plain indices rather than reference-counted pointers.
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree: Tree<_> = [5, 2, 6, 1, 3, 8, 4, 7].into_iter().collect();
//!
//! let four = tree.search(&4).unwrap();
//! assert_eq!(four.depth(), 4);
//! assert_eq!(four.successor().map(|n| *n.value()), Some(5));
//!
//! tree.delete(&5);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(4));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod diagram;
pub mod error;
pub mod neighbours;
pub mod node;
pub mod tree;

#[cfg(test)]
mod test;

pub use diagram::Diagram;
pub use error::{InvariantError, Result};
pub use neighbours::{in_order_predecessor, in_order_successor};
pub use node::{NodeId, NodeRef};
pub use tree::Tree;
