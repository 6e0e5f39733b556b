//! In-order neighbours found by following links, without walking the whole tree.
//!
//! If a node has a subtree on the relevant side, its neighbour is the extreme node of that
//! subtree. Otherwise the neighbour is the first ancestor reached by stepping up from the other
//! side. Both take `O(height)` and need no extra storage.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{in_order_predecessor, in_order_successor, Tree};
//!
//! let tree: Tree<_> = [5, 7, 3, 2, 9].into_iter().collect();
//!
//! let two = tree.search(&2);
//! assert_eq!(in_order_successor(two).map(|n| *n.value()), Some(3));
//! assert!(in_order_predecessor(two).is_none());
//!
//! // An absent node has no neighbours.
//! assert!(in_order_successor(tree.search(&4)).is_none());
//! ```

use generational_arena::Index;

use crate::node::NodeRef;
use crate::tree::Tree;

/// The node holding the next smaller value than `node`. Returns `None` if `node` is `None` or is
/// the leftmost node of its tree.
pub fn in_order_predecessor<'a, T>(node: Option<NodeRef<'a, T>>) -> Option<NodeRef<'a, T>> {
    node?.predecessor()
}

/// The node holding the next larger value than `node`. Returns `None` if `node` is `None` or is
/// the rightmost node of its tree.
pub fn in_order_successor<'a, T>(node: Option<NodeRef<'a, T>>) -> Option<NodeRef<'a, T>> {
    node?.successor()
}

impl<T> Tree<T> {
    pub(crate) fn predecessor_of(&self, index: Index) -> Option<Index> {
        if let Some(left) = self.slot(index).left {
            return Some(self.rightmost(left));
        }

        let mut current = index;
        while let Some(parent) = self.slot(current).parent {
            if self.slot(parent).right == Some(current) {
                return Some(parent);
            }
            current = parent;
        }

        None
    }

    pub(crate) fn successor_of(&self, index: Index) -> Option<Index> {
        if let Some(right) = self.slot(index).right {
            return Some(self.leftmost(right));
        }

        let mut current = index;
        while let Some(parent) = self.slot(current).parent {
            if self.slot(parent).left == Some(current) {
                return Some(parent);
            }
            current = parent;
        }

        None
    }

    /// Follows right links from `index` until there are none left.
    pub(crate) fn rightmost(&self, mut index: Index) -> Index {
        while let Some(right) = self.slot(index).right {
            index = right;
        }
        index
    }

    /// Follows left links from `index` until there are none left.
    pub(crate) fn leftmost(&self, mut index: Index) -> Index {
        while let Some(left) = self.slot(index).left {
            index = left;
        }
        index
    }
}
