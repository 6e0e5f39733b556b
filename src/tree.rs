//! A mutable, unbalanced BST whose nodes link to their parents as well as their children.
//!
//! Nodes live in a generational arena owned by the [`Tree`]. Child and parent links are arena
//! indices, so the parent back-references never form an ownership cycle and dropping the tree
//! drops every node with it.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//! assert_eq!(tree.height(), 0);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.search(&1).map(|n| *n.value()), Some(1));
//!
//! // Duplicates are ignored.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a value hands it back.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use generational_arena::{Arena, Index};
use log::{debug, trace};

use crate::error::{InvariantError, Result};
use crate::node::{Node, NodeId, NodeRef};

/// Which child slot of a parent a link occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// A Binary Search Tree of unique values. Nodes know their parent, which lets
/// [`NodeRef::predecessor`] and [`NodeRef::successor`] walk to a neighbour without a traversal
/// stack. The tree does not rebalance itself: its shape is whatever the insertion order gives.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Index>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.in_order().into_iter().map(|i| &self.slot(i).value))
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Generate a new, empty `Tree` with room for `capacity` nodes before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Generate a `Tree` holding a single root node with the given value.
    pub fn with_root(value: T) -> Self {
        let mut nodes = Arena::new();
        let root = nodes.insert(Node::new(value));
        Self {
            nodes,
            root: Some(root),
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|root| NodeRef::new(self, root))
    }

    /// Resolves a [`NodeId`] taken earlier. Returns `None` if that node has since been deleted.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        if self.nodes.contains(id.0) {
            Some(NodeRef::new(self, id.0))
        } else {
            None
        }
    }

    /// The number of nodes on the longest path from the root to a leaf, or 0 for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 2, 6, 1, 3, 8, 4, 7].into_iter().collect();
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        self.root.map_or(0, |root| self.subtree_height(root))
    }

    pub(crate) fn root_index(&self) -> Option<Index> {
        self.root
    }

    /// The node at `index`. Every index held in a link points at a live node, so this only
    /// panics on a corrupted tree.
    pub(crate) fn slot(&self, index: Index) -> &Node<T> {
        &self.nodes[index]
    }

    fn slot_mut(&mut self, index: Index) -> &mut Node<T> {
        &mut self.nodes[index]
    }

    /// Makes `child` the left child of `parent` and points the child's parent link back. Does
    /// not unlink `child` from any previous parent.
    fn set_left(&mut self, parent: Index, child: Option<Index>) {
        self.slot_mut(parent).left = child;
        if let Some(child) = child {
            self.slot_mut(child).parent = Some(parent);
        }
    }

    /// Makes `child` the right child of `parent` and points the child's parent link back. Does
    /// not unlink `child` from any previous parent.
    fn set_right(&mut self, parent: Index, child: Option<Index>) {
        self.slot_mut(parent).right = child;
        if let Some(child) = child {
            self.slot_mut(child).parent = Some(parent);
        }
    }

    fn set_child(&mut self, parent: Index, side: Side, child: Option<Index>) {
        match side {
            Side::Left => self.set_left(parent, child),
            Side::Right => self.set_right(parent, child),
        }
    }

    /// Height of the subtree rooted at `index`, counted in nodes. Only existing children are
    /// visited so a missing child never counts as a level.
    pub(crate) fn subtree_height(&self, index: Index) -> usize {
        let mut height = 0;
        let mut stack = vec![(index, 1)];
        while let Some((index, level)) = stack.pop() {
            height = height.max(level);
            let node = self.slot(index);
            stack.extend(
                node.left
                    .into_iter()
                    .chain(node.right)
                    .map(|child| (child, level + 1)),
            );
        }

        height
    }

    pub(crate) fn depth_of(&self, index: Index) -> usize {
        let mut depth = 1;
        let mut current = index;
        while let Some(parent) = self.slot(current).parent {
            depth += 1;
            current = parent;
        }

        depth
    }

    /// Indices of every node reachable from the root, in ascending order.
    pub(crate) fn in_order(&self) -> Vec<Index> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            while let Some(index) = current {
                stack.push(index);
                current = self.slot(index).left;
            }
            let Some(index) = stack.pop() else {
                break;
            };
            order.push(index);
            current = self.slot(index).right;
        }

        order
    }

    /// Unlinks a node with at most one child, moving that child into its place. The node itself
    /// stays in the arena for the caller to remove.
    fn splice_out(&mut self, index: Index) {
        let node = self.slot(index);
        debug_assert!(
            node.left.is_none() || node.right.is_none(),
            "Only nodes with at most one child can be spliced out"
        );
        let parent = node.parent;
        let child = node.left.or(node.right);

        match parent {
            Some(parent) => {
                let side = if self.slot(parent).left == Some(index) {
                    Side::Left
                } else {
                    Side::Right
                };
                self.set_child(parent, side, child);
            }
            None => {
                if let Some(child) = child {
                    self.slot_mut(child).parent = None;
                }
                self.root = child;
            }
        }
    }

    fn swap_values(&mut self, a: Index, b: Index) {
        if let (Some(a), Some(b)) = self.nodes.get2_mut(a, b) {
            mem::swap(&mut a.value, &mut b.value);
        }
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts `value` into the tree. Returns `false`, leaving the tree untouched, if the value
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(5));
    ///
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(5));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.insert(Node::new(value)));
            trace!("created root node");
            return true;
        };

        let side = loop {
            let node = self.slot(current);
            let (next, side) = match value.cmp(&node.value) {
                Ordering::Less => (node.left, Side::Left),
                Ordering::Equal => return false,
                Ordering::Greater => (node.right, Side::Right),
            };
            match next {
                Some(next) => current = next,
                None => break side,
            }
        };

        let leaf = self.nodes.insert(Node::new(value));
        self.set_child(current, side, Some(leaf));
        trace!("inserted {:?} leaf at depth {}", side, self.depth_of(leaf));

        if cfg!(debug_assertions) {
            let parent = self.slot(current);
            if let Some(left) = parent.left {
                assert!(self.slot(left).value < parent.value);
            }
            if let Some(right) = parent.right {
                assert!(self.slot(right).value > parent.value);
            }
        }

        true
    }

    fn locate(&self, value: &T) -> Option<Index> {
        let mut current = self.root;
        while let Some(index) = current {
            let node = self.slot(index);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(index),
                Ordering::Greater => node.right,
            };
        }

        None
    }

    /// Finds the node holding `value`, if any. Takes `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 2, 6, 1, 3, 8, 4, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&7).map(|n| *n.value()), Some(7));
    /// assert!(tree.search(&20).is_none());
    /// ```
    pub fn search(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.locate(value).map(|index| NodeRef::new(self, index))
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.locate(value).is_some()
    }

    /// All nodes whose values fall in `lo..=hi`, in ascending order. The bounds need not be
    /// stored values. Subtrees that lie entirely outside the bounds are never visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 2, 6, 1, 3, 8, 4, 7].into_iter().collect();
    ///
    /// let values: Vec<_> = tree.range(&4, &6).iter().map(|n| *n.value()).collect();
    /// assert_eq!(values, [4, 5, 6]);
    /// assert!(tree.range(&10, &10).is_empty());
    /// ```
    pub fn range(&self, lo: &T, hi: &T) -> Vec<NodeRef<'_, T>> {
        let mut found = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            while let Some(index) = current {
                let node = self.slot(index);
                current = if *lo > node.value {
                    node.right
                } else if *hi < node.value {
                    node.left
                } else {
                    stack.push(index);
                    node.left
                };
            }
            let Some(index) = stack.pop() else {
                break;
            };
            found.push(NodeRef::new(self, index));
            current = self.slot(index).right;
        }

        found
    }

    /// Deletes `value` from the tree and returns it, or returns `None` if it isn't present.
    ///
    /// A node with two children stays in place and takes the value of a neighbour, which is
    /// removed instead. The in-order predecessor is used unless the right subtree is strictly
    /// taller than the left one, in which case the in-order successor is. Any [`NodeId`] of the
    /// removed neighbour goes stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 2, 6, 1, 3, 8, 4, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&5), Some(5));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(4));
    /// assert_eq!(tree.delete(&5), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let target = self.locate(value)?;
        let node = self.slot(target);

        let doomed = match (node.left, node.right) {
            (Some(left), Some(right)) => {
                let left_height = self.subtree_height(left);
                let right_height = self.subtree_height(right);
                // The neighbour of a node with two children is the extreme node of one of its
                // subtrees, so it has at most one child.
                let neighbour = if right_height <= left_height {
                    debug!(
                        "promoting predecessor (left height {}, right height {})",
                        left_height, right_height
                    );
                    self.rightmost(left)
                } else {
                    debug!(
                        "promoting successor (left height {}, right height {})",
                        left_height, right_height
                    );
                    self.leftmost(right)
                };
                self.swap_values(target, neighbour);
                neighbour
            }
            _ => target,
        };

        self.splice_out(doomed);
        let removed = self.nodes.remove(doomed)?;
        trace!("removed node, {} remaining", self.len());

        Some(removed.value)
    }

    /// Checks the structural invariants of the tree:
    ///
    /// 1. The root has no parent.
    /// 2. Every child links back to the node holding it.
    /// 3. An in-order walk yields strictly ascending values.
    /// 4. Every stored node is reachable from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (0..32).map(|x| (x * 7) % 32).collect();
    /// for x in (0..32).step_by(3) {
    ///     tree.delete(&x);
    /// }
    ///
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<()> {
        if let Some(root) = self.root {
            if self.slot(root).parent.is_some() {
                return Err(InvariantError::RootHasParent);
            }
        }

        let order = self.in_order();
        for (position, &index) in order.iter().enumerate() {
            let node = self.slot(index);
            let mislinked = node
                .left
                .into_iter()
                .chain(node.right)
                .any(|child| self.slot(child).parent != Some(index));
            if mislinked {
                return Err(InvariantError::BrokenParentLink { position });
            }
        }

        if let Some(position) = order
            .windows(2)
            .position(|pair| self.slot(pair[0]).value >= self.slot(pair[1]).value)
        {
            return Err(InvariantError::OutOfOrder {
                position: position + 1,
            });
        }

        if order.len() != self.len() {
            return Err(InvariantError::Unreachable {
                reachable: order.len(),
                stored: self.len(),
            });
        }

        Ok(())
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Builds a tree by inserting the values in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
