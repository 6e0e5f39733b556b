//! Nodes of a [`Tree`] and the handles used to look at them.
//!
//! Nodes never leave the tree that owns them. Callers see them either through a [`NodeRef`],
//! which borrows the tree and so cannot outlive the next mutation, or through a [`NodeId`],
//! which can be held across mutations and re-resolved with [`Tree::node`].

use std::fmt;
use std::ptr;

use generational_arena::Index;

use crate::tree::Tree;

/// A stable handle to a node stored in a [`Tree`].
///
/// A `NodeId` stays valid until the node it names is removed. Resolving a stale id through
/// [`Tree::node`] yields `None` rather than whatever node later reuses the slot.
///
/// Deleting a value held by a node with two children keeps that node and moves a neighbour's
/// value into it, so it is the neighbour's id that goes stale.
///
/// # Examples
///
/// ```
/// use linked_bst::Tree;
///
/// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
/// let one = tree.search(&1).map(|n| n.id()).unwrap();
///
/// tree.insert(0);
/// assert_eq!(tree.node(one).map(|n| *n.value()), Some(1));
///
/// tree.delete(&1);
/// assert!(tree.node(one).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) Index);

/// A vertex of the tree. The arena owns every node; links are indices into it.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
    pub(crate) parent: Option<Index>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A borrowed view of one node of a [`Tree`].
///
/// Returned by [`Tree::search`], [`Tree::range`] and the neighbour functions. Because it borrows
/// the tree, it can only be used while the tree is not being modified.
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    index: Index,
}

/// Manual implementations of `Clone` and `Copy` so a `NodeRef` can be copied even when `T`
/// can't.
impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> PartialEq for NodeRef<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}
impl<'a, T> Eq for NodeRef<'a, T> {}

impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, index: Index) -> Self {
        Self { tree, index }
    }

    fn node(&self) -> &'a Node<T> {
        self.tree.slot(self.index)
    }

    fn wrap(&self, index: Option<Index>) -> Option<Self> {
        index.map(|index| Self::new(self.tree, index))
    }

    /// The handle of this node, usable after the borrow of the tree ends.
    pub fn id(&self) -> NodeId {
        NodeId(self.index)
    }

    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// The left child of this node, if any.
    pub fn left(&self) -> Option<Self> {
        self.wrap(self.node().left)
    }

    /// The right child of this node, if any.
    pub fn right(&self) -> Option<Self> {
        self.wrap(self.node().right)
    }

    /// The parent of this node. `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.wrap(self.node().parent)
    }

    /// Whether this node has a parent and is its left child.
    pub fn is_left_child(&self) -> bool {
        self.parent()
            .is_some_and(|parent| parent.node().left == Some(self.index))
    }

    /// Whether this node has a parent and is its right child.
    pub fn is_right_child(&self) -> bool {
        self.parent()
            .is_some_and(|parent| parent.node().right == Some(self.index))
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// The number of nodes on the longest downward path from this node to a leaf. A leaf has a
    /// height of 1 and a missing child adds nothing, so a node with a single child is one taller
    /// than that child.
    pub fn height(&self) -> usize {
        self.tree.subtree_height(self.index)
    }

    /// The number of nodes on the path from the root to this node. The root has a depth of 1.
    pub fn depth(&self) -> usize {
        self.tree.depth_of(self.index)
    }

    /// The node holding the next smaller value, or `None` if this is the leftmost node.
    pub fn predecessor(&self) -> Option<Self> {
        self.wrap(self.tree.predecessor_of(self.index))
    }

    /// The node holding the next larger value, or `None` if this is the rightmost node.
    pub fn successor(&self) -> Option<Self> {
        self.wrap(self.tree.successor_of(self.index))
    }
}
