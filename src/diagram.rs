//! A sideways text drawing of a tree, for debugging.

use std::fmt;

use crate::tree::Tree;

/// Indentation for each level below the root.
const INDENT: &str = "    ";

/// Draws a [`Tree`] sideways, one value per line. The right subtree is drawn above its parent
/// and the left subtree below it, and each line is indented by one step per level below the
/// root. An empty tree draws nothing.
///
/// Created by [`Tree::diagram`].
///
/// # Examples
///
/// ```
/// use linked_bst::Tree;
///
/// let tree: Tree<_> = [5, 7, 3, 2, 9].into_iter().collect();
///
/// let expected = "        9\n    7\n5\n    3\n        2\n";
/// assert_eq!(tree.diagram().to_string(), expected);
/// ```
pub struct Diagram<'a, T> {
    tree: &'a Tree<T>,
}

impl<T> Tree<T> {
    /// Returns a drawing of this tree that can be printed with `{}`.
    pub fn diagram(&self) -> Diagram<'_, T> {
        Diagram { tree: self }
    }
}

impl<'a, T> fmt::Display for Diagram<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reverse in-order walk: right subtree, node, left subtree.
        let mut stack = Vec::new();
        let mut current = self.tree.root_index().map(|root| (root, 0));
        loop {
            while let Some((index, level)) = current {
                stack.push((index, level));
                current = self.tree.slot(index).right.map(|right| (right, level + 1));
            }
            let Some((index, level)) = stack.pop() else {
                break;
            };
            writeln!(f, "{}{}", INDENT.repeat(level), self.tree.slot(index).value)?;
            current = self.tree.slot(index).left.map(|left| (left, level + 1));
        }

        Ok(())
    }
}
