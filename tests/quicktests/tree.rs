use linked_bst::{in_order_predecessor, in_order_successor, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                assert_eq!(bst.insert(v.clone()), set.insert(v.clone()));
            }
            Op::Delete(v) => {
                assert_eq!(bst.delete(v), set.take(v));
            }
            Op::Range(lo, hi) => {
                let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
                let found: Vec<_> = bst.range(lo, hi).iter().map(|n| n.value()).collect();
                let expected: Vec<_> = set.range(lo..=hi).collect();
                assert_eq!(found, expected);
            }
        }
    }
}

/// Every value in the tree, in order, read back through a range covering the whole domain.
fn all_values(tree: &Tree<i8>) -> Vec<i8> {
    tree.range(&i8::MIN, &i8::MAX)
        .iter()
        .map(|n| *n.value())
        .collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.check_invariants().is_ok() && all_values(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    tree.check_invariants().is_ok()
        && deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, again: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    tree.insert(again);
    let before = (all_values(&tree), tree.len(), tree.height(), tree.diagram().to_string());

    tree.insert(again);

    before == (all_values(&tree), tree.len(), tree.height(), tree.diagram().to_string())
}

#[quickcheck]
fn deleting_missing_value_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
    let before = (tree.height(), tree.diagram().to_string());

    tree.delete(&missing).is_none() && before == (tree.height(), tree.diagram().to_string())
}

#[quickcheck]
fn range_matches_btreeset(xs: Vec<i8>, a: i8, b: i8) -> bool {
    let (lo, hi) = (a.min(b), a.max(b));
    let tree: Tree<_> = xs.iter().copied().collect();
    let set: BTreeSet<_> = xs.into_iter().collect();

    let found: Vec<_> = tree.range(&lo, &hi).iter().map(|n| *n.value()).collect();
    found == set.range(lo..=hi).copied().collect::<Vec<_>>()
}

#[quickcheck]
fn neighbours_match_sorted_order(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let sorted: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    sorted.iter().enumerate().all(|(i, x)| {
        let node = tree.search(x);
        let before = i.checked_sub(1).map(|j| sorted[j]);
        let after = sorted.get(i + 1).copied();

        in_order_predecessor(node).map(|n| *n.value()) == before
            && in_order_successor(node).map(|n| *n.value()) == after
    })
}

#[quickcheck]
fn links_point_back(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.root().is_none_or(|root| root.parent().is_none())
        && tree.range(&i8::MIN, &i8::MAX).iter().all(|node| {
            node.left().is_none_or(|l| l.parent() == Some(*node) && l.is_left_child())
                && node
                    .right()
                    .is_none_or(|r| r.parent() == Some(*node) && r.is_right_child())
        })
}
