use plain_bst::{Node, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts,
/// failed deletes, and lookups the tree agrees with the set at every step.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(x) => tree.insert(x.clone()) == set.insert(x.clone()),
            Op::Delete(x) => !tree.delete(x),
            Op::Find(x) => tree.find(x) == set.contains(x),
        };
        if !agrees || tree.size() != set.len() {
            return false;
        }
    }

    true
}

/// Checks that every value in the subtree lies strictly between the bounds
/// set by its ancestors.
fn is_ordered<T: Ord>(node: &Node<T>, lower: Option<&T>, upper: Option<&T>) -> bool {
    lower.map_or(true, |l| node.value() > l)
        && upper.map_or(true, |u| node.value() < u)
        && node
            .left()
            .map_or(true, |n| is_ordered(n, lower, Some(node.value())))
        && node
            .right()
            .map_or(true, |n| is_ordered(n, Some(node.value()), upper))
}

fn wrapped(xs: impl IntoIterator<Item = i8>) -> String {
    xs.into_iter().map(|x| format!("({})", x)).collect()
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set)
    }
}

quickcheck::quickcheck! {
    fn ordering_invariant(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        tree.root().map_or(true, |n| is_ordered(n, None, None))
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let sorted: BTreeSet<_> = xs.into_iter().collect();

        tree.in_order() == wrapped(sorted)
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        tree.build_from_list(xs.iter().copied());

        xs.iter().all(|x| tree.find(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        tree.build_from_list(xs.iter().copied());

        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.find(x))
    }
}

quickcheck::quickcheck! {
    fn height_bounds(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let size = tree.size();
        let height = tree.height();

        // A full tree of height h holds at most 2^h - 1 values, and a
        // degenerate one holds exactly h.
        height <= size && (size == 0 || (1u128 << height) > size as u128)
    }
}

quickcheck::quickcheck! {
    fn build_refused_once_populated(x: i8, xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        tree.insert(x);
        let before = tree.clone();

        !tree.build_from_list(xs) && tree == before
    }
}
