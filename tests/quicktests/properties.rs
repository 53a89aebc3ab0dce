use ordered_tree::{OrderedTree, TreeError};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same set of elements in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                assert_eq!(tree.add(x.clone()), Ok(set.insert(x.clone())));
            }
            Op::Remove(x) => {
                let expected = set.take(x).ok_or(TreeError::NotFound);
                assert_eq!(tree.remove(x), expected);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.size() == set.len() && tree.inorder().into_iter().eq(set.iter())
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<i16> = xs.into_iter().collect();
    let inorder = tree.inorder();

    inorder.len() == tree.size() && inorder.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn every_traversal_visits_every_element(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.into_iter().collect();
    fn sorted(mut elements: Vec<&i8>) -> Vec<&i8> {
        elements.sort();
        elements
    }

    let inorder = tree.inorder();
    sorted(tree.preorder()) == inorder
        && sorted(tree.postorder()) == inorder
        && sorted(tree.level_order()) == inorder
}

#[quickcheck]
fn traversals_agree_on_the_root(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.into_iter().collect();
    let root = tree.root().map(|root| root.element());

    tree.preorder().first().copied() == root
        && tree.level_order().first().copied() == root
        && tree.postorder().last().copied() == root
}

#[quickcheck]
fn adding_twice_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: OrderedTree<i8> = xs.into_iter().collect();
    let _ = tree.add(x);
    let size = tree.size();
    let preorder = tree.preorder().into_iter().copied().collect::<Vec<_>>();

    tree.add(x) == Ok(false)
        && tree.size() == size
        && tree.preorder().into_iter().copied().eq(preorder)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();

    xs.iter()
        .all(|x| tree.contains(x) == Ok(true) && tree.get(x) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| {
        tree.contains(x) == Ok(false)
            && tree.get(x) == Err(TreeError::NotFound)
            && tree.depth(x) == Ok(-1)
    })
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
    for remove in &removes {
        let was_present = tree.contains(remove) == Ok(true);
        let size = tree.size();
        match tree.remove(remove) {
            Ok(removed) if was_present && removed == *remove && tree.size() == size - 1 => {}
            Err(TreeError::NotFound) if !was_present && tree.size() == size => {}
            _ => return false,
        }
    }

    let mut still_present = xs;
    // We may have added the same element multiple times - remove each one.
    still_present.retain(|x| !removes.contains(x));

    removes.iter().all(|x| tree.contains(x) == Ok(false))
        && still_present.iter().all(|x| tree.contains(x) == Ok(true))
}
