
use crate::node::Node;
use crate::OrderedTree;

/// Walks the whole tree checking that every element sits strictly between the bounds
/// inherited from its ancestors, and that `size` matches the number of nodes.
pub(crate) fn assert_bst_invariant<T>(tree: &OrderedTree<T>)
where
    T: Ord + std::fmt::Debug,
{
    fn check<'a, T>(node: Option<&'a Node<T>>, low: Option<&'a T>, high: Option<&'a T>) -> usize
    where
        T: Ord + std::fmt::Debug,
    {
        let Some(node) = node else {
            return 0;
        };
        if let Some(low) = low {
            assert!(node.element() > low, "{:?} not above {:?}", node.element(), low);
        }
        if let Some(high) = high {
            assert!(node.element() < high, "{:?} not below {:?}", node.element(), high);
        }

        1 + check(node.left(), low, Some(node.element()))
            + check(node.right(), Some(node.element()), high)
    }

    assert_eq!(check(tree.root(), None, None), tree.size());
    assert_eq!(tree.is_empty(), tree.root().is_none());
}
