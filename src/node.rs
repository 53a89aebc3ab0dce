//! The owned node representation shared by every [`OrderedTree`][crate::OrderedTree]
//! operation. A [`Node`] owns its children outright, so the whole tree is a strict
//! ownership hierarchy with no parent pointers.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

/// An owning, possibly empty, edge to a child subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node of an [`OrderedTree`][crate::OrderedTree]. Everything in the left
/// subtree compares less than `element`, everything in the right subtree compares greater.
///
/// Nodes are only handed out by shared reference (see
/// [`OrderedTree::root`][crate::OrderedTree::root]) so they can be inspected but not rewired.
pub struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only one level down, a degenerate tree would otherwise recurse once per node.
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("left", &self.left().map(Node::element))
            .field("right", &self.right().map(Node::element))
            .finish()
    }
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }

    /// The element stored in this node.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of edges on the longest path from the node behind `link` down to a leaf. An
    /// empty link has a height of -1 so a lone node comes out at 0.
    pub(crate) fn height_of(link: &Link<T>) -> isize {
        let mut height = -1;
        let mut queue: VecDeque<(&Self, isize)> =
            link.as_deref().map(|node| (node, 0)).into_iter().collect();

        while let Some((node, depth)) = queue.pop_front() {
            height = height.max(depth);
            queue.extend(node.left().map(|left| (left, depth + 1)));
            queue.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Removes the node holding an element equal to `element` from the subtree behind `link`
    /// and returns that element. Nothing is relinked unless the element is found.
    pub(crate) fn remove(link: &mut Link<T>, element: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut link = link;
        loop {
            let node = link.as_deref()?;
            match element.cmp(&node.element) {
                Ordering::Less => link = &mut link.as_mut()?.left,
                Ordering::Greater => link = &mut link.as_mut()?.right,
                Ordering::Equal => return Self::splice(link),
            }
        }
    }

    /// Splices the node behind `link` out of the tree, returning its element.
    ///
    /// A node with at most one child is replaced by that child (or by nothing). A node with
    /// two children stays where it is: its element is swapped for its in-order successor and
    /// the successor's node is spliced out of the right subtree instead.
    fn splice(link: &mut Link<T>) -> Option<T>
    where
        T: Ord,
    {
        let node = link.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            let successor = Self::take_min(&mut node.right)?;
            let removed = mem::replace(&mut node.element, successor);

            if cfg!(debug_assertions) {
                node.assert_ordered_children();
            }
            return Some(removed);
        }

        let mut node = link.take()?;
        *link = node.left.take().or_else(|| node.right.take());
        Some(node.element)
    }

    /// Detaches the smallest element of the subtree behind `link`.
    ///
    /// The minimum never has a left child so its right subtree takes its place. When the node
    /// behind `link` has no left child it is the minimum itself.
    fn take_min(link: &mut Link<T>) -> Option<T> {
        let mut link = link;
        while link.as_deref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }

        let Node { element, right, .. } = *link.take()?;
        *link = right;
        Some(element)
    }

    /// Copies the subtree behind `link` node by node, keeping its shape.
    pub(crate) fn clone_subtree(link: &Link<T>) -> Link<T>
    where
        T: Clone,
    {
        let mut copy = None;
        let mut pending: Vec<(&Self, &mut Link<T>)> = Vec::new();
        if let Some(root) = link.as_deref() {
            pending.push((root, &mut copy));
        }

        while let Some((source, slot)) = pending.pop() {
            let node: &mut Self = slot.insert(Self::new_boxed(source.element.clone()));
            if let Some(left) = source.left() {
                pending.push((left, &mut node.left));
            }
            if let Some(right) = source.right() {
                pending.push((right, &mut node.right));
            }
        }

        copy
    }

    /// Drops the subtree behind `link` one node at a time. Letting `Box` drop it would recurse
    /// once per level, which a degenerate tree can turn into a stack overflow.
    pub(crate) fn drop_subtree(link: Link<T>) {
        let mut pending: Vec<Box<Self>> = link.into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }

    fn assert_ordered_children(&self)
    where
        T: Ord,
    {
        if let Some(left) = self.left() {
            assert!(left.element < self.element);
        }
        if let Some(right) = self.right() {
            assert!(right.element > self.element);
        }
    }
}
