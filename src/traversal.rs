//! The four canonical walks over an [`OrderedTree`]. Each one collects references to the
//! elements into a fresh `Vec`, starting over from the root every time it is called.

use std::collections::VecDeque;

use crate::node::Node;
use crate::OrderedTree;

impl<T> OrderedTree<T> {
    /// Each node before its left subtree, then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.preorder(), vec![&2, &1, &3]);
    /// ```
    pub fn preorder(&self) -> Vec<&T> {
        let mut elements = Vec::with_capacity(self.size());
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            elements.push(node.element());
            // Right goes on first so the left subtree is finished before it comes back off.
            stack.extend(node.right());
            stack.extend(node.left());
        }

        elements
    }

    /// The left subtree, then the right subtree, then the node itself.
    pub fn postorder(&self) -> Vec<&T> {
        // Node, right, left read backwards.
        let mut elements = Vec::with_capacity(self.size());
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            elements.push(node.element());
            stack.extend(node.left());
            stack.extend(node.right());
        }

        elements.reverse();
        elements
    }

    /// The left subtree, then the node, then the right subtree. This is every element in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = [2, 3, 1].into_iter().collect();
    /// assert_eq!(tree.inorder(), vec![&1, &2, &3]);
    /// ```
    pub fn inorder(&self) -> Vec<&T> {
        let mut elements = Vec::with_capacity(self.size());
        let mut pending: Vec<&Node<T>> = Vec::new();
        let mut current = self.root();

        loop {
            while let Some(node) = current {
                pending.push(node);
                current = node.left();
            }
            let Some(node) = pending.pop() else {
                break;
            };
            elements.push(node.element());
            current = node.right();
        }

        elements
    }

    /// Breadth first: the root, then every node one edge down from left to right, and so on.
    pub fn level_order(&self) -> Vec<&T> {
        let mut elements = Vec::with_capacity(self.size());
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            elements.push(node.element());
            queue.extend(node.left());
            queue.extend(node.right());
        }

        elements
    }
}
