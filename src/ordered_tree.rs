//! An unbalanced, mutable BST of unique elements.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, TreeError};
//!
//! let mut tree: OrderedTree<i32> = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.contains(&1), Ok(false));
//!
//! assert_eq!(tree.add(1), Ok(true));
//! assert_eq!(tree.get(&1), Ok(&1));
//!
//! // Adding an equal element again is a no-op.
//! assert_eq!(tree.add(1), Ok(false));
//! assert_eq!(tree.size(), 1);
//!
//! // Removing an element hands it back.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
//!
//! // `None` stands in for an absent argument.
//! assert!(matches!(tree.add(None), Err(TreeError::InvalidArgument { .. })));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, instrument, trace};

use crate::error::{Result, TreeError};
use crate::node::{Link, Node};

/// A Binary Search Tree without any rebalancing. Its shape is decided purely by the order
/// elements were added in, so adding already sorted elements builds what is effectively a
/// linked list.
pub struct OrderedTree<T> {
    pub(crate) root: Link<T>,
    size: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        Node::drop_subtree(self.root.take());
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: Node::clone_subtree(&self.root),
            size: self.size,
        }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("size", &self.size)
            .field("root", &self.root())
            .field("elements", &self.inorder())
            .finish()
    }
}

/// Unwraps an argument or reports it as absent for `operation`.
fn require<E>(element: Option<E>, operation: &'static str) -> Result<E> {
    element.ok_or_else(|| {
        debug!(operation, "rejected absent argument");
        TreeError::InvalidArgument { operation }
    })
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Builds a tree by [`add`][Self::add]ing each element in the order given. Elements equal
    /// to an earlier one are dropped.
    ///
    /// Fails with [`TreeError::InvalidArgument`] if `elements` is `None` or if any of the
    /// elements is.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let tree = OrderedTree::<i32>::from_elements(Some(vec![2, 1, 3, 1])).unwrap();
    /// assert_eq!(tree.size(), 3);
    /// assert_eq!(tree.preorder(), vec![&2, &1, &3]);
    ///
    /// let absent = OrderedTree::<i32>::from_elements(None::<Vec<i32>>);
    /// assert!(matches!(absent, Err(TreeError::InvalidArgument { .. })));
    ///
    /// let holey = OrderedTree::<i32>::from_elements(Some(vec![Some(1), None]));
    /// assert!(matches!(holey, Err(TreeError::InvalidArgument { .. })));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn from_elements<I, E>(elements: Option<I>) -> Result<Self>
    where
        T: Ord,
        I: IntoIterator<Item = E>,
        E: Into<Option<T>>,
    {
        let elements = require(elements, "from_elements")?;
        let mut tree = Self::new();
        for element in elements {
            tree.add(element)?;
        }

        Ok(tree)
    }

    /// Adds `element` to the tree unless an equal element is already present. Returns whether
    /// a new node was created.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<i32> = OrderedTree::new();
    /// assert_eq!(tree.add(5), Ok(true));
    /// assert_eq!(tree.add(5), Ok(false));
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn add<E>(&mut self, element: E) -> Result<bool>
    where
        T: Ord,
        E: Into<Option<T>>,
    {
        let element = require(element.into(), "add")?;
        Ok(self.insert(element))
    }

    /// Removes the element equal to `element` and returns it.
    ///
    /// Fails with [`TreeError::NotFound`] without touching the tree if there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let mut tree: OrderedTree<i32> = [5, 3, 8].into_iter().collect();
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(TreeError::NotFound));
    /// assert_eq!(tree.inorder(), vec![&3, &8]);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn remove<'q, Q>(&mut self, element: Q) -> Result<T>
    where
        T: Ord + 'q,
        Q: Into<Option<&'q T>>,
    {
        let element = require(element.into(), "remove")?;
        let removed = Node::remove(&mut self.root, element).ok_or(TreeError::NotFound)?;
        self.size -= 1;
        trace!(size = self.size, "spliced out node");

        Ok(removed)
    }

    /// Returns the stored element that compares equal to `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let tree: OrderedTree<i32> = [1, 2].into_iter().collect();
    /// assert_eq!(tree.get(&2), Ok(&2));
    /// assert_eq!(tree.get(&42), Err(TreeError::NotFound));
    /// ```
    pub fn get<'q, Q>(&self, element: Q) -> Result<&T>
    where
        T: Ord + 'q,
        Q: Into<Option<&'q T>>,
    {
        let element = require(element.into(), "get")?;
        self.find(element).ok_or(TreeError::NotFound)
    }

    /// Whether an element equal to `element` is in the tree.
    pub fn contains<'q, Q>(&self, element: Q) -> Result<bool>
    where
        T: Ord + 'q,
        Q: Into<Option<&'q T>>,
    {
        let element = require(element.into(), "contains")?;
        Ok(self.find(element).is_some())
    }

    /// The number of edges between the root and the node holding `element`, so the root
    /// itself sits at depth 0. Returns -1 when the element isn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = [5, 3, 4].into_iter().collect();
    /// assert_eq!(tree.depth(&5), Ok(0));
    /// assert_eq!(tree.depth(&4), Ok(2));
    /// assert_eq!(tree.depth(&42), Ok(-1));
    /// ```
    pub fn depth<'q, Q>(&self, element: Q) -> Result<isize>
    where
        T: Ord + 'q,
        Q: Into<Option<&'q T>>,
    {
        let element = require(element.into(), "depth")?;
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match element.cmp(&node.element) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Ok(depth),
            };
            depth += 1;
        }

        Ok(-1)
    }

    /// The number of elements in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of edges on the longest path from the root to a leaf. A lone root has a
    /// height of 0 and an empty tree a height of -1.
    pub fn height(&self) -> isize {
        Node::height_of(&self.root)
    }

    /// The smallest element in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.element)
    }

    /// The largest element in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.element)
    }

    /// Removes every element.
    #[instrument(level = "trace", skip_all)]
    pub fn clear(&mut self) {
        Node::drop_subtree(self.root.take());
        self.size = 0;
        trace!("cleared tree");
    }

    /// The root node, for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    fn insert(&mut self, element: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match element.cmp(&node.element) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(size = self.size, "ignored duplicate element");
                    return false;
                }
            };
        }

        *link = Some(Node::new_boxed(element));
        self.size += 1;
        trace!(size = self.size, "created node");
        true
    }

    fn find(&self, element: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match element.cmp(&node.element) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(&node.element),
            };
        }

        None
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        for element in elements {
            self.insert(element);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut tree = Self::new();
        tree.extend(elements);
        tree
    }
}
