//! This crate exposes [`OrderedTree`], a plain, unbalanced Binary Search Tree (BST)
//! of unique elements.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an element takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). [`OrderedTree`] does nothing to
//! keep that height down, so its shape depends entirely on the order elements
//! arrive in. Visiting the left subtree, then the subtree root, then the right
//! subtree yields every element in sorted order.
//!
//! Operations that take an element accept anything that converts into an
//! `Option` of it. Passing `None` is reported as
//! [`TreeError::InvalidArgument`] rather than being silently ignored.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod ordered_tree;
mod traversal;

#[cfg(test)]
mod test;

pub use error::{Result, TreeError};
pub use node::Node;
pub use ordered_tree::OrderedTree;
