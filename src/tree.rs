//! The owning handle for a BST. A `Tree` is either empty or owns a single
//! root [`Node`] that every operation is forwarded to.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.find(&1));
//! assert_eq!(tree.render(), Err(Error::EmptyTree));
//!
//! assert!(tree.insert(2));
//! assert!(tree.insert(1));
//! assert!(tree.insert(3));
//!
//! // Duplicates are rejected.
//! assert!(!tree.insert(2));
//!
//! assert_eq!(tree.in_order(), "(1)(2)(3)");
//! assert_eq!(tree.post_order(), "(1)(3)(2)");
//! assert_eq!(tree.render(), Ok("(1)(2)(3)".to_string()));
//! ```

use std::cmp;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::node::Node;

/// An unbalanced Binary Search Tree of distinct values.
// TODO stack based drop. Dropping a degenerate (list shaped) tree recurses once per node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Generates a `Tree` whose root is the given `Node`.
    pub fn with_root(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Replaces the root, returning the previous one.
    pub fn set_root(&mut self, root: Option<Node<T>>) -> Option<Node<T>> {
        mem::replace(&mut self.root, root.map(Box::new)).map(|n| *n)
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of values stored in the tree.
    pub fn size(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.size())
    }

    /// Number of levels in the tree. An empty tree has height 0 and a tree
    /// holding a single value has height 1.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.height())
    }

    /// Returns whether a value equal to `val` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.find(&1));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, val: &T) -> bool
    where
        T: cmp::Ord,
    {
        self.root.as_ref().map_or(false, |n| n.find(val))
    }

    /// Inserts `val` into the tree. The first insertion into an empty tree
    /// always succeeds and becomes the root.
    ///
    /// Returns `false` without modifying the tree if an equal value is
    /// already stored.
    pub fn insert(&mut self, val: T) -> bool
    where
        T: cmp::Ord,
    {
        if let Some(root) = self.root.as_mut() {
            return root.insert(val);
        }

        self.root = Some(Box::new(Node::new(val)));
        true
    }

    /// Deletion is not supported. This always returns `false` and leaves the
    /// tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(!tree.delete(&1));
    /// assert!(tree.find(&1));
    /// ```
    pub fn delete(&mut self, _val: &T) -> bool {
        warn!("delete called on a tree that does not support deletion");
        false
    }

    /// Populates an empty tree by inserting each value of `values` in
    /// iteration order. Duplicates are skipped, the same way [`Tree::insert`] skips them.
    ///
    /// Returns `false`, without consuming any values or touching the tree,
    /// if the tree is not empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.build_from_list(vec![3, 1, 4, 1, 5]));
    /// assert_eq!(tree.size(), 4);
    ///
    /// // Only an empty tree can be built.
    /// assert!(!tree.build_from_list(vec![9]));
    /// assert!(!tree.find(&9));
    /// ```
    pub fn build_from_list<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: cmp::Ord,
    {
        if !self.is_empty() {
            debug!("refusing to build into a non-empty tree");
            return false;
        }

        let mut skipped = 0usize;
        for val in values {
            if !self.insert(val) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            debug!("skipped {} duplicate values while building", skipped);
        }
        true
    }

    /// Renders the tree in ascending order, e.g. `(1)(2)(3)`. An empty tree
    /// renders as an empty string.
    pub fn in_order(&self) -> String
    where
        T: fmt::Display,
    {
        self.root.as_ref().map_or_else(String::new, |n| n.in_order())
    }

    /// Renders the tree children-first, e.g. `(1)(3)(2)`. An empty tree
    /// renders as an empty string.
    pub fn post_order(&self) -> String
    where
        T: fmt::Display,
    {
        self.root.as_ref().map_or_else(String::new, |n| n.post_order())
    }

    /// The string form of the tree, which is its in-order rendering.
    ///
    /// Unlike [`Tree::in_order`] there is no fallback for an empty tree:
    /// rendering one is reported as [`Error::EmptyTree`].
    pub fn render(&self) -> Result<String>
    where
        T: fmt::Display,
    {
        self.root
            .as_ref()
            .map(|n| n.to_string())
            .ok_or(Error::EmptyTree)
    }
}

impl<T: cmp::Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.build_from_list(iter);
        tree
    }
}
