//! This crate exposes a plain, unbalanced Binary Search Tree (BST) over any
//! totally ordered element type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value
//! and may own up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! It follows that no value is stored twice. Inserting a value that is already
//! present is rejected.
//!
//! This tree never rebalances, so its height depends entirely on insertion
//! order. Inserting sorted input degrades it to a linked list.
//!
//! ## Height
//!
//! Heights here count nodes, not edges: a single leaf has a height of 1 and
//! only the empty tree has a height of 0.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.build_from_list(vec![3, 1, 4, 1, 5]));
//!
//! assert_eq!(tree.size(), 4);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.in_order(), "(1)(3)(4)(5)");
//! assert_eq!(tree.post_order(), "(1)(5)(4)(3)");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod tree;

pub use error::{Error, Result};
pub use node::Node;
pub use tree::Tree;
