use std::cmp;
use std::fmt;
use std::mem;

use log::trace;

/// A single vertex of a [`Tree`][crate::Tree]. It stores one value and
/// exclusively owns up to two children. Every value in the left subtree
/// orders before `value` and every value in the right subtree orders after it.
///
/// All of the tree's algorithms live here as plain structural recursion.
/// The `Tree` only deals with the case where there is no root at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// Which linearization [`Node::render_into`] produces.
#[derive(Clone, Copy)]
enum Order {
    In,
    Post,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Construct a `Node` with the given children already attached.
    ///
    /// Nothing checks that `left` and `right` respect the ordering invariant
    /// relative to `value`. That is the caller's job.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Node;
    ///
    /// let node = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    /// assert_eq!(node.size(), 3);
    /// assert_eq!(node.in_order(), "(1)(2)(3)");
    /// ```
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored at this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the value stored at this node, returning the old one.
    pub fn set_value(&mut self, value: T) -> T {
        mem::replace(&mut self.value, value)
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Replaces the left subtree, returning the detached one.
    pub fn set_left(&mut self, left: Option<Node<T>>) -> Option<Node<T>> {
        mem::replace(&mut self.left, left.map(Box::new)).map(|n| *n)
    }

    /// Replaces the right subtree, returning the detached one.
    pub fn set_right(&mut self, right: Option<Node<T>>) -> Option<Node<T>> {
        mem::replace(&mut self.right, right.map(Box::new)).map(|n| *n)
    }

    /// Inserts `val` into the subtree rooted at this node. A new leaf is
    /// attached at the first empty slot the search reaches.
    ///
    /// Returns `false`, leaving the subtree untouched, if an equal value is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Node;
    ///
    /// let mut node = Node::new(2);
    /// assert!(node.insert(1));
    /// assert!(!node.insert(1));
    /// assert_eq!(node.left().map(|n| *n.value()), Some(1));
    /// ```
    pub fn insert(&mut self, val: T) -> bool
    where
        T: cmp::Ord,
    {
        let child = match val.cmp(&self.value) {
            cmp::Ordering::Less => &mut self.left,
            cmp::Ordering::Equal => {
                trace!("rejecting duplicate value");
                return false;
            }
            cmp::Ordering::Greater => &mut self.right,
        };

        if let Some(n) = child.as_mut() {
            return n.insert(val);
        }

        trace!("attaching new leaf");
        *child = Some(Box::new(Self::new(val)));
        true
    }

    /// Returns whether a value equal to `val` is stored in this subtree.
    pub fn find(&self, val: &T) -> bool
    where
        T: cmp::Ord,
    {
        let child = match val.cmp(&self.value) {
            cmp::Ordering::Less => &self.left,
            cmp::Ordering::Equal => return true,
            cmp::Ordering::Greater => &self.right,
        };

        child.as_ref().map_or(false, |n| n.find(val))
    }

    /// Number of nodes in this subtree, including this one.
    pub fn size(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.size()) + self.right.as_ref().map_or(0, |n| n.size())
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub fn height(&self) -> usize {
        let left_height = self.left.as_ref().map_or(0, |n| n.height());
        let right_height = self.right.as_ref().map_or(0, |n| n.height());
        left_height.max(right_height) + 1
    }

    /// Renders the subtree in ascending order with each value wrapped in
    /// parentheses and no separator, e.g. `(1)(2)(3)`.
    pub fn in_order(&self) -> String
    where
        T: fmt::Display,
    {
        let mut s = String::new();
        self.render_into(Order::In, &mut s);
        s
    }

    /// Renders the subtree children-first: left subtree, right subtree, then
    /// this node, e.g. `(1)(3)(2)`.
    pub fn post_order(&self) -> String
    where
        T: fmt::Display,
    {
        let mut s = String::new();
        self.render_into(Order::Post, &mut s);
        s
    }

    fn render_into(&self, order: Order, out: &mut String)
    where
        T: fmt::Display,
    {
        if let Some(left) = &self.left {
            left.render_into(order, out);
        }
        if let Order::In = order {
            self.push_value(out);
        }
        if let Some(right) = &self.right {
            right.render_into(order, out);
        }
        if let Order::Post = order {
            self.push_value(out);
        }
    }

    fn push_value(&self, out: &mut String)
    where
        T: fmt::Display,
    {
        out.push('(');
        out.push_str(&self.value.to_string());
        out.push(')');
    }
}

/// A `Node` displays as its in-order rendering.
impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.in_order())
    }
}
