//! An ordered set implemented with an AVL tree.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter};
use crate::node::{self, Dump, Link, Node};

/// An ordered set implemented with a height-balanced (AVL) binary search tree.
///
/// After every insert or remove the heights of the left and right subtree
/// of any node differ by at most one.
///
/// ```
/// use ordtree::AvlSet;
/// let mut set = AvlSet::new();
/// set.insert(10);
/// set.insert(20);
/// set.insert(30);
/// assert_eq!(set.height(), 2);
/// assert_eq!(set.pre_order().copied().collect::<Vec<_>>(), [20, 10, 30]);
/// ```
pub struct AvlSet<T> {
    root: Link<T>,
    num_nodes: usize,
}

/// Where the inserted key went, as seen from the parent frame.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Descent {
    /// Key already present, nothing changed.
    Duplicate,
    /// A new leaf was attached in place of an absent link.
    Attached,
    /// The key was routed to the left (`Less`) or right (`Greater`) child.
    Routed(Ordering),
}

impl<T: Ord> AvlSet<T> {
    /// Creates an empty set.
    /// No memory is allocated until the first key is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Inserts a key into the set.
    /// Returns whether the key was newly inserted; inserting a key that is
    /// already present leaves the set unchanged.
    pub fn insert(&mut self, key: T) -> bool {
        let (root, descent) = Self::insert_node(self.root.take(), key);
        self.root = Some(root);
        if descent == Descent::Duplicate {
            return false;
        }
        self.num_nodes += 1;
        true
    }

    /// Inserts every key of `keys`.
    /// Returns whether at least one key was newly inserted.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, keys: I) -> bool {
        keys.into_iter().fold(false, |changed, key| self.insert(key) | changed)
    }

    /// Removes a key from the set.
    /// Returns whether the key was previously in the set.
    pub fn remove(&mut self, key: &T) -> bool {
        let mut removed = false;
        self.root = Self::remove_node(self.root.take(), key, &mut removed);
        if removed {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
        }
        removed
    }

    /// Returns true if the set contains a key equal to `key`.
    ///
    /// Compares for equality against every node rather than following the
    /// search order, so the cost is linear in the size of the set.
    pub fn contains(&self, key: &T) -> bool {
        node::contains(&self.root, key)
    }

    /// Returns true if the set contains every key of `keys`.
    pub fn contains_all<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        keys.into_iter().all(|key| self.contains(key))
    }

    /// Returns the key at zero-based position `rank` in ascending order.
    pub fn get(&self, rank: usize) -> Result<&T> {
        let out_of_range = Error::IndexOutOfRange {
            index: rank,
            len: self.num_nodes,
        };
        if rank >= self.num_nodes {
            return Err(out_of_range);
        }
        self.iter().nth(rank).ok_or(out_of_range)
    }

    /// Returns the smallest key.
    pub fn first(&self) -> Result<&T> {
        node::leftmost(&self.root).ok_or(Error::Empty)
    }

    /// Returns the largest key.
    pub fn last(&self) -> Result<&T> {
        node::rightmost(&self.root).ok_or(Error::Empty)
    }

    /// Returns the greatest key less than or equal to `key`.
    pub fn floor(&self, key: &T) -> Option<&T> {
        node::floor(&self.root, key)
    }

    /// Returns the least key greater than or equal to `key`.
    pub fn ceiling(&self, key: &T) -> Option<&T> {
        node::ceiling(&self.root, key)
    }

    /// Returns the greatest key strictly less than `key`.
    pub fn lower(&self, key: &T) -> Option<&T> {
        node::lower(&self.root, key)
    }

    /// Returns the least key strictly greater than `key`.
    pub fn higher(&self, key: &T) -> Option<&T> {
        node::higher(&self.root, key)
    }

    /// Returns all keys `k` with `from <= k <= to` in ascending order.
    ///
    /// Fails with [`Error::InvalidRange`] if `from > to`.
    pub fn range(&self, from: &T, to: &T) -> Result<Vec<&T>> {
        if from > to {
            return Err(Error::InvalidRange);
        }
        let mut keys = Vec::new();
        node::collect_range(&self.root, from, to, &mut keys);
        Ok(keys)
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Check tree nodes
        let num_nodes = node::check_order(&self.root);
        node::check_balance(&self.root);

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(self.height(), node::measure_height(&self.root));
    }

    /// Inserts `key` into the subtree and returns the new subtree root.
    ///
    /// On the way back up every frame recomputes its height and, if the
    /// subtree got out of balance, rotates. Which rotation applies is decided
    /// by where the key went below the heavy child: continuing in the same
    /// direction needs a single rotation, turning needs a double rotation.
    fn insert_node(link: Link<T>, key: T) -> (Box<Node<T>>, Descent) {
        let mut node = match link {
            None => return (Node::create(key), Descent::Attached),
            Some(node) => node,
        };

        let direction = key.cmp(&node.key);
        let below = match direction {
            Ordering::Equal => return (node, Descent::Duplicate),
            Ordering::Less => {
                let (left, below) = Self::insert_node(node.left.take(), key);
                node.left = Some(left);
                below
            }
            Ordering::Greater => {
                let (right, below) = Self::insert_node(node.right.take(), key);
                node.right = Some(right);
                below
            }
        };
        if below == Descent::Duplicate {
            return (node, Descent::Duplicate);
        }

        node.adjust_height();
        let balance = node.balance_factor();
        debug_assert!((-2..=2).contains(&balance));
        let node = if balance > 1 {
            if below == Descent::Routed(Ordering::Less) {
                Self::rotate_right(node)
            } else {
                Self::rotate_left_right(node)
            }
        } else if balance < -1 {
            if below == Descent::Routed(Ordering::Greater) {
                Self::rotate_left(node)
            } else {
                Self::rotate_right_left(node)
            }
        } else {
            node
        };
        (node, Descent::Routed(direction))
    }

    /// Removes `key` from the subtree and returns the new subtree root.
    /// A node with two children takes over its in-order successor's key.
    /// Every frame on the path back up is rebalanced.
    fn remove_node(link: Link<T>, key: &T, removed: &mut bool) -> Link<T> {
        let mut node = link?;
        match key.cmp(&node.key) {
            Ordering::Less => node.left = Self::remove_node(node.left.take(), key, removed),
            Ordering::Greater => node.right = Self::remove_node(node.right.take(), key, removed),
            Ordering::Equal => {
                *removed = true;
                match (node.left.take(), node.right.take()) {
                    (None, None) => return None,
                    (Some(child), None) | (None, Some(child)) => return Some(child),
                    (Some(left), Some(right)) => {
                        let (right, successor) = Self::detach_min(right);
                        node.key = successor;
                        node.left = Some(left);
                        node.right = right;
                    }
                }
            }
        }
        if !*removed {
            return Some(node);
        }
        Some(Self::rebalance_node(node))
    }

    /// Unlinks the smallest key of the subtree, rebalancing on the way up.
    fn detach_min(mut node: Box<Node<T>>) -> (Link<T>, T) {
        match node.left.take() {
            None => {
                let Node { key, right, .. } = *node;
                (right, key)
            }
            Some(left) => {
                let (left, min) = Self::detach_min(left);
                node.left = left;
                (Some(Self::rebalance_node(node)), min)
            }
        }
    }

    /// Restores AVL condition (balance) at given node if necessary and adjusts height.
    /// Used on the removal path, where the rotation is chosen by the balance
    /// of the heavier child: a child leaning away from the heavy side needs a
    /// double rotation, otherwise a single rotation suffices.
    fn rebalance_node(mut node: Box<Node<T>>) -> Box<Node<T>> {
        node.adjust_height();
        let balance = node.balance_factor();
        debug_assert!((-2..=2).contains(&balance));
        if balance > 1 {
            if node.left.as_deref().map_or(0, Node::balance_factor) >= 0 {
                Self::rotate_right(node)
            } else {
                Self::rotate_left_right(node)
            }
        } else if balance < -1 {
            if node.right.as_deref().map_or(0, Node::balance_factor) <= 0 {
                Self::rotate_left(node)
            } else {
                Self::rotate_right_left(node)
            }
        } else {
            node
        }
    }

    //   n            r
    //  / \          / \
    // a   r   ->   n   c
    //    / \      / \
    //   b   c    a   b
    fn rotate_left(mut node: Box<Node<T>>) -> Box<Node<T>> {
        match node.right.take() {
            None => node,
            Some(mut right) => {
                node.right = right.left.take();
                node.adjust_height();
                right.left = Some(node);
                right.adjust_height();
                right
            }
        }
    }

    //     n        l
    //    / \      / \
    //   l   c -> a   n
    //  / \          / \
    // a   b        b   c
    fn rotate_right(mut node: Box<Node<T>>) -> Box<Node<T>> {
        match node.left.take() {
            None => node,
            Some(mut left) => {
                node.left = left.right.take();
                node.adjust_height();
                left.right = Some(node);
                left.adjust_height();
                left
            }
        }
    }

    fn rotate_left_right(mut node: Box<Node<T>>) -> Box<Node<T>> {
        node.left = node.left.take().map(Self::rotate_left);
        Self::rotate_right(node)
    }

    fn rotate_right_left(mut node: Box<Node<T>>) -> Box<Node<T>> {
        node.right = node.right.take().map(Self::rotate_right);
        Self::rotate_left(node)
    }
}

impl<T> AvlSet<T> {
    /// Returns true if the set contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree, 0 if empty and 1 for a single key.
    /// Read from the root node, never recomputed.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Clears the set, deallocating all memory.
    pub fn clear(&mut self) {
        node::destroy(self.root.take());
        self.num_nodes = 0;
    }

    /// Gets an iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::in_order(&self.root)
    }

    /// Gets an iterator over the keys in pre-order (node, left, right).
    pub fn pre_order(&self) -> Iter<'_, T> {
        Iter::pre_order(&self.root)
    }

    /// Gets an iterator over the keys in post-order (left, right, node).
    pub fn post_order(&self) -> Iter<'_, T> {
        Iter::post_order(&self.root)
    }

    /// Copies the keys into a vector in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns a displayable indented dump of the tree shape.
    pub fn dump(&self) -> Dump<'_, T> {
        Dump { root: &self.root }
    }
}

impl<T> Drop for AvlSet<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for AvlSet<T> {
    fn clone(&self) -> Self {
        Self {
            root: node::clone_tree(&self.root),
            num_nodes: self.num_nodes,
        }
    }
}

impl<T: Ord> Default for AvlSet<T> {
    /// Creates an empty set.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for AvlSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for AvlSet<T> {}

impl<T: fmt::Debug> fmt::Debug for AvlSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for AvlSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}")?;
        }
        f.write_str("]")
    }
}

impl<T: Ord> FromIterator<T> for AvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.insert_all(iter);
        set
    }
}

impl<T: Ord> Extend<T> for AvlSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for AvlSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_all(iter.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        self.num_nodes = 0;
        IntoIter::new(self.root.take())
    }
}
