//! An ordered set implemented with an unbalanced binary search tree.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter};
use crate::node::{self, Dump, Link, Node};

/// An ordered set implemented with a plain binary search tree.
///
/// No rebalancing takes place, so the shape depends on insertion order and
/// sorted input degenerates into a list.
///
/// ```
/// use ordtree::BstSet;
/// let set: BstSet<_> = [5, 3, 8, 1, 4].into_iter().collect();
/// assert_eq!(set.range(&2, &6).unwrap(), [&3, &4, &5]);
/// ```
pub struct BstSet<T> {
    root: Link<T>,
    num_nodes: usize,
    height: usize,
}

impl<T: Ord> BstSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
            height: 0,
        }
    }

    /// Inserts a key into the set.
    /// Returns whether the key was newly inserted.
    pub fn insert(&mut self, key: T) -> bool {
        match Self::insert_node(&mut self.root, key) {
            Some(depth) => {
                self.num_nodes += 1;
                self.height = self.height.max(depth);
                true
            }
            None => false,
        }
    }

    /// Inserts every key of `keys`.
    /// Returns whether at least one key was newly inserted.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, keys: I) -> bool {
        keys.into_iter().fold(false, |changed, key| self.insert(key) | changed)
    }

    /// Removes a key from the set.
    /// Returns whether the key was previously in the set.
    pub fn remove(&mut self, key: &T) -> bool {
        if !Self::remove_node(&mut self.root, key) {
            return false;
        }
        debug_assert!(self.num_nodes >= 1);
        self.num_nodes -= 1;
        self.height = node::measure_height(&self.root);
        true
    }

    /// Returns true if the set contains a key equal to `key`.
    /// Visits every node in the worst case.
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

    /// Returns the smallest key, or [`Error::Empty`] if the set is empty.
    pub fn first(&self) -> Result<&T> {
        node::leftmost(&self.root).ok_or(Error::Empty)
    }

    /// Returns the largest key, or [`Error::Empty`] if the set is empty.
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
        let num_nodes = node::check_order(&self.root);
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(self.height, node::measure_height(&self.root));
    }

    /// Attaches `key` as a new leaf and returns its depth (root = 1),
    /// or `None` if an equal key is already present.
    fn insert_node(mut link: &mut Link<T>, key: T) -> Option<usize> {
        let mut depth = 1;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return None,
            };
            depth += 1;
        }
        *link = Some(Node::create(key));
        Some(depth)
    }

    fn remove_node(mut link: &mut Link<T>, key: &T) -> bool {
        loop {
            match link.as_ref().map(|node| key.cmp(&node.key)) {
                None => return false,
                Some(Ordering::Equal) => break,
                Some(Ordering::Less) => {
                    if let Some(node) = link {
                        link = &mut node.left;
                    }
                }
                Some(Ordering::Greater) => {
                    if let Some(node) = link {
                        link = &mut node.right;
                    }
                }
            }
        }

        let Some(mut node) = link.take() else {
            return false;
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                // In-order successor takes the removed key's place
                node.left = Some(left);
                node.right = Some(right);
                if let Some(successor) = node::take_min(&mut node.right) {
                    node.key = successor;
                }
                Some(node)
            }
        };
        true
    }
}

impl<T> BstSet<T> {
    /// Returns true if the set contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree, 0 if empty and 1 for a single key.
    /// Cached; raised to the new leaf's depth on insert and recomputed by a
    /// full traversal after every remove.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Clears the set, deallocating all memory.
    pub fn clear(&mut self) {
        node::destroy(self.root.take());
        self.num_nodes = 0;
        self.height = 0;
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

    /// Returns the keys in ascending order as an owned vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns a displayable indented dump of the tree shape.
    ///
    /// ```
    /// use ordtree::BstSet;
    /// let set: BstSet<_> = [2, 1].into_iter().collect();
    /// assert_eq!(set.dump().to_string(), "-2\n|  -1\n|  |  -null\n|  |  -null\n|  -null\n");
    /// ```
    pub fn dump(&self) -> Dump<'_, T> {
        Dump { root: &self.root }
    }
}

impl<T> Drop for BstSet<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for BstSet<T> {
    fn clone(&self) -> Self {
        Self {
            root: node::clone_tree(&self.root),
            num_nodes: self.num_nodes,
            height: self.height,
        }
    }
}

impl<T: Ord> Default for BstSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for BstSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BstSet<T> {}

impl<T: fmt::Debug> fmt::Debug for BstSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for BstSet<T> {
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

impl<T: Ord> FromIterator<T> for BstSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.insert_all(iter);
        set
    }
}

impl<T: Ord> Extend<T> for BstSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for BstSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_all(iter.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a BstSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for BstSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        self.num_nodes = 0;
        self.height = 0;
        IntoIter::new(self.root.take())
    }
}
