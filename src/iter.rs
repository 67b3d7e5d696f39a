//! Traversal iterators shared by both tree variants.
//!
//! Borrowing iterators capture the traversal order when they are created and
//! then replay it, so they can be cloned to restart from the current position.

use std::fmt;
use std::iter::FusedIterator;
use std::vec;

use crate::node::{self, Link, Node};

/// An iterator over the keys of a tree in pre-, in- or post-order.
pub struct Iter<'a, T> {
    keys: vec::IntoIter<&'a T>,
}

/// An owning iterator over the keys of a tree in ascending order.
pub struct IntoIter<T> {
    keys: vec::IntoIter<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn pre_order(root: &'a Link<T>) -> Self {
        let mut keys = Vec::new();
        node::traverse(root, |node| keys.push(&node.key), |_| {}, |_| {});
        Self::from_keys(keys)
    }

    pub(crate) fn in_order(root: &'a Link<T>) -> Self {
        let mut keys = Vec::new();
        node::traverse(root, |_| {}, |node| keys.push(&node.key), |_| {});
        Self::from_keys(keys)
    }

    pub(crate) fn post_order(root: &'a Link<T>) -> Self {
        let mut keys = Vec::new();
        node::traverse(root, |_| {}, |_| {}, |node| keys.push(&node.key));
        Self::from_keys(keys)
    }

    fn from_keys(keys: Vec<&'a T>) -> Self {
        Self {
            keys: keys.into_iter(),
        }
    }
}

// Auto derived clone seems to have an invalid type bound of T: Clone
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.keys.as_slice()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> IntoIter<T> {
    /// Dismantles the tree in ascending order, moving each key out of its node.
    pub(crate) fn new(root: Link<T>) -> Self {
        let mut keys = Vec::new();
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut current = root;
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            match stack.pop() {
                None => break,
                Some(node) => {
                    let Node { key, right, .. } = *node;
                    keys.push(key);
                    current = right;
                }
            }
        }
        Self {
            keys: keys.into_iter(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.keys.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
