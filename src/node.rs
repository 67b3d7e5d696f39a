//! Node shape and the algorithms shared by both tree variants.
//!
//! Everything here walks the tree with loops or an explicit stack, since a
//! plain tree built from sorted input is as deep as it is long.

use std::cmp::{self, Ordering};
use std::fmt;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) key: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) height: usize,
}

#[allow(clippy::enum_variant_names)]
enum Direction {
    FromParent,
    FromLeft,
    FromRight,
}

impl<T> Node<T> {
    pub(crate) fn create(key: T) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    pub(crate) fn left_height(&self) -> usize {
        height(&self.left)
    }

    pub(crate) fn right_height(&self) -> usize {
        height(&self.right)
    }

    pub(crate) fn adjust_height(&mut self) {
        self.height = 1 + cmp::max(self.left_height(), self.right_height());
    }

    /// Left subtree height minus right subtree height.
    pub(crate) fn balance_factor(&self) -> isize {
        self.left_height() as isize - self.right_height() as isize
    }
}

/// Stored height of a subtree, 0 for an absent link.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Height of a subtree computed by visiting every node.
/// Does not trust stored heights.
pub(crate) fn measure_height<T>(link: &Link<T>) -> usize {
    let mut max_depth = 0;
    let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
    if let Some(root) = link.as_deref() {
        stack.push((root, 1));
    }
    while let Some((node, depth)) = stack.pop() {
        max_depth = cmp::max(max_depth, depth);
        if let Some(left) = node.left.as_deref() {
            stack.push((left, depth + 1));
        }
        if let Some(right) = node.right.as_deref() {
            stack.push((right, depth + 1));
        }
    }
    max_depth
}

/// Unlinks the leftmost node below `link` and returns its key.
/// The node's right subtree takes its place.
pub(crate) fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref().map_or(false, |node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }
    let node = link.take()?;
    let Node { key, right, .. } = *node;
    *link = right;
    Some(key)
}

/// Equality scan over both subtrees of every visited node.
pub(crate) fn contains<T: PartialEq>(link: &Link<T>, key: &T) -> bool {
    let mut stack: Vec<&Node<T>> = link.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
        if node.key == *key {
            return true;
        }
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    false
}

pub(crate) fn leftmost<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(&node.key)
}

pub(crate) fn rightmost<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_deref()?;
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    Some(&node.key)
}

/// Greatest key less than or equal to `key`.
pub(crate) fn floor<'a, T: Ord>(link: &'a Link<T>, key: &T) -> Option<&'a T> {
    let mut bound = None;
    let mut current = link.as_deref();
    while let Some(node) = current {
        match node.key.cmp(key) {
            Ordering::Equal => return Some(&node.key),
            Ordering::Greater => current = node.left.as_deref(),
            Ordering::Less => {
                bound = Some(&node.key);
                current = node.right.as_deref();
            }
        }
    }
    bound
}

/// Least key greater than or equal to `key`.
pub(crate) fn ceiling<'a, T: Ord>(link: &'a Link<T>, key: &T) -> Option<&'a T> {
    let mut bound = None;
    let mut current = link.as_deref();
    while let Some(node) = current {
        match node.key.cmp(key) {
            Ordering::Equal => return Some(&node.key),
            Ordering::Less => current = node.right.as_deref(),
            Ordering::Greater => {
                bound = Some(&node.key);
                current = node.left.as_deref();
            }
        }
    }
    bound
}

/// Greatest key strictly less than `key`.
pub(crate) fn lower<'a, T: Ord>(link: &'a Link<T>, key: &T) -> Option<&'a T> {
    let mut bound = None;
    let mut current = link.as_deref();
    while let Some(node) = current {
        if node.key >= *key {
            current = node.left.as_deref();
        } else {
            bound = Some(&node.key);
            current = node.right.as_deref();
        }
    }
    bound
}

/// Least key strictly greater than `key`.
pub(crate) fn higher<'a, T: Ord>(link: &'a Link<T>, key: &T) -> Option<&'a T> {
    let mut bound = None;
    let mut current = link.as_deref();
    while let Some(node) = current {
        if node.key <= *key {
            current = node.right.as_deref();
        } else {
            bound = Some(&node.key);
            current = node.left.as_deref();
        }
    }
    bound
}

/// Appends all keys `k` with `from <= k <= to` in ascending order.
/// Subtrees entirely outside the bounds are never entered.
pub(crate) fn collect_range<'a, T: Ord>(link: &'a Link<T>, from: &T, to: &T, out: &mut Vec<&'a T>) {
    let mut stack: Vec<&'a Node<T>> = Vec::new();
    let mut current = link.as_deref();
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = if *from < node.key { node.left.as_deref() } else { None };
        }
        let Some(node) = stack.pop() else {
            break;
        };
        if *from <= node.key && node.key <= *to {
            out.push(&node.key);
        }
        current = if *to > node.key { node.right.as_deref() } else { None };
    }
}

/// Deep copy of a subtree, built bottom-up from a post-order walk.
pub(crate) fn clone_tree<T: Clone>(link: &Link<T>) -> Link<T> {
    let mut built: Vec<Box<Node<T>>> = Vec::new();
    traverse(
        link,
        |_| {},
        |_| {},
        |node| {
            // Right subtree was finished last, so it is on top
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                key: node.key.clone(),
                left,
                right,
                height: node.height,
            }));
        },
    );
    debug_assert!(built.len() <= 1);
    built.pop()
}

/// Walks the tree with an explicit stack, calling each visitor when a node is
/// entered, when its left subtree is done and when its right subtree is done.
pub(crate) fn traverse<'a, T, Pre, In, Post>(
    link: &'a Link<T>,
    mut preorder: Pre,
    mut inorder: In,
    mut postorder: Post,
) where
    Pre: FnMut(&'a Node<T>),
    In: FnMut(&'a Node<T>),
    Post: FnMut(&'a Node<T>),
{
    let mut stack: Vec<(&'a Node<T>, Direction)> = Vec::new();
    if let Some(root) = link.as_deref() {
        stack.push((root, Direction::FromParent));
    }
    while let Some((node, dir)) = stack.pop() {
        match dir {
            Direction::FromParent => {
                preorder(node);
                stack.push((node, Direction::FromLeft));
                if let Some(left) = node.left.as_deref() {
                    stack.push((left, Direction::FromParent));
                }
            }
            Direction::FromLeft => {
                inorder(node);
                stack.push((node, Direction::FromRight));
                if let Some(right) = node.right.as_deref() {
                    stack.push((right, Direction::FromParent));
                }
            }
            Direction::FromRight => postorder(node),
        }
    }
}

/// Drops a subtree without recursion, so degenerate trees cannot
/// overflow the call stack.
pub(crate) fn destroy<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Indented tree-shape dump of a subtree.
///
/// Created by the `dump` method of [`BstSet`](crate::BstSet) and
/// [`AvlSet`](crate::AvlSet). Every present node prints one line and both of
/// its child slots, absent children as `-null`.
pub struct Dump<'a, T> {
    pub(crate) root: &'a Link<T>,
}

impl<T: fmt::Display> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_tree(self.root, f)
    }
}

fn write_tree<T: fmt::Display>(link: &Link<T>, f: &mut fmt::Formatter) -> fmt::Result {
    let mut stack: Vec<(Option<&Node<T>>, usize)> = vec![(link.as_deref(), 0)];
    while let Some((slot, depth)) = stack.pop() {
        for _ in 0..depth {
            f.write_str("|  ")?;
        }
        match slot {
            None => writeln!(f, "-null")?,
            Some(node) => {
                writeln!(f, "-{}", node.key)?;
                stack.push((node.right.as_deref(), depth + 1));
                stack.push((node.left.as_deref(), depth + 1));
            }
        }
    }
    Ok(())
}

/// Asserts key ordering and returns the number of nodes.
#[cfg(any(test, feature = "consistency_check"))]
pub(crate) fn check_order<T: Ord>(link: &Link<T>) -> usize {
    let mut num_nodes = 0;
    let mut prev: Option<&T> = None;
    traverse(
        link,
        |_| {},
        |node| {
            if let Some(prev) = prev {
                assert!(*prev < node.key);
            }
            prev = Some(&node.key);
            num_nodes += 1;
        },
        |_| {},
    );
    num_nodes
}

/// Asserts stored heights and the AVL condition at every node.
#[cfg(any(test, feature = "consistency_check"))]
pub(crate) fn check_balance<T>(link: &Link<T>) {
    traverse(
        link,
        |_| {},
        |_| {},
        |node| {
            let left_height = node.left_height();
            let right_height = node.right_height();

            // Check height
            assert_eq!(node.height, 1 + cmp::max(left_height, right_height));

            // Check AVL condition (nearly balance)
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);
        },
    );
}
