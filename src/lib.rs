//! Ordered sets backed by binary search trees.
//!
//! [`BstSet`] is a plain, unbalanced binary search tree. [`AvlSet`] keeps
//! itself height-balanced by rotating on every insert and remove. Both offer
//! the same ordered-set operations: membership, rank access, floor / ceiling /
//! lower / higher queries, bounded ranges and pre-, in- and post-order
//! traversal.
//!
//! ```
//! use ordtree::{AvlSet, Error};
//!
//! let mut set: AvlSet<i32> = [10, 5, 15, 3, 7, 12, 20].into_iter().collect();
//! assert_eq!(set.floor(&11), Some(&10));
//! assert_eq!(set.higher(&20), None);
//! assert_eq!(set.get(2), Ok(&7));
//!
//! set.remove(&10);
//! assert_eq!(set.pre_order().next(), Some(&12));
//! assert_eq!(set.get(6), Err(Error::IndexOutOfRange { index: 6, len: 6 }));
//! ```

mod avl;
mod bst;
mod error;
mod iter;
mod node;

pub use avl::AvlSet;
pub use bst::BstSet;
pub use error::{Error, Result};
pub use iter::{IntoIter, Iter};
pub use node::Dump;

#[cfg(test)]
mod proptests;
