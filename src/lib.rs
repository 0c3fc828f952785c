//! An ordered key-value map kept balanced as a left-leaning red-black tree.
//!
//! Every path from the root to a leaf crosses the same number of black links
//! and red links always lean left, so the height stays below `2*log2(n + 1)`
//! whatever the insertion order. Each node caches the size of its subtree,
//! which makes `len` constant time and `rank` logarithmic.
//!
//! ```
//! use llrb_map::LlrbTree;
//!
//! let mut tree = LlrbTree::new();
//! tree.insert(5, "a");
//! tree.insert(3, "b");
//! tree.insert(8, "c");
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.min().unwrap().key(), &3);
//! assert_eq!(tree.get(&3), Some(&"b"));
//! assert_eq!(tree.rank(&8), 2);
//! ```
//!
//! The tree holds no lock: share it between threads behind a single
//! `Mutex` or `RwLock`.

#[cfg(test)]
mod tests;

pub mod compare;
pub mod error;
mod llrb;

#[cfg(any(test, feature = "key-generator"))]
pub mod key_generator;

pub use compare::{Compare, Natural, Reverse};
pub use error::{Error, Result};
pub use llrb::{LlrbTree, Node, Stats, TreeIter};
