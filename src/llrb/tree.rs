use super::node::{self, is_red, size};
use super::*;
use crate::compare::{Compare, Natural};
use crate::error::{Error, Result};
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

/// An ordered map kept balanced as a left-leaning red-black tree
#[derive(Clone)]
pub struct LlrbTree<K, V, C = Natural> {
    root: Link<K, V>,
    cmp: C,
}

/// Shape of a tree that passed `LlrbTree::validate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub len: usize,
    /// Links on the longest root-to-leaf path, `None` for an empty tree
    pub height: Option<usize>,
    /// Black links on every path from the root to an absent child
    pub black_height: usize,
}

impl<K: Ord, V> LlrbTree<K, V> {
    /// Create a new empty tree, ordered by the keys' `Ord` implementation
    pub fn new() -> Self {
        LlrbTree::with_comparator(Natural)
    }
}

impl<K: Ord, V> Default for LlrbTree<K, V> {
    fn default() -> Self {
        LlrbTree::new()
    }
}

impl<K, V, C: Compare<K>> LlrbTree<K, V, C> {
    /// Create a new empty tree that orders its keys with `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        LlrbTree { root: None, cmp }
    }

    /// Insert a key-value pair, replacing the value if the key is already
    /// present. Return the replaced value
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (mut root, replaced) = node::insert(self.root.take(), key, value, &self.cmp);
        root.color = Color::Black;
        self.root = Some(root);
        if replaced.is_none() {
            trace!("inserted a new key, len is now {}", self.len());
        }
        replaced
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(Node::value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut link = self.root.as_mut();
        while let Some(node) = link {
            link = match self.cmp.compare(key, &node.key) {
                Ordering::Less => node.left.as_mut(),
                Ordering::Greater => node.right.as_mut(),
                Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Remove a key and return its value.
    /// An absent key leaves the tree untouched
    pub fn remove(&mut self, key: &K) -> Option<V> {
        if !self.contains_key(key) {
            return None;
        }
        trace!("removing a key from a tree of {} entries", self.len());

        let root = self.take_root_for_removal();
        let (root, removed) = node::remove(root, key, &self.cmp);
        self.restore_root(root);
        removed.map(|node| node.into_entry().1)
    }

    /// Remove the entry with the smallest key
    pub fn remove_min(&mut self) -> Result<(K, V)> {
        if self.is_empty() {
            return Err(Error::EmptyTree);
        }
        trace!("removing the minimum of a tree of {} entries", self.len());

        let root = self.take_root_for_removal();
        let (root, min) = node::remove_min(root);
        self.restore_root(root);
        min.map(Node::into_entry).ok_or(Error::EmptyTree)
    }

    /// Remove the entry with the largest key
    pub fn remove_max(&mut self) -> Result<(K, V)> {
        if self.is_empty() {
            return Err(Error::EmptyTree);
        }
        trace!("removing the maximum of a tree of {} entries", self.len());

        let root = self.take_root_for_removal();
        let (root, max) = node::remove_max(root);
        self.restore_root(root);
        max.map(Node::into_entry).ok_or(Error::EmptyTree)
    }

    /// Number of keys strictly smaller than `key`. The key itself does not
    /// need to be present
    pub fn rank(&self, key: &K) -> usize {
        let mut rank = 0;
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            match self.cmp.compare(key, &node.key) {
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Greater => {
                    rank += 1 + size(&node.left);
                    link = node.right.as_deref();
                }
                Ordering::Equal => return rank + size(&node.left),
            }
        }
        rank
    }

    /// Check every structural invariant of the tree
    pub fn validate(&self) -> Result<Stats> {
        if is_red(&self.root) {
            debug!("validation failed: red root");
            return Err(Error::RedRoot);
        }
        let black_height = self
            .validate_subtree(self.root.as_deref(), None, None, 0)
            .map_err(|err| {
                debug!("validation failed: {}", err);
                err
            })?;
        Ok(Stats {
            len: self.len(),
            height: self.height(),
            black_height,
        })
    }

    fn find(&self, key: &K) -> Option<&Node<K, V>> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match self.cmp.compare(key, &node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Return the black height of the subtree, checking that every key lies
    /// strictly between `lower` and `upper`
    fn validate_subtree(
        &self,
        node: Option<&Node<K, V>>,
        lower: Option<&K>,
        upper: Option<&K>,
        depth: usize,
    ) -> Result<usize> {
        let node = match node {
            None => return Ok(0),
            Some(node) => node,
        };

        let above_lower = lower.map_or(true, |lower| {
            self.cmp.compare(lower, &node.key) == Ordering::Less
        });
        let below_upper = upper.map_or(true, |upper| {
            self.cmp.compare(&node.key, upper) == Ordering::Less
        });
        if !above_lower || !below_upper {
            return Err(Error::UnsortedKeys { depth });
        }

        let expected = 1 + size(&node.left) + size(&node.right);
        if node.size != expected {
            return Err(Error::SizeMismatch {
                expected,
                found: node.size,
            });
        }
        if is_red(&node.right) {
            return Err(Error::RightLeaningRed { depth });
        }
        if node.color == Color::Red && is_red(&node.left) {
            return Err(Error::ConsecutiveReds { depth });
        }

        let left = self.validate_subtree(node.left.as_deref(), lower, Some(&node.key), depth + 1)?;
        let right =
            self.validate_subtree(node.right.as_deref(), Some(&node.key), upper, depth + 1)?;
        if left != right {
            return Err(Error::UnbalancedBlacks { left, right });
        }
        Ok(left + (node.color == Color::Black) as usize)
    }
}

impl<K, V, C> LlrbTree<K, V, C> {
    pub fn len(&self) -> usize {
        size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Links on the longest path from the root to a leaf: `Some(0)` for a
    /// single entry and `None` for an empty tree
    pub fn height(&self) -> Option<usize> {
        node::height(&self.root)
    }

    /// The entry with the smallest key
    pub fn min(&self) -> Result<&Node<K, V>> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(node)
    }

    /// The entry with the largest key
    pub fn max(&self) -> Result<&Node<K, V>> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(node)
    }

    /// All keys, in order
    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Return a sorted iterator over references to the entries of the tree
    pub fn iter(&self) -> TreeIter<K, V> {
        TreeIter::new(self.root.as_deref(), self.len())
    }

    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Removals borrow a red link from the root when none of its children has one
    fn take_root_for_removal(&mut self) -> Link<K, V> {
        let mut root = self.root.take();
        if let Some(node) = root.as_mut() {
            if !is_red(&node.left) && !is_red(&node.right) {
                node.color = Color::Red;
            }
        }
        root
    }

    fn restore_root(&mut self, mut root: Link<K, V>) {
        if let Some(node) = root.as_mut() {
            node.color = Color::Black;
        }
        self.root = root;
    }
}

impl<'a, K, V, C> IntoIterator for &'a LlrbTree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = TreeIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for LlrbTree<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for LlrbTree<K, V> {
    /// Later pairs win over earlier ones with the same key
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = LlrbTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for LlrbTree<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
