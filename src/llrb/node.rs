use super::*;
use crate::compare::Compare;
use std::cmp::Ordering;
use std::mem;

/// A key-value entry of the tree. Only the entry itself is exposed: the links
/// and balancing metadata stay private to the tree.
#[derive(Clone)]
pub struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
    /// Number of nodes in the subtree rooted here, including this one
    pub(super) size: usize,
    pub(super) color: Color,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
            size: 1,
            color: Color::Red,
        })
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub(super) fn into_entry(self: Box<Self>) -> (K, V) {
        let Node { key, value, .. } = *self;
        (key, value)
    }

    fn update_size(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }

    /// Invert the colors of this node and both its children
    fn flip_colors(&mut self) {
        self.color = !self.color;
        if let Some(left) = self.left.as_mut() {
            left.color = !left.color;
        }
        if let Some(right) = self.right.as_mut() {
            right.color = !right.color;
        }
    }
}

pub(super) fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

pub(super) fn is_red<K, V>(link: &Link<K, V>) -> bool {
    match link {
        Some(node) => node.color == Color::Red,
        None => false,
    }
}

/// Whether the left child of `link` is red
fn is_left_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().map_or(false, |node| is_red(&node.left))
}

//         node                x
//         /  \               / \
//        a    x    ==>    node  c
//            / \          /  \
//           b   c        a    b
fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut x = match node.right.take() {
        Some(x) => x,
        None => unreachable!("rotate_left on a node without right child"),
    };
    node.right = x.left.take();
    x.color = node.color;
    node.color = Color::Red;
    x.size = node.size;
    node.update_size();
    x.left = Some(node);
    x
}

//         node            x
//         /  \           / \
//        x    c   ==>   a  node
//       / \                /  \
//      a   b              b    c
fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut x = match node.left.take() {
        Some(x) => x,
        None => unreachable!("rotate_right on a node without left child"),
    };
    node.left = x.right.take();
    x.color = node.color;
    node.color = Color::Red;
    x.size = node.size;
    node.update_size();
    x.right = Some(node);
    x
}

/// Restore the local invariants on the way up and refresh the cached size
fn balance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(&node.right) && !is_red(&node.left) {
        node = rotate_left(node);
    }
    if is_red(&node.left) && is_left_red(&node.left) {
        node = rotate_right(node);
    }
    if is_red(&node.left) && is_red(&node.right) {
        node.flip_colors();
    }
    node.update_size();
    node
}

/// Assuming `node` is red and both its children are black, make its left
/// child or one of the left child's children red
fn move_red_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    node.flip_colors();
    if is_left_red(&node.right) {
        node.right = node.right.take().map(rotate_right);
        node = rotate_left(node);
        node.flip_colors();
    }
    node
}

/// Mirror of `move_red_left`, for the right child
fn move_red_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    node.flip_colors();
    if is_left_red(&node.left) {
        node = rotate_right(node);
        node.flip_colors();
    }
    node
}

/// Recursive implementation of `LlrbTree::insert`.
/// Return the new subtree root and the value replaced, if the key was present
pub(super) fn insert<K, V, C: Compare<K>>(
    link: Link<K, V>,
    key: K,
    value: V,
    cmp: &C,
) -> (Box<Node<K, V>>, Option<V>) {
    let mut node = match link {
        None => return (Node::new(key, value), None),
        Some(node) => node,
    };

    let replaced = match cmp.compare(&key, &node.key) {
        Ordering::Less => {
            let (left, replaced) = insert(node.left.take(), key, value, cmp);
            node.left = Some(left);
            replaced
        }
        Ordering::Greater => {
            let (right, replaced) = insert(node.right.take(), key, value, cmp);
            node.right = Some(right);
            replaced
        }
        // Pure value replacement: the shape does not change
        Ordering::Equal => {
            let replaced = mem::replace(&mut node.value, value);
            return (node, Some(replaced));
        }
    };
    (balance(node), replaced)
}

/// Remove the minimum of the subtree.
/// Return the new subtree root and the detached node
pub(super) fn remove_min<K, V>(link: Link<K, V>) -> (Link<K, V>, Option<Box<Node<K, V>>>) {
    let mut node = match link {
        None => return (None, None),
        Some(node) => node,
    };

    if node.left.is_none() {
        return (node.right.take(), Some(node));
    }
    if !is_red(&node.left) && !is_left_red(&node.left) {
        node = move_red_left(node);
    }
    let (left, min) = remove_min(node.left.take());
    node.left = left;
    (Some(balance(node)), min)
}

/// Remove the maximum of the subtree.
/// Return the new subtree root and the detached node
pub(super) fn remove_max<K, V>(link: Link<K, V>) -> (Link<K, V>, Option<Box<Node<K, V>>>) {
    let mut node = match link {
        None => return (None, None),
        Some(node) => node,
    };

    if is_red(&node.left) {
        node = rotate_right(node);
    }
    if node.right.is_none() {
        return (node.left.take(), Some(node));
    }
    if !is_red(&node.right) && !is_left_red(&node.right) {
        node = move_red_right(node);
    }
    let (right, max) = remove_max(node.right.take());
    node.right = right;
    (Some(balance(node)), max)
}

/// Recursive implementation of `LlrbTree::remove`. The key is expected to be
/// present in the subtree.
/// Return the new subtree root and a detached node holding the removed entry
pub(super) fn remove<K, V, C: Compare<K>>(
    link: Link<K, V>,
    key: &K,
    cmp: &C,
) -> (Link<K, V>, Option<Box<Node<K, V>>>) {
    let mut node = match link {
        None => return (None, None),
        Some(node) => node,
    };

    if cmp.compare(key, &node.key) == Ordering::Less {
        if node.left.is_none() {
            return (Some(node), None);
        }
        if !is_red(&node.left) && !is_left_red(&node.left) {
            node = move_red_left(node);
        }
        let (left, removed) = remove(node.left.take(), key, cmp);
        node.left = left;
        return (Some(balance(node)), removed);
    }

    if is_red(&node.left) {
        node = rotate_right(node);
    }
    if cmp.compare(key, &node.key) == Ordering::Equal && node.right.is_none() {
        return (node.left.take(), Some(node));
    }
    if node.right.is_none() {
        return (Some(balance(node)), None);
    }
    if !is_red(&node.right) && !is_left_red(&node.right) {
        node = move_red_right(node);
    }

    let removed = if cmp.compare(key, &node.key) == Ordering::Equal {
        // Take the successor's place: its entry moves up here, and the
        // detached successor node carries the removed entry out
        let (right, successor) = remove_min(node.right.take());
        node.right = right;
        successor.map(|mut successor| {
            mem::swap(&mut node.key, &mut successor.key);
            mem::swap(&mut node.value, &mut successor.value);
            successor
        })
    } else {
        let (right, removed) = remove(node.right.take(), key, cmp);
        node.right = right;
        removed
    };
    (Some(balance(node)), removed)
}

pub(super) fn height<K, V>(link: &Link<K, V>) -> Option<usize> {
    let node = link.as_ref()?;
    let below = match (height(&node.left), height(&node.right)) {
        (None, None) => 0,
        (left, right) => 1 + left.max(right).unwrap_or(0),
    };
    Some(below)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compare::Natural;

    fn build(keys: &[i32]) -> Box<Node<i32, i32>> {
        let mut root = None;
        for &key in keys {
            let (mut node, _) = insert(root, key, key * 10, &Natural);
            node.color = Color::Black;
            root = Some(node);
        }
        root.unwrap()
    }

    #[test]
    fn rotations_keep_sizes() {
        let mut node = Node::new(2, ());
        node.left = Some(Node::new(1, ()));
        node.right = Some(Node::new(3, ()));
        node.update_size();
        assert_eq!(node.size, 3);

        let node = rotate_left(node);
        assert_eq!(node.key, 3);
        assert_eq!(node.size, 3);
        assert_eq!(node.left.as_ref().unwrap().size, 2);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Red);

        let node = rotate_right(node);
        assert_eq!(node.key, 2);
        assert_eq!(node.size, 3);
        assert_eq!(node.right.as_ref().unwrap().size, 1);
    }

    #[test]
    fn flip_inverts_each_color() {
        let mut node = Node::new(2, ());
        node.color = Color::Black;
        node.left = Some(Node::new(1, ()));
        node.right = Some(Node::new(3, ()));
        node.right.as_mut().unwrap().color = Color::Black;

        node.flip_colors();
        assert_eq!(node.color, Color::Red);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Black);
        assert_eq!(node.right.as_ref().unwrap().color, Color::Red);

        node.flip_colors();
        assert_eq!(node.color, Color::Black);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Red);
        assert_eq!(node.right.as_ref().unwrap().color, Color::Black);
    }

    #[test]
    fn ascending_inserts_lean_left() {
        // 1, 2, 3 in order: the red link must end up on the left or be split
        let root = build(&[1, 2, 3]);
        assert_eq!(root.key, 2);
        assert_eq!(root.size, 3);
        assert!(!is_red(&root.right));
        assert_eq!(height(&Some(root)), Some(1));
    }

    #[test]
    fn insert_replaces_value() {
        let root = build(&[5, 3, 8]);
        let (root, replaced) = insert(Some(root), 3, 0, &Natural);
        assert_eq!(replaced, Some(30));
        assert_eq!(root.size, 3);
    }

    #[test]
    fn remove_successor_carries_removed_entry() {
        let mut root = build(&[1, 2, 3, 4, 5, 6, 7]);
        if !is_red(&root.left) && !is_red(&root.right) {
            root.color = Color::Red;
        }
        let (root, removed) = remove(Some(root), &4, &Natural);
        let (key, value) = removed.unwrap().into_entry();
        assert_eq!((key, value), (4, 40));
        assert_eq!(size(&root), 6);
    }

    #[test]
    fn height_of_absent_subtree() {
        assert_eq!(height::<i32, i32>(&None), None);
        assert_eq!(height(&Some(Node::new(1, 1))), Some(0));
    }
}
