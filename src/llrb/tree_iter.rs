use super::node::Node;
use super::MAX_DEPTH;
use arrayvec::ArrayVec;

/// In-order iterator over the entries of a tree
pub struct TreeIter<'a, K, V> {
    /// Nodes whose left subtree is being visited, the next entry on top
    stack: ArrayVec<[&'a Node<K, V>; MAX_DEPTH]>,
    len: usize,
}

impl<'a, K, V> TreeIter<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut iter = TreeIter {
            stack: ArrayVec::new(),
            len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<K, V>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for TreeIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.len -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> ExactSizeIterator for TreeIter<'a, K, V> {}
impl<'a, K, V> std::iter::FusedIterator for TreeIter<'a, K, V> {}

#[cfg(test)]
mod test {
    use crate::LlrbTree;

    #[test]
    fn iter() {
        fn check(mut values: Vec<u32>) {
            let tree: LlrbTree<u32, u32> = values.iter().map(|&v| (v, v * 2)).collect();
            values.sort();
            values.dedup();

            let iter = tree.iter();
            assert_eq!(iter.len(), values.len());
            let collected: Vec<(u32, u32)> = iter.map(|(&k, &v)| (k, v)).collect();
            let expected: Vec<(u32, u32)> = values.iter().map(|&v| (v, v * 2)).collect();
            assert_eq!(collected, expected);
        }

        check(vec![]);
        check(vec![17]);
        check((0..100).collect());
        check((0..100).rev().collect());

        // Pi
        check(vec![
            31, 41, 59, 26, 53, 58, 97, 93, 23, 84, 62, 64, 33, 83, 27, 95, 2, 88, 41, 97, 16, 93,
            99, 37, 51, 5, 82, 9, 74, 94, 45, 92, 30, 78, 16, 40, 62, 86, 20, 89, 98, 62, 80, 34,
            82, 53, 42, 11, 70, 67, 98, 21, 48, 8, 65, 13, 28, 23, 6, 64, 70, 93, 84, 46, 9, 55, 5,
            82, 23, 17, 25, 35, 94, 8, 12, 84, 81, 11, 74, 50, 28, 41, 2, 70, 19, 38, 52, 11, 5,
            55, 96, 44, 62, 29, 48, 95, 49, 30, 38, 19, 64, 42, 88, 10, 97, 56, 65, 93, 34, 46, 12,
        ]);
    }

    #[test]
    fn fused() {
        let tree: LlrbTree<u8, ()> = vec![(1, ()), (2, ())].into_iter().collect();
        let mut iter = tree.iter();
        assert_eq!(iter.next().map(|(k, _)| *k), Some(1));
        assert_eq!(iter.next().map(|(k, _)| *k), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn borrowed_into_iter() {
        let tree: LlrbTree<&str, usize> = vec![("b", 2), ("a", 1), ("c", 3)].into_iter().collect();
        let mut total = 0;
        let mut keys = String::new();
        for (key, value) in &tree {
            keys.push_str(key);
            total += value;
        }
        assert_eq!(keys, "abc");
        assert_eq!(total, 6);
    }
}
