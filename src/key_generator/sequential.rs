use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over `0..num`, in either direction.
/// Sorted input is the worst case for an unbalanced search tree
pub struct SequentialGenerator {
    position: usize,
    num: usize,
    order: SequentialOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequentialOrder {
    Ascending,
    Descending,
}

impl SequentialGenerator {
    pub fn new(num: usize, order: SequentialOrder) -> SequentialGenerator {
        SequentialGenerator {
            position: 0,
            num,
            order,
        }
    }
}

impl Iterator for SequentialGenerator {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.num {
            return None;
        }
        let r = match self.order {
            SequentialOrder::Ascending => self.position,
            SequentialOrder::Descending => self.num - 1 - self.position,
        };
        self.position += 1;
        Some(r)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.num - self.position;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialGenerator {}

impl ExactSizeIterator for SequentialGenerator {}
