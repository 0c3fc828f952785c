mod node;
mod tree;
mod tree_iter;

pub use node::Node;
pub use tree::{LlrbTree, Stats};
pub use tree_iter::TreeIter;

// The balance invariants bound the height by 2*log2(len + 1), so a path can
// never hold more nodes than this for any length addressable by `usize`
const MAX_DEPTH: usize = 128;

type Link<K, V> = Option<Box<Node<K, V>>>;

/// Color of the link from a node's parent to the node itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}
