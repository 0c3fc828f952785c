use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Min, max and their removal counterparts have nothing to return
    #[error("the tree is empty")]
    EmptyTree,

    #[error("keys out of order under a node at depth {depth}")]
    UnsortedKeys { depth: usize },

    #[error("cached subtree size is {found}, expected {expected}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("red link leaning right at depth {depth}")]
    RightLeaningRed { depth: usize },

    #[error("two consecutive red links at depth {depth}")]
    ConsecutiveReds { depth: usize },

    #[error("unbalanced black links: {left} on the left and {right} on the right")]
    UnbalancedBlacks { left: usize, right: usize },

    #[error("the root is red")]
    RedRoot,
}
