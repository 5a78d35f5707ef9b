//! Node payloads and the handles used to address them.

use std::fmt;

use generational_arena::Index;
use uuid::Uuid;

/// Handle to a node inside one particular tree.
///
/// Combines the owning tree's id with the arena slot, so a handle minted by
/// one tree never resolves inside another tree, even when the slots coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) tree: Uuid,
    pub(crate) index: Index,
}

impl NodeId {
    pub(crate) fn new(tree: Uuid, index: Index) -> Self {
        Self { tree, index }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.index.into_raw_parts();
        write!(f, "node#{}.{}@{:08x}", slot, generation, self.tree.as_fields().0)
    }
}

/// Narrows a wide sum back to `i64`, clamping at the nearest bound.
pub(crate) fn saturate(sum: i128) -> i64 {
    i64::try_from(sum).unwrap_or(if sum < 0 { i64::MIN } else { i64::MAX })
}

/// Child slot of a binary node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Node of a [`BinaryTree`](crate::binary::BinaryTree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode {
    pub value: i64,
    /// Arena index of the left child
    pub left: Option<Index>,
    /// Arena index of the right child
    pub right: Option<Index>,
}

impl BinaryNode {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn slot_mut(&mut self, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Node of an N-ary [`Tree`](crate::nary::Tree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: i64,
    /// Arena indices of child nodes, in insertion order
    pub children: Vec<Index>,
}

impl TreeNode {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_node_leaf() {
        let node = BinaryNode::new(7);
        assert!(node.is_leaf());
        assert_eq!(node.child(Side::Left), None);
    }

    #[test]
    fn test_saturate_clamps_to_i64() {
        assert_eq!(saturate(42), 42);
        assert_eq!(saturate(i128::from(i64::MAX) + 1), i64::MAX);
        assert_eq!(saturate(i128::from(i64::MIN) - 1), i64::MIN);
    }

    #[test]
    fn test_node_id_display_names_owning_tree() {
        let index = Index::from_raw_parts(0, 0);
        let local = NodeId::new(Uuid::from_u128(0x1234_5678 << 96), index);
        let foreign = NodeId::new(Uuid::from_u128(0x9abc_def0 << 96), index);

        assert_eq!(local.to_string(), "node#0.0@12345678");
        assert_eq!(foreign.to_string(), "node#0.0@9abcdef0");
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }
}
