//! Arena-backed binary tree.
//!
//! Nodes live in a generational arena owned by the tree and are addressed by
//! [`NodeId`] handles. Nodes are only created through the insertion methods,
//! which always allocate a fresh node into an empty slot, so every node has
//! exactly one parent and the structure can never contain a cycle.
//!
//! The query algorithms are spread across the submodules:
//! depths in `depth`, path sums in `path_sum`, bounded search in `search`,
//! cousin and ancestor queries in `relations` and the token codec in `codec`.

mod codec;
mod depth;
mod path_sum;
mod relations;
mod search;

pub use codec::{TokenCodec, NULL_TOKEN};

use generational_arena::{Arena, Index};
use tracing::instrument;
use uuid::Uuid;

use crate::errors::{TreeError, TreeResult};
use crate::node::{BinaryNode, NodeId, Side};

#[derive(Debug)]
pub struct BinaryTree {
    /// Identity stamped into every handle this tree hands out
    id: Uuid,
    arena: Arena<BinaryNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryTree {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn with_root(value: i64) -> Self {
        let mut tree = Self::new();
        tree.root = Some(tree.arena.insert(BinaryNode::new(value)));
        tree
    }

    #[instrument(level = "trace", skip(self))]
    pub fn set_root(&mut self, value: i64) -> TreeResult<NodeId> {
        if self.root.is_some() {
            return Err(TreeError::RootOccupied);
        }
        let idx = self.arena.insert(BinaryNode::new(value));
        self.root = Some(idx);
        Ok(self.handle(idx))
    }

    pub fn insert_left(&mut self, parent: NodeId, value: i64) -> TreeResult<NodeId> {
        self.insert(parent, Side::Left, value)
    }

    pub fn insert_right(&mut self, parent: NodeId, value: i64) -> TreeResult<NodeId> {
        self.insert(parent, Side::Right, value)
    }

    /// Creates a new node holding `value` in the `side` slot of `parent`.
    ///
    /// Fails if `parent` does not belong to this tree or the slot is taken.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, parent: NodeId, side: Side, value: i64) -> TreeResult<NodeId> {
        let parent_idx = self
            .resolve(parent)
            .ok_or(TreeError::NodeNotFound(parent))?;
        if self.arena[parent_idx].child(side).is_some() {
            return Err(TreeError::SlotOccupied { parent, side });
        }
        let child_idx = self.arena.insert(BinaryNode::new(value));
        *self.arena[parent_idx].slot_mut(side) = Some(child_idx);
        Ok(self.handle(child_idx))
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root.map(|idx| self.handle(idx))
    }

    pub fn node(&self, id: NodeId) -> Option<&BinaryNode> {
        self.resolve(id).and_then(|idx| self.arena.get(idx))
    }

    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.node(id).map(|node| node.value)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.child(id, Side::Left)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.child(id, Side::Right)
    }

    pub fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.node(id)
            .and_then(|node| node.child(side))
            .map(|idx| self.handle(idx))
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn root_index(&self) -> Option<Index> {
        self.root
    }

    pub(crate) fn get(&self, idx: Index) -> Option<&BinaryNode> {
        self.arena.get(idx)
    }

    pub(crate) fn handle(&self, idx: Index) -> NodeId {
        NodeId::new(self.id, idx)
    }

    /// Maps a handle back to an arena index, None for foreign or stale handles.
    pub(crate) fn resolve(&self, id: NodeId) -> Option<Index> {
        (id.tree == self.id && self.arena.contains(id.index)).then_some(id.index)
    }

    /// Structural equality: same shape, same values, ignoring node identity.
    fn same_shape(&self, other: &BinaryTree) -> bool {
        let mut stack = vec![(self.root, other.root)];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => match (self.get(a), other.get(b)) {
                    (Some(na), Some(nb)) if na.value == nb.value => {
                        stack.push((na.left, nb.left));
                        stack.push((na.right, nb.right));
                    }
                    _ => return false,
                },
                _ => return false,
            }
        }
        true
    }
}

/// A clone is a distinct tree: handles of the source tree do not resolve in it.
impl Clone for BinaryTree {
    fn clone(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            arena: self.arena.clone(),
            root: self.root,
        }
    }
}

impl PartialEq for BinaryTree {
    fn eq(&self, other: &Self) -> bool {
        self.same_shape(other)
    }
}

impl Eq for BinaryTree {}
