use generational_arena::{Arena, Index};
use tracing::instrument;
use uuid::Uuid;

use crate::errors::{TreeError, TreeResult};
use crate::node::{saturate, NodeId, TreeNode};

/// Arena-based N-ary tree of integer values.
///
/// Children keep their insertion order, which fixes the traversal order of
/// [`Tree::iter`]. The aggregations do not depend on that order.
#[derive(Debug)]
pub struct Tree {
    id: Uuid,
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn with_root(value: i64) -> Self {
        let mut tree = Self::new();
        tree.root = Some(tree.arena.insert(TreeNode::new(value)));
        tree
    }

    #[instrument(level = "trace", skip(self))]
    pub fn set_root(&mut self, value: i64) -> TreeResult<NodeId> {
        if self.root.is_some() {
            return Err(TreeError::RootOccupied);
        }
        let idx = self.arena.insert(TreeNode::new(value));
        self.root = Some(idx);
        Ok(NodeId::new(self.id, idx))
    }

    /// Appends a new child holding `value` after the existing children of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_child(&mut self, parent: NodeId, value: i64) -> TreeResult<NodeId> {
        let parent_idx = self
            .resolve(parent)
            .ok_or(TreeError::NodeNotFound(parent))?;
        let child_idx = self.arena.insert(TreeNode::new(value));
        self.arena[parent_idx].children.push(child_idx);
        Ok(NodeId::new(self.id, child_idx))
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root.map(|idx| NodeId::new(self.id, idx))
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.resolve(id).and_then(|idx| self.arena.get(idx))
    }

    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.node(id).map(|node| node.value)
    }

    /// Handles of the children of `id` in insertion order, empty for unknown nodes.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id)
            .map(|node| {
                node.children
                    .iter()
                    .map(|&idx| NodeId::new(self.id, idx))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Pre-order traversal, children visited left to right.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Sum of all node values, 0 for the empty tree.
    ///
    /// Accumulated in `i128`, a total beyond the `i64` range saturates at the
    /// nearest bound.
    #[instrument(level = "debug", skip(self))]
    pub fn sum_values(&self) -> i64 {
        saturate(self.iter().map(|(_, node)| i128::from(node.value)).sum())
    }

    /// Number of nodes holding an even value, negative values included.
    #[instrument(level = "debug", skip(self))]
    pub fn count_evens(&self) -> usize {
        self.iter().filter(|(_, node)| node.value % 2 == 0).count()
    }

    /// Number of nodes whose value is strictly greater than `lower_bound`.
    #[instrument(level = "debug", skip(self))]
    pub fn num_greater(&self, lower_bound: i64) -> usize {
        self.iter().filter(|(_, node)| node.value > lower_bound).count()
    }

    /// Node-count of the longest root-to-leaf path, 0 for the empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.root.map_or(0, |root| self.calculate_depth(root))
    }

    fn calculate_depth(&self, idx: Index) -> usize {
        self.arena.get(idx).map_or(0, |node| {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        })
    }

    /// Values of all leaf nodes in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_values(&self) -> Vec<i64> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.value)
            .collect()
    }

    pub(crate) fn get(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub(crate) fn root_index(&self) -> Option<Index> {
        self.root
    }

    fn resolve(&self, id: NodeId) -> Option<Index> {
        (id.tree == self.id && self.arena.contains(id.index)).then_some(id.index)
    }
}

pub struct TreeIterator<'a> {
    tree: &'a Tree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            stack: tree.root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get(current_idx) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children.iter().rev());
                return Some((NodeId::new(self.tree.id, current_idx), node));
            }
        }
        None
    }
}
