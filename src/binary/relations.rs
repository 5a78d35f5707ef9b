use generational_arena::Index;
use tracing::{debug, instrument};

use super::BinaryTree;
use crate::node::NodeId;

/// Where a node sits relative to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    depth: usize,
    parent: Option<Index>,
}

impl BinaryTree {
    /// True if both nodes are on the same level but have different parents.
    ///
    /// Nodes that are not part of this tree are never cousins. A node is not
    /// its own cousin and the root has no cousins.
    #[instrument(level = "debug", skip(self))]
    pub fn are_cousins(&self, a: NodeId, b: NodeId) -> bool {
        match (self.placement(a), self.placement(b)) {
            (Some(pa), Some(pb)) => pa.depth == pb.depth && pa.parent != pb.parent,
            _ => {
                debug!("cousin query on node outside the tree");
                false
            }
        }
    }

    /// Deepest node that is an ancestor of both `a` and `b`.
    ///
    /// A node counts as its own ancestor, so if `a` is an ancestor of `b` the
    /// result is `a`. None if either node is not part of this tree.
    #[instrument(level = "debug", skip(self))]
    pub fn lowest_common_ancestor(&self, a: NodeId, b: NodeId) -> Option<NodeId> {
        let path_a = self.path_to(a)?;
        let path_b = self.path_to(b)?;

        path_a
            .iter()
            .zip(path_b.iter())
            .take_while(|(x, y)| x == y)
            .last()
            .map(|(&idx, _)| self.handle(idx))
    }

    /// Depth-first search (left before right) for the node with this identity.
    fn placement(&self, target: NodeId) -> Option<Placement> {
        let target = self.resolve(target)?;
        let mut stack: Vec<(Index, Placement)> = self
            .root_index()
            .map(|root| (root, Placement { depth: 0, parent: None }))
            .into_iter()
            .collect();

        while let Some((idx, placement)) = stack.pop() {
            if idx == target {
                return Some(placement);
            }
            let Some(node) = self.get(idx) else { continue };
            let below = Placement {
                depth: placement.depth + 1,
                parent: Some(idx),
            };
            // right first so the left subtree is searched first
            for child in [node.right, node.left].into_iter().flatten() {
                stack.push((child, below));
            }
        }

        None
    }

    /// Root-to-target path of arena indices, both ends included.
    fn path_to(&self, target: NodeId) -> Option<Vec<Index>> {
        let target = self.resolve(target)?;
        let mut path = Vec::new();
        self.find_path(self.root_index(), target, &mut path)
            .then_some(path)
    }

    fn find_path(&self, idx: Option<Index>, target: Index, path: &mut Vec<Index>) -> bool {
        let Some(idx) = idx else { return false };
        let Some(node) = self.get(idx) else { return false };

        path.push(idx);
        if idx == target
            || self.find_path(node.left, target, path)
            || self.find_path(node.right, target, path)
        {
            return true;
        }
        path.pop();
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Family {
        tree: BinaryTree,
        root: NodeId,
        two: NodeId,
        three: NodeId,
        four: NodeId,
        five: NodeId,
        six: NodeId,
    }

    //        1
    //      /   \
    //     2     3
    //    / \     \
    //   4   5     6
    fn family() -> Family {
        let mut tree = BinaryTree::with_root(1);
        let root = tree.root().unwrap();
        let two = tree.insert_left(root, 2).unwrap();
        let three = tree.insert_right(root, 3).unwrap();
        let four = tree.insert_left(two, 4).unwrap();
        let five = tree.insert_right(two, 5).unwrap();
        let six = tree.insert_right(three, 6).unwrap();
        Family { tree, root, two, three, four, five, six }
    }

    #[test]
    fn test_cousins_under_different_parents() {
        let f = family();
        assert!(f.tree.are_cousins(f.four, f.six));
        assert!(f.tree.are_cousins(f.six, f.five));
    }

    #[test]
    fn test_siblings_are_not_cousins() {
        let f = family();
        assert!(!f.tree.are_cousins(f.four, f.five));
        assert!(!f.tree.are_cousins(f.two, f.three));
    }

    #[test]
    fn test_different_levels_are_not_cousins() {
        let f = family();
        assert!(!f.tree.are_cousins(f.two, f.six));
    }

    #[test]
    fn test_node_is_not_its_own_cousin() {
        let f = family();
        assert!(!f.tree.are_cousins(f.four, f.four));
        assert!(!f.tree.are_cousins(f.root, f.root));
    }

    #[test]
    fn test_cousins_with_foreign_node() {
        let f = family();
        let other = BinaryTree::with_root(4);
        assert!(!f.tree.are_cousins(f.four, other.root().unwrap()));
    }

    #[test]
    fn test_lca_of_nodes_in_different_subtrees() {
        let f = family();
        assert_eq!(f.tree.lowest_common_ancestor(f.four, f.six), Some(f.root));
        assert_eq!(f.tree.lowest_common_ancestor(f.four, f.five), Some(f.two));
    }

    #[test]
    fn test_lca_when_one_node_is_ancestor() {
        let f = family();
        assert_eq!(f.tree.lowest_common_ancestor(f.three, f.six), Some(f.three));
        assert_eq!(f.tree.lowest_common_ancestor(f.five, f.root), Some(f.root));
        assert_eq!(f.tree.lowest_common_ancestor(f.five, f.five), Some(f.five));
    }

    #[test]
    fn test_lca_with_foreign_node() {
        let f = family();
        let other = BinaryTree::with_root(1);
        assert_eq!(f.tree.lowest_common_ancestor(f.four, other.root().unwrap()), None);
        assert_eq!(BinaryTree::new().lowest_common_ancestor(f.four, f.five), None);
    }

    #[test]
    fn test_lca_compares_identity_not_value() {
        // duplicate values must not confuse the path intersection
        let mut tree = BinaryTree::with_root(7);
        let root = tree.root().unwrap();
        let left = tree.insert_left(root, 7).unwrap();
        let right = tree.insert_right(root, 7).unwrap();
        let deep = tree.insert_left(left, 7).unwrap();

        assert_eq!(tree.lowest_common_ancestor(deep, right), Some(root));
        assert_eq!(tree.lowest_common_ancestor(deep, left), Some(left));
    }
}
