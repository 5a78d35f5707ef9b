use std::collections::VecDeque;

use generational_arena::Index;
use tracing::instrument;

use super::BinaryTree;

impl BinaryTree {
    /// Node-count of the shortest root-to-leaf path, 0 for the empty tree.
    ///
    /// Walks level by level and stops at the first leaf, so only the levels
    /// down to the shallowest leaf are visited.
    #[instrument(level = "debug", skip(self))]
    pub fn min_depth(&self) -> usize {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root_index() {
            queue.push_back((root, 1));
        }

        while let Some((idx, depth)) = queue.pop_front() {
            let Some(node) = self.get(idx) else { continue };
            if node.is_leaf() {
                return depth;
            }
            for child in [node.left, node.right].into_iter().flatten() {
                queue.push_back((child, depth + 1));
            }
        }

        0
    }

    /// Node-count of the longest root-to-leaf path, 0 for the empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn max_depth(&self) -> usize {
        self.calculate_depth(self.root_index())
    }

    fn calculate_depth(&self, idx: Option<Index>) -> usize {
        match idx.and_then(|idx| self.get(idx)) {
            Some(node) => {
                1 + self
                    .calculate_depth(node.left)
                    .max(self.calculate_depth(node.right))
            }
            None => 0,
        }
    }
}
