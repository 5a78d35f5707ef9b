use std::collections::VecDeque;

use tracing::instrument;

use super::BinaryTree;

impl BinaryTree {
    /// Smallest value strictly greater than `lower_bound`, None if no node qualifies.
    ///
    /// Values are not assumed to be ordered, every node is visited.
    #[instrument(level = "debug", skip(self))]
    pub fn next_larger(&self, lower_bound: i64) -> Option<i64> {
        let mut smallest_above: Option<i64> = None;
        let mut queue: VecDeque<_> = self.root_index().into_iter().collect();

        while let Some(idx) = queue.pop_front() {
            let Some(node) = self.get(idx) else { continue };
            if node.value > lower_bound && smallest_above.map_or(true, |s| node.value < s) {
                smallest_above = Some(node.value);
            }
            queue.extend([node.left, node.right].into_iter().flatten());
        }

        smallest_above
    }
}
