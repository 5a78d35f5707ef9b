use generational_arena::Index;
use tracing::instrument;

use super::BinaryTree;
use crate::node::saturate;

impl BinaryTree {
    /// Largest value sum over any connected path in the tree.
    ///
    /// A path may start and end anywhere and may bend through one node using
    /// both of its subtrees. Subtrees with a negative best sum are left out,
    /// so an all-negative tree yields its largest single value. The empty
    /// tree yields 0. Sums are accumulated in `i128` and a result beyond the
    /// `i64` range saturates at `i64::MAX`.
    #[instrument(level = "debug", skip(self))]
    pub fn max_sum(&self) -> i64 {
        let mut best = None;
        self.best_downward(self.root_index(), &mut best);
        best.map_or(0, saturate)
    }

    /// Best sum of a path starting at `idx` and descending into at most one
    /// subtree. Records the best bent path through `idx` in `best`.
    fn best_downward(&self, idx: Option<Index>, best: &mut Option<i128>) -> i128 {
        let Some(node) = idx.and_then(|idx| self.get(idx)) else {
            return 0;
        };
        let left = self.best_downward(node.left, best).max(0);
        let right = self.best_downward(node.right, best).max(0);

        let value = i128::from(node.value);
        let bent = value + left + right;
        *best = Some(best.map_or(bent, |current| current.max(bent)));

        value + left.max(right)
    }
}
