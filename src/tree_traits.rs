use generational_arena::Index;
use termtree::Tree as TermTree;
use tracing::instrument;

use crate::binary::BinaryTree;
use crate::config::DisplaySettings;
use crate::nary::Tree;

/// Conversion into a printable `termtree` rendering, node labels are values.
pub trait TreeDisplay {
    fn to_tree_string_with(&self, settings: &DisplaySettings) -> TermTree<String>;

    fn to_tree_string(&self) -> TermTree<String> {
        self.to_tree_string_with(&DisplaySettings::default())
    }
}

impl TreeDisplay for BinaryTree {
    #[instrument(level = "debug", skip_all)]
    fn to_tree_string_with(&self, settings: &DisplaySettings) -> TermTree<String> {
        fn build(tree: &BinaryTree, idx: Index, settings: &DisplaySettings) -> TermTree<String> {
            let Some(node) = tree.get(idx) else {
                return TermTree::new(settings.missing_label.clone());
            };
            let mut current = TermTree::new(node.value.to_string());
            if node.is_leaf() {
                return current;
            }
            for slot in [node.left, node.right] {
                match slot {
                    Some(child) => {
                        current.push(build(tree, child, settings));
                    }
                    None if settings.show_missing => {
                        current.push(TermTree::new(settings.missing_label.clone()));
                    }
                    None => {}
                }
            }
            current
        }

        match self.root_index() {
            Some(root) => build(self, root, settings),
            None => TermTree::new(settings.empty_label.clone()),
        }
    }
}

impl TreeDisplay for Tree {
    #[instrument(level = "debug", skip_all)]
    fn to_tree_string_with(&self, settings: &DisplaySettings) -> TermTree<String> {
        fn build(tree: &Tree, idx: Index) -> Option<TermTree<String>> {
            let node = tree.get(idx)?;
            let leaves: Vec<_> = node
                .children
                .iter()
                .filter_map(|&child| build(tree, child))
                .collect();
            Some(TermTree::new(node.value.to_string()).with_leaves(leaves))
        }

        self.root_index()
            .and_then(|root| build(self, root))
            .unwrap_or_else(|| TermTree::new(settings.empty_label.clone()))
    }
}
