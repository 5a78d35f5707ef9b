//! Arena-backed binary and N-ary trees of integers.
//!
//! [`BinaryTree`] answers depth, path-sum, bounded-search, cousin and lowest
//! common ancestor queries and round-trips through a level-order token string.
//! [`Tree`] is the N-ary variant with simple aggregations.
//!
//! Nodes are addressed by [`NodeId`] handles compared by identity, never by value.
//! Trees carry no internal synchronization: mutation takes `&mut self`, queries `&self`.
//!
//! ```
//! use treekit::BinaryTree;
//!
//! let mut tree = BinaryTree::with_root(1);
//! let root = tree.root().unwrap();
//! tree.insert_left(root, 2).unwrap();
//! tree.insert_right(root, 3).unwrap();
//!
//! assert_eq!(tree.max_sum(), 6);
//! assert_eq!(tree.serialize(), "1 2 3 null null null null");
//! assert_eq!(BinaryTree::deserialize(&tree.serialize()).unwrap(), tree);
//! ```

pub mod binary;
pub mod config;
pub mod errors;
pub mod nary;
pub mod node;
pub mod tree_traits;
pub mod util;

pub use binary::{BinaryTree, TokenCodec};
pub use config::Settings;
pub use errors::{TreeError, TreeResult};
pub use nary::Tree;
pub use node::{BinaryNode, NodeId, Side, TreeNode};
pub use tree_traits::TreeDisplay;
