use thiserror::Error;

use crate::node::{NodeId, Side};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Invalid token at position {position}: {token:?}")]
    InvalidToken {
        position: usize,
        token: String,
    },

    #[error("Serialized tree starts with a null root")]
    NullRoot,

    #[error("Serialized tree has {actual} tokens, limit is {limit}")]
    TooManyTokens {
        limit: usize,
        actual: usize,
    },

    #[error("Node not found in tree: {0}")]
    NodeNotFound(NodeId),

    #[error("{side} child of {parent} is already set")]
    SlotOccupied {
        parent: NodeId,
        side: Side,
    },

    #[error("Tree already has a root")]
    RootOccupied,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
