//! Level-order token codec.
//!
//! Format: values in breadth-first order separated by a single space. Every
//! real node contributes one token for each of its two child slots; an absent
//! child is written as `null` and is not expanded further. The empty tree is
//! the empty string.
//!
//! ```text
//!     1
//!    / \       =>  "1 2 3 null null null null"
//!   2   3
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use generational_arena::Index;
use itertools::Itertools;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, instrument};

use super::BinaryTree;
use crate::config::CodecSettings;
use crate::errors::{TreeError, TreeResult};
use crate::node::Side;

pub const NULL_TOKEN: &str = "null";

/// Encoder/decoder for the token format, bounded by [`CodecSettings`].
#[derive(Debug, Clone, Default)]
pub struct TokenCodec {
    settings: CodecSettings,
}

impl TokenCodec {
    pub fn new(settings: CodecSettings) -> Self {
        Self { settings }
    }

    #[instrument(level = "debug", skip_all)]
    pub fn encode(&self, tree: &BinaryTree) -> String {
        let mut tokens = Vec::with_capacity(tree.len() * 2 + 1);
        let mut queue: VecDeque<Option<Index>> = VecDeque::new();
        if let Some(root) = tree.root_index() {
            queue.push_back(Some(root));
        }

        while let Some(slot) = queue.pop_front() {
            match slot.and_then(|idx| tree.get(idx)) {
                Some(node) => {
                    tokens.push(node.value.to_string());
                    queue.push_back(node.left);
                    queue.push_back(node.right);
                }
                None => tokens.push(NULL_TOKEN.to_string()),
            }
        }

        tokens.iter().join(" ")
    }

    /// Rebuilds a tree from its token string.
    ///
    /// A stream that ends early leaves the remaining child slots empty.
    /// Tokens that are neither an integer nor `null` are rejected.
    #[instrument(level = "debug", skip(self))]
    pub fn decode(&self, text: &str) -> TreeResult<BinaryTree> {
        if text.is_empty() {
            return Ok(BinaryTree::new());
        }

        let values = self.parse_tokens(text)?;
        let mut values = values.into_iter();

        let root_value = values.next().flatten().ok_or(TreeError::NullRoot)?;
        let mut tree = BinaryTree::with_root(root_value);
        let mut queue: VecDeque<_> = tree.root().into_iter().collect();

        'build: while let Some(parent) = queue.pop_front() {
            for side in [Side::Left, Side::Right] {
                let Some(token) = values.next() else {
                    debug!("token stream exhausted, leaving remaining slots empty");
                    break 'build;
                };
                if let Some(value) = token {
                    queue.push_back(tree.insert(parent, side, value)?);
                }
            }
        }

        let leftover = values.len();
        if leftover > 0 {
            debug!(leftover, "ignoring tokens past the last node");
        }
        Ok(tree)
    }

    fn parse_tokens(&self, text: &str) -> TreeResult<Vec<Option<i64>>> {
        let tokens: Vec<&str> = text.split(' ').collect();
        if let Some(limit) = self.settings.max_tokens {
            if tokens.len() > limit {
                return Err(TreeError::TooManyTokens {
                    limit,
                    actual: tokens.len(),
                });
            }
        }

        tokens
            .into_iter()
            .enumerate()
            .map(|(position, token)| parse_token(position, token))
            .collect()
    }
}

fn parse_token(position: usize, token: &str) -> TreeResult<Option<i64>> {
    if token == NULL_TOKEN {
        return Ok(None);
    }
    token.parse::<i64>().map(Some).map_err(|_| {
        debug!(position, token, "rejecting token");
        TreeError::InvalidToken {
            position,
            token: token.to_string(),
        }
    })
}

impl BinaryTree {
    /// Token string for this tree, see the module docs for the format.
    pub fn serialize(&self) -> String {
        TokenCodec::default().encode(self)
    }

    pub fn deserialize(text: &str) -> TreeResult<BinaryTree> {
        TokenCodec::default().decode(text)
    }
}

impl FromStr for BinaryTree {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BinaryTree::deserialize(s)
    }
}

impl Serialize for BinaryTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BinaryTree::serialize(self))
    }
}

impl<'de> Deserialize<'de> for BinaryTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TokenVisitor;

        impl Visitor<'_> for TokenVisitor {
            type Value = BinaryTree;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a level-order token string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<BinaryTree, E> {
                BinaryTree::deserialize(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TokenVisitor)
    }
}
