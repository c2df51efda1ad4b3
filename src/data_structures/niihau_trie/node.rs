// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Niihau Trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node stands
//! for one symbol on a path from the root and knows its parent, so a word
//! can be rebuilt from any node and the successor walk can climb to siblings.

use std::collections::BTreeMap;

/// Number of symbols in the supported alphabet (basic ASCII).
pub const ALPHABET_SIZE: usize = 128;

/// Handle of a node inside a [`NodeArena`](super::arena::NodeArena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The root always occupies the first arena slot.
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the Niihau Trie.
///
/// The root carries no meaningful symbol; its terminal flag records whether
/// the empty string is stored.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Symbol this node contributes to the word spelled from the root
    pub symbol: u8,

    /// Whether the path ending here is a stored word
    pub is_terminal: bool,

    /// Children keyed by symbol, kept in ascending symbol order
    pub children: BTreeMap<u8, NodeId>,

    /// Non-owning link back to the parent (`None` for the root)
    pub parent: Option<NodeId>,
}

impl TrieNode {
    /// Creates the root node.
    pub fn root() -> Self {
        Self {
            symbol: 0,
            is_terminal: false,
            children: BTreeMap::new(),
            parent: None,
        }
    }

    /// Creates a non-terminal child node for `symbol` under `parent`.
    pub fn new(symbol: u8, parent: NodeId) -> Self {
        Self {
            symbol,
            is_terminal: false,
            children: BTreeMap::new(),
            parent: Some(parent),
        }
    }

    /// Returns the child reached through `symbol`, if any.
    pub fn child(&self, symbol: u8) -> Option<NodeId> {
        self.children.get(&symbol).copied()
    }

    /// Returns the child with the smallest symbol.
    pub fn first_child(&self) -> Option<NodeId> {
        self.children.values().next().copied()
    }

    /// Returns the child whose symbol is the smallest one strictly greater than `symbol`.
    pub fn next_child_after(&self, symbol: u8) -> Option<NodeId> {
        use std::ops::Bound::{Excluded, Unbounded};
        self.children
            .range((Excluded(symbol), Unbounded))
            .next()
            .map(|(_, &id)| id)
    }

    /// A node that is neither terminal nor leads anywhere can be dropped.
    pub fn is_dead(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::root()
    }
}
