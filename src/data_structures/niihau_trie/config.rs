// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Niihau Trie.

use serde::{Deserialize, Serialize};

/// What happens to the nodes of a word once it is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErasePolicy {
    /// Free the removed word's node and every ancestor left without a
    /// purpose, stopping at the first terminal or branching node.
    #[default]
    Prune,

    /// Only clear the terminal flag. Nodes stay allocated until the trie is
    /// cleared or dropped.
    Lazy,
}

/// Configuration options for the Niihau Trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NiihauTrieConfig {
    /// Node reclamation strategy used by `remove`
    pub erase_policy: ErasePolicy,

    /// Longest key accepted by `insert` (`None` for unbounded)
    pub max_key_length: Option<usize>,
}

impl NiihauTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - erase_policy: `ErasePolicy::Prune`
    /// - max_key_length: None (unbounded)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node reclamation strategy.
    pub fn with_erase_policy(mut self, erase_policy: ErasePolicy) -> Self {
        self.erase_policy = erase_policy;
        self
    }

    /// Limit the length of keys accepted by `insert`.
    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = Some(max_key_length);
        self
    }
}
