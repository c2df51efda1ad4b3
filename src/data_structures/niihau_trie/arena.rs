// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Slot arena owning every node of a trie.
//!
//! Nodes refer to each other through [`NodeId`] handles instead of pointers.
//! Freed slots are recycled through a free list, so a long run of
//! insert/remove cycles does not grow the arena beyond its peak size.
//! Dropping the arena drops a flat vector, so teardown never recurses.

use super::node::{NodeId, TrieNode};

#[derive(Debug, Clone)]
pub(crate) struct NodeArena {
    slots: Vec<Option<TrieNode>>,
    free: Vec<NodeId>,
    live: usize,
}

impl NodeArena {
    /// Creates an arena holding only the root.
    pub fn new() -> Self {
        Self {
            slots: vec![Some(TrieNode::root())],
            free: Vec::new(),
            live: 1,
        }
    }

    /// Stores `node` and returns its handle.
    pub fn alloc(&mut self, node: TrieNode) -> NodeId {
        self.live += 1;
        if let Some(id) = self.free.pop() {
            self.slots[id.index()] = Some(node);
            return id;
        }
        let id = slot_id(self.slots.len());
        self.slots.push(Some(node));
        id
    }

    /// Releases the slot of `id`. The root is never freed.
    pub fn free(&mut self, id: NodeId) {
        debug_assert_ne!(id, NodeId::ROOT, "the root node is owned by the trie");
        if self.slots[id.index()].take().is_some() {
            self.live -= 1;
            self.free.push(id);
        }
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` refers to a freed slot. Handles are only produced by
    /// the arena itself, so this signals a broken tree invariant.
    pub fn get(&self, id: NodeId) -> &TrieNode {
        self.slots[id.index()]
            .as_ref()
            .unwrap_or_else(|| panic!("dangling node handle {id:?}"))
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        self.slots[id.index()]
            .as_mut()
            .unwrap_or_else(|| panic!("dangling node handle {id:?}"))
    }

    pub fn root(&self) -> &TrieNode {
        self.get(NodeId::ROOT)
    }

    /// Number of live nodes, the root included.
    pub fn live(&self) -> usize {
        self.live
    }
}

/// Handle for the slot at `index`.
///
/// # Panics
///
/// Panics once the arena outgrows the handle space. Wrapping would alias
/// the root.
fn slot_id(index: usize) -> NodeId {
    match u32::try_from(index) {
        Ok(raw) => NodeId(raw),
        Err(_) => panic!("node arena exhausted: slot {index} exceeds the node handle range"),
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}
