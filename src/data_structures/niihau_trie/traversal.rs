// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Traversal primitives shared by the trie facade and its cursors.
//!
//! Every walk here is iterative: keys are consumed through a byte index and
//! subtree enumeration keeps an explicit stack, so the depth of the trie
//! never translates into call-stack depth.

use super::arena::NodeArena;
use super::error::NiihauTrieError;
use super::node::{NodeId, TrieNode, ALPHABET_SIZE};
use super::NiihauTrieResult;

/// Validates `key` against the alphabet and returns its symbols.
pub(crate) fn symbols(key: &str) -> NiihauTrieResult<&[u8]> {
    match key.bytes().position(|b| usize::from(b) >= ALPHABET_SIZE) {
        None => Ok(key.as_bytes()),
        Some(position) => Err(NiihauTrieError::InvalidSymbol {
            symbol: key[position..]
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            position,
        }),
    }
}

/// Follows `key` from the root. Returns the node at its end, if the path exists.
pub(crate) fn find(arena: &NodeArena, key: &[u8]) -> Option<NodeId> {
    key.iter()
        .try_fold(NodeId::ROOT, |id, &symbol| arena.get(id).child(symbol))
}

/// Follows `key` from the root, creating missing nodes, and returns the last one.
pub(crate) fn insert_path(arena: &mut NodeArena, key: &[u8]) -> NodeId {
    let mut current = NodeId::ROOT;
    for &symbol in key {
        current = match arena.get(current).child(symbol) {
            Some(next) => next,
            None => attach_child(arena, current, symbol),
        };
    }
    current
}

/// Allocates a fresh child of `parent` for `symbol`.
pub(crate) fn attach_child(arena: &mut NodeArena, parent: NodeId, symbol: u8) -> NodeId {
    let child = arena.alloc(TrieNode::new(symbol, parent));
    arena.get_mut(parent).children.insert(symbol, child);
    child
}

/// Frees `id` and every ancestor left dead by it, bottom-up.
///
/// Stops at the root, at a terminal node, or at a node that still has
/// other children. Returns the number of freed nodes.
pub(crate) fn prune_upwards(arena: &mut NodeArena, mut id: NodeId) -> usize {
    let mut freed = 0;
    while id != NodeId::ROOT && arena.get(id).is_dead() {
        let node = arena.get(id);
        let symbol = node.symbol;
        let Some(parent) = node.parent else {
            break;
        };
        arena.get_mut(parent).children.remove(&symbol);
        arena.free(id);
        freed += 1;
        id = parent;
    }
    freed
}

/// Next node in pre-order (children in ascending symbol order), terminal or not.
fn preorder_next(arena: &NodeArena, id: NodeId) -> Option<NodeId> {
    if let Some(child) = arena.get(id).first_child() {
        return Some(child);
    }

    // Leaf: climb until some ancestor has a later sibling branch
    let mut current = id;
    loop {
        let node = arena.get(current);
        let parent = node.parent?;
        if let Some(sibling) = arena.get(parent).next_child_after(node.symbol) {
            return Some(sibling);
        }
        current = parent;
    }
}

/// Terminal node that follows `id` in lexicographic order.
pub(crate) fn successor(arena: &NodeArena, id: NodeId) -> Option<NodeId> {
    let mut current = id;
    loop {
        current = preorder_next(arena, current)?;
        if arena.get(current).is_terminal {
            return Some(current);
        }
    }
}

/// Lexicographically smallest stored word, the empty string included.
pub(crate) fn first_word(arena: &NodeArena) -> Option<NodeId> {
    if arena.root().is_terminal {
        Some(NodeId::ROOT)
    } else {
        successor(arena, NodeId::ROOT)
    }
}

/// Rebuilds the word spelled by the path from the root to `id`.
pub(crate) fn word_of(arena: &NodeArena, id: NodeId) -> String {
    let mut reversed = Vec::new();
    let mut current = arena.get(id);
    while let Some(parent) = current.parent {
        reversed.push(current.symbol);
        current = arena.get(parent);
    }
    reversed.into_iter().rev().map(char::from).collect()
}

/// Appends every word stored in the subtree of `start` to `out`, in
/// lexicographic order. `prefix` is the word spelled by `start` itself.
pub(crate) fn collect_words(arena: &NodeArena, start: NodeId, prefix: &[u8], out: &mut Vec<String>) {
    let base = prefix.len();
    let mut buffer = prefix.to_vec();
    let mut stack = vec![(start, 0usize)];

    while let Some((id, depth)) = stack.pop() {
        let node = arena.get(id);
        if depth > 0 {
            buffer.truncate(base + depth - 1);
            buffer.push(node.symbol);
        }
        if node.is_terminal {
            out.push(buffer.iter().copied().map(char::from).collect());
        }
        // Reverse so the smallest symbol is popped first
        stack.extend(node.children.values().rev().map(|&child| (child, depth + 1)));
    }
}

/// Lengths of every stored prefix of `key`, shortest first.
pub(crate) fn stored_prefix_lengths(arena: &NodeArena, key: &[u8]) -> Vec<usize> {
    let mut lengths = Vec::new();
    let mut current = NodeId::ROOT;
    if arena.root().is_terminal {
        lengths.push(0);
    }
    for (i, &symbol) in key.iter().enumerate() {
        match arena.get(current).child(symbol) {
            Some(next) => current = next,
            None => break,
        }
        if arena.get(current).is_terminal {
            lengths.push(i + 1);
        }
    }
    lengths
}
