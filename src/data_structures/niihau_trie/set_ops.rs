// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Union and intersection by co-descent.
//!
//! Both operations walk the two node trees side by side, one symbol at a
//! time, and build the result tree directly. Intersection only ever follows
//! symbols present on both sides, so two tries that diverge at their first
//! symbol are intersected after looking at the root alone.

use std::cmp::Ordering;

use tracing::trace;

use super::arena::NodeArena;
use super::node::{NodeId, TrieNode};
use super::traversal;

/// Which set operation a co-descent computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SetOperation {
    Union,
    Intersection,
}

impl SetOperation {
    fn keeps(self, left: bool, right: bool) -> bool {
        match self {
            SetOperation::Union => left || right,
            SetOperation::Intersection => left && right,
        }
    }
}

/// Pending co-descent step: a node on each side (possibly absent) and the
/// result node they map to.
type Step = (Option<NodeId>, Option<NodeId>, NodeId);

/// Builds the node tree of `lhs <op> rhs`. Returns it with its word count.
pub(crate) fn co_descend(lhs: &NodeArena, rhs: &NodeArena, op: SetOperation) -> (NodeArena, usize) {
    let mut out = NodeArena::new();
    let mut size = 0;
    let mut created = Vec::new();
    let mut stack: Vec<Step> = vec![(Some(NodeId::ROOT), Some(NodeId::ROOT), NodeId::ROOT)];

    while let Some((left, right, target)) = stack.pop() {
        let left = left.map(|id| lhs.get(id));
        let right = right.map(|id| rhs.get(id));

        let terminal = op.keeps(
            left.is_some_and(|n| n.is_terminal),
            right.is_some_and(|n| n.is_terminal),
        );
        if terminal {
            out.get_mut(target).is_terminal = true;
            size += 1;
        }

        for (symbol, l, r) in merged_children(left, right) {
            if !op.keeps(l.is_some(), r.is_some()) {
                continue;
            }
            let child = traversal::attach_child(&mut out, target, symbol);
            created.push(child);
            stack.push((l, r, child));
        }
    }

    let pruned = prune_dead(&mut out, &created);
    trace!(?op, size, pruned, "co-descent finished");
    (out, size)
}

/// Children of both nodes, merged by symbol in ascending order.
fn merged_children(
    left: Option<&TrieNode>,
    right: Option<&TrieNode>,
) -> Vec<(u8, Option<NodeId>, Option<NodeId>)> {
    let mut l = left.into_iter().flat_map(|n| n.children.iter()).peekable();
    let mut r = right.into_iter().flat_map(|n| n.children.iter()).peekable();
    let mut merged = Vec::new();

    loop {
        let entry = match (l.peek(), r.peek()) {
            (Some(&(&a, &x)), Some(&(&b, &y))) => match a.cmp(&b) {
                Ordering::Less => {
                    l.next();
                    (a, Some(x), None)
                }
                Ordering::Greater => {
                    r.next();
                    (b, None, Some(y))
                }
                Ordering::Equal => {
                    l.next();
                    r.next();
                    (a, Some(x), Some(y))
                }
            },
            (Some(&(&a, &x)), None) => {
                l.next();
                (a, Some(x), None)
            }
            (None, Some(&(&b, &y))) => {
                r.next();
                (b, None, Some(y))
            }
            (None, None) => break,
        };
        merged.push(entry);
    }

    merged
}

/// Drops result nodes that lead to no word.
///
/// `created` lists nodes in creation order, where every parent precedes its
/// children; walking it backwards settles each child before its parent.
fn prune_dead(out: &mut NodeArena, created: &[NodeId]) -> usize {
    let mut pruned = 0;
    for &id in created.iter().rev() {
        let node = out.get(id);
        if !node.is_dead() {
            continue;
        }
        let symbol = node.symbol;
        if let Some(parent) = node.parent {
            out.get_mut(parent).children.remove(&symbol);
        }
        out.free(id);
        pruned += 1;
    }
    pruned
}
