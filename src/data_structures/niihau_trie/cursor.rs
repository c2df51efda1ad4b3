// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word cursors and iterators over a Niihau Trie.
//!
//! A [`WordCursor`] points at one stored word (or at nothing) and advances in
//! lexicographic order. [`Iter`] wraps a cursor into a standard iterator.
//!
//! Both borrow the trie they walk, so the trie cannot be modified while a
//! cursor into it is alive.

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use super::arena::NodeArena;
use super::node::NodeId;
use super::traversal;

/// Position over the words of a trie, in lexicographic order.
///
/// Two cursors are equal when they point at the same word of the same trie,
/// or when both are exhausted. A default-constructed cursor is exhausted and
/// therefore equal to [`NiihauTrie::end`](super::NiihauTrie::end).
#[derive(Clone, Copy, Default)]
pub struct WordCursor<'a> {
    arena: Option<&'a NodeArena>,
    current: Option<NodeId>,
}

impl<'a> WordCursor<'a> {
    pub(crate) fn new(arena: &'a NodeArena, current: Option<NodeId>) -> Self {
        Self {
            arena: Some(arena),
            current,
        }
    }

    /// Returns true iff [`read_word`](Self::read_word) can provide a word.
    pub fn has_word(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the word this cursor points at.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted ([`has_word`](Self::has_word) is false).
    pub fn read_word(&self) -> String {
        match self.word() {
            Some(word) => word,
            None => panic!("read_word called on a cursor that has no word"),
        }
    }

    /// Returns the word this cursor points at, or `None` once exhausted.
    pub fn word(&self) -> Option<String> {
        match (self.arena, self.current) {
            (Some(arena), Some(id)) => Some(traversal::word_of(arena, id)),
            _ => None,
        }
    }

    /// Moves to the next word. Past the last word the cursor becomes exhausted.
    pub fn move_to_next_word(&mut self) {
        if let (Some(arena), Some(id)) = (self.arena, self.current) {
            self.current = traversal::successor(arena, id);
        }
    }
}

impl PartialEq for WordCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => {
                lhs == rhs
                    && match (self.arena, other.arena) {
                        (Some(a), Some(b)) => ptr::eq(a, b),
                        _ => false,
                    }
            }
            _ => false,
        }
    }
}

impl Eq for WordCursor<'_> {}

impl fmt::Debug for WordCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordCursor")
            .field("word", &self.word())
            .finish()
    }
}

/// Iterator over the words of a trie in lexicographic order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    cursor: WordCursor<'a>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(cursor: WordCursor<'a>, remaining: usize) -> Self {
        Self { cursor, remaining }
    }
}

impl Iterator for Iter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let word = self.cursor.word()?;
        self.cursor.move_to_next_word();
        self.remaining = self.remaining.saturating_sub(1);
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
