// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Niihau Trie Implementation
//!
//! An ordered set of ASCII strings stored as a prefix tree. Besides the
//! usual insert/remove/contains it answers prefix queries in both
//! directions, iterates its words in lexicographic order, and computes
//! unions and intersections by walking two tries side by side.
//!
//! # Example
//!
//! ```
//! use niihau_lib::data_structures::NiihauTrie;
//!
//! let mut trie = NiihauTrie::from_strings(["quilt", "queue", "quiz"]).unwrap();
//! assert!(trie.insert("quizzical").unwrap());
//! assert!(!trie.insert("quiz").unwrap());
//!
//! assert_eq!(trie.search_by_prefix("qui").unwrap(), vec!["quilt", "quiz", "quizzical"]);
//! assert_eq!(trie.get_prefixes("quizzical").unwrap(), vec!["quiz", "quizzical"]);
//!
//! let other = NiihauTrie::from_strings(["quilt", "quitter"]).unwrap();
//! assert_eq!((&trie & &other).iter().collect::<Vec<_>>(), vec!["quilt"]);
//! assert_eq!((&trie | &other).len(), 5);
//! ```
//!
//! # Ownership
//!
//! Every node lives in an arena owned by the trie and refers to its parent
//! and children through indices. Cloning copies the arena, so clones never
//! share nodes. Moving or swapping tries moves three words of state and is
//! O(1) regardless of size.
//!
//! # Concurrency
//!
//! The trie has no internal synchronization. Mutation needs `&mut self`, so
//! sharing a trie between threads requires an external lock. Cursors and
//! iterators borrow the trie and keep it immutable while they are alive.

mod arena;
mod config;
mod cursor;
mod error;
mod node;
mod set_ops;
mod traversal;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr};

use tracing::{debug, trace};

use arena::NodeArena;
use node::NodeId;
use set_ops::SetOperation;

pub use config::{ErasePolicy, NiihauTrieConfig};
pub use cursor::{Iter, WordCursor};
pub use error::NiihauTrieError;
pub use node::ALPHABET_SIZE;

/// Result type for Niihau Trie operations
pub type NiihauTrieResult<T> = Result<T, NiihauTrieError>;

/// Niihau Trie is an ordered set of ASCII strings with fast prefix lookups.
///
/// Key features:
/// * Lexicographic iteration through [`WordCursor`] and [`Iter`]
/// * Inclusive prefix search and stored-prefix lookup
/// * Set equality and lexicographic ordering between tries
/// * Union and intersection by co-descent over both trees
///
/// Keys must consist of symbols from the basic ASCII range
/// (`0..ALPHABET_SIZE`); anything else is rejected with
/// [`NiihauTrieError::InvalidSymbol`].
#[derive(Clone)]
pub struct NiihauTrie {
    /// Owner of every node; the root sits at `NodeId::ROOT`
    arena: NodeArena,

    /// Number of stored words
    size: usize,

    /// Configuration options
    config: NiihauTrieConfig,
}

impl NiihauTrie {
    /// Creates a new empty `NiihauTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(NiihauTrieConfig::default())
    }

    /// Creates a new empty `NiihauTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: NiihauTrieConfig) -> Self {
        Self {
            arena: NodeArena::new(),
            size: 0,
            config,
        }
    }

    /// Creates a trie containing every string of `strings`. Duplicates collapse.
    ///
    /// # Returns
    ///
    /// * `Ok(NiihauTrie)` - The populated trie.
    /// * `Err(NiihauTrieError)` - If one of the strings was rejected.
    pub fn from_strings<I, S>(strings: I) -> NiihauTrieResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.insert_all(strings)?;
        Ok(trie)
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &NiihauTrieConfig {
        &self.config
    }

    /// Inserts a key into the trie.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the key was new, `false` if it was already present.
    /// * `Err(NiihauTrieError)` - If the key was rejected. The trie is left untouched.
    pub fn insert<K>(&mut self, key: K) -> NiihauTrieResult<bool>
    where
        K: AsRef<str>,
    {
        let symbols = traversal::symbols(key.as_ref())?;

        if let Some(max_length) = self.config.max_key_length {
            if symbols.len() > max_length {
                return Err(NiihauTrieError::KeyTooLong {
                    length: symbols.len(),
                    max_length,
                });
            }
        }

        let id = traversal::insert_path(&mut self.arena, symbols);
        let node = self.arena.get_mut(id);
        if node.is_terminal {
            return Ok(false);
        }

        node.is_terminal = true;
        self.size += 1;
        Ok(true)
    }

    /// Inserts every key of `keys`, stopping at the first rejected one.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - How many of the keys were new.
    /// * `Err(NiihauTrieError)` - If a key was rejected. Keys before it stay inserted.
    pub fn insert_all<I, S>(&mut self, keys: I) -> NiihauTrieResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inserted = 0;
        for key in keys {
            if self.insert(key)? {
                inserted += 1;
            }
        }
        debug!(inserted, size = self.size, "bulk insert finished");
        Ok(inserted)
    }

    /// Removes a key from the trie.
    ///
    /// Under [`ErasePolicy::Prune`] the nodes that only served the removed key
    /// are freed right away.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the key was removed, `false` if it wasn't found.
    /// * `Err(NiihauTrieError)` - If the key contains an unsupported symbol.
    pub fn remove<K>(&mut self, key: K) -> NiihauTrieResult<bool>
    where
        K: AsRef<str>,
    {
        let symbols = traversal::symbols(key.as_ref())?;

        let Some(id) = traversal::find(&self.arena, symbols) else {
            return Ok(false);
        };

        let node = self.arena.get_mut(id);
        if !node.is_terminal {
            return Ok(false);
        }

        node.is_terminal = false;
        self.size -= 1;

        if self.config.erase_policy == ErasePolicy::Prune {
            let freed = traversal::prune_upwards(&mut self.arena, id);
            trace!(freed, "pruned nodes after removal");
        }

        Ok(true)
    }

    /// Checks if a key is stored in the trie.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the key exists, `false` otherwise.
    /// * `Err(NiihauTrieError)` - If the key contains an unsupported symbol.
    pub fn contains<K>(&self, key: K) -> NiihauTrieResult<bool>
    where
        K: AsRef<str>,
    {
        let symbols = traversal::symbols(key.as_ref())?;
        Ok(traversal::find(&self.arena, symbols).is_some_and(|id| self.arena.get(id).is_terminal))
    }

    /// Returns the number of keys in the trie.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Checks if the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of live nodes, the root included.
    ///
    /// Useful to observe the erase policy: a pruned trie that stores nothing
    /// is back to a single node.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    /// Finds all keys starting with `prefix`, `prefix` itself included.
    ///
    /// An empty prefix yields every key.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Matching keys in lexicographic order.
    /// * `Err(NiihauTrieError)` - If the prefix contains an unsupported symbol.
    pub fn search_by_prefix<P>(&self, prefix: P) -> NiihauTrieResult<Vec<String>>
    where
        P: AsRef<str>,
    {
        let symbols = traversal::symbols(prefix.as_ref())?;
        let mut result = Vec::new();
        if let Some(start) = traversal::find(&self.arena, symbols) {
            traversal::collect_words(&self.arena, start, symbols, &mut result);
        }
        Ok(result)
    }

    /// Finds all stored keys that are prefixes of `key`, `key` itself included.
    ///
    /// The empty string counts as a prefix of every key when it is stored.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Stored prefixes, shortest first.
    /// * `Err(NiihauTrieError)` - If the key contains an unsupported symbol.
    pub fn get_prefixes<K>(&self, key: K) -> NiihauTrieResult<Vec<String>>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        let symbols = traversal::symbols(key)?;
        Ok(traversal::stored_prefix_lengths(&self.arena, symbols)
            .into_iter()
            .map(|length| key[..length].to_string())
            .collect())
    }

    /// Returns a cursor at the lexicographically smallest key.
    pub fn begin(&self) -> WordCursor<'_> {
        WordCursor::new(&self.arena, traversal::first_word(&self.arena))
    }

    /// Returns the exhausted cursor every cursor of this trie ends at.
    pub fn end(&self) -> WordCursor<'_> {
        WordCursor::new(&self.arena, None)
    }

    /// Iterates over the keys in lexicographic order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.begin(), self.size)
    }

    /// Exchanges the contents of two tries in constant time.
    pub fn swap(&mut self, other: &mut NiihauTrie) {
        std::mem::swap(self, other);
    }

    /// Removes every key, keeping the configuration.
    pub fn clear(&mut self) {
        self.arena = NodeArena::new();
        self.size = 0;
    }

    /// Returns a new trie holding the keys present in `self`, `other` or both.
    ///
    /// The result takes the erase policy of `self`. Its key length limit is
    /// the larger of both limits, or unbounded if either side is unbounded,
    /// so every key it holds is also one it would accept.
    pub fn union(&self, other: &NiihauTrie) -> NiihauTrie {
        let max_key_length = match (self.config.max_key_length, other.config.max_key_length) {
            (Some(lhs), Some(rhs)) => Some(lhs.max(rhs)),
            _ => None,
        };
        let config = NiihauTrieConfig {
            max_key_length,
            ..self.config.clone()
        };
        self.combine(other, SetOperation::Union, config)
    }

    /// Returns a new trie holding the keys present in both `self` and `other`.
    ///
    /// Only subtrees reachable through the same symbols on both sides are
    /// visited, so tries that share little structure intersect quickly.
    ///
    /// The result takes the configuration of `self`. Every key it holds is
    /// stored in `self`, so it already fits the key length limit of `self`.
    pub fn intersection(&self, other: &NiihauTrie) -> NiihauTrie {
        self.combine(other, SetOperation::Intersection, self.config.clone())
    }

    fn combine(&self, other: &NiihauTrie, op: SetOperation, config: NiihauTrieConfig) -> NiihauTrie {
        let (arena, size) = set_ops::co_descend(&self.arena, &other.arena, op);
        debug!(?op, lhs = self.size, rhs = other.size, size, "combined tries");
        NiihauTrie {
            arena,
            size,
            config,
        }
    }
}

impl Default for NiihauTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for NiihauTrie {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl Eq for NiihauTrie {}

impl PartialOrd for NiihauTrie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NiihauTrie {
    /// Compares the lexicographically sorted key sequences of both tries.
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl Hash for NiihauTrie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.size);
        for word in self.iter() {
            word.hash(state);
        }
    }
}

impl fmt::Debug for NiihauTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for NiihauTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, word) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{word:?}")?;
        }
        f.write_str("}")
    }
}

impl<'a> IntoIterator for &'a NiihauTrie {
    type Item = String;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl BitOr<&NiihauTrie> for &NiihauTrie {
    type Output = NiihauTrie;

    fn bitor(self, rhs: &NiihauTrie) -> NiihauTrie {
        self.union(rhs)
    }
}

impl BitOr<&NiihauTrie> for NiihauTrie {
    type Output = NiihauTrie;

    fn bitor(self, rhs: &NiihauTrie) -> NiihauTrie {
        self.union(rhs)
    }
}

impl BitAnd<&NiihauTrie> for &NiihauTrie {
    type Output = NiihauTrie;

    fn bitand(self, rhs: &NiihauTrie) -> NiihauTrie {
        self.intersection(rhs)
    }
}

impl BitAnd<&NiihauTrie> for NiihauTrie {
    type Output = NiihauTrie;

    fn bitand(self, rhs: &NiihauTrie) -> NiihauTrie {
        self.intersection(rhs)
    }
}
