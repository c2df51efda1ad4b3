//! Data structures for Niihau.
//!
//! The centrepiece is [`NiihauTrie`], an ordered set of ASCII strings kept
//! in a prefix tree. Its implementation avoids unsafe code entirely: nodes
//! live in an index-addressed arena owned by the trie.

pub mod niihau_trie;

// Re-export common data structures
pub use niihau_trie::{
    ErasePolicy, Iter, NiihauTrie, NiihauTrieConfig, NiihauTrieError, NiihauTrieResult,
    WordCursor,
};
