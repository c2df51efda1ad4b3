//! Error types for the Niihau Trie.
//!
//! This module defines the error types that can occur during Niihau Trie operations.

/// Errors that can occur in Niihau Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NiihauTrieError {
    /// A key contains a symbol outside the supported alphabet.
    #[error("Symbol {symbol:?} at byte {position} is outside the supported alphabet")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Byte offset of the character within the key.
        position: usize,
    },

    /// Error when a key exceeds the configured maximum length.
    #[error("Key of length {length} exceeds maximum key length of {max_length}")]
    KeyTooLong {
        /// Length of the rejected key in symbols.
        length: usize,
        /// The maximum allowed length.
        max_length: usize,
    },
}
