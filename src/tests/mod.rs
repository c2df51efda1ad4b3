//! Crate-level test suites for Niihau.
//!
//! Trie-specific unit and property tests live next to the trie in
//! `data_structures::niihau_trie::tests`. The suites here cover the layers
//! around it:
//! - configuration loading and validation
//! - the error type and error reporting
//! - word list loading from files

pub mod wordlist_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, word_set_strategy, word_strategy, TestFixture};
