//! Tests for loading word lists from disk.

use crate::data_structures::{ErasePolicy, NiihauTrieConfig, NiihauTrieError};
use crate::error::NiihauError;
use crate::tests::{word_set_strategy, TestFixture};
use crate::wordlist::load_word_list;
use proptest::prelude::*;

/// Test that a word list loads into a sorted, deduplicated trie.
#[test]
fn test_load_word_list() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_word_list("words.txt", ["pear", "apple", "apricot", "pear"])
        .unwrap();

    let trie = load_word_list(&path, &NiihauTrieConfig::default()).unwrap();
    assert_eq!(trie.len(), 3);
    assert_eq!(
        trie.iter().collect::<Vec<_>>(),
        vec!["apple", "apricot", "pear"]
    );
    assert_eq!(trie.search_by_prefix("ap").unwrap(), vec!["apple", "apricot"]);
}

/// Test that the trie configuration is applied to the loaded trie.
#[test]
fn test_load_word_list_uses_config() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_word_list("short.txt", ["ab", "abc"]).unwrap();

    let config = NiihauTrieConfig::new()
        .with_erase_policy(ErasePolicy::Lazy)
        .with_max_key_length(2);
    let err = load_word_list(&path, &config).unwrap_err();

    match err {
        NiihauError::WordList { path: p, line, source } => {
            assert_eq!(p, path);
            assert_eq!(line, 2);
            assert_eq!(
                source,
                NiihauTrieError::KeyTooLong {
                    length: 3,
                    max_length: 2
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }

    let path = fixture.create_word_list("fits.txt", ["ab", "b"]).unwrap();
    let trie = load_word_list(&path, &config).unwrap();
    assert_eq!(trie.config().erase_policy, ErasePolicy::Lazy);
}

/// Test that a missing word list surfaces as an IO error.
#[test]
fn test_load_missing_word_list() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("missing.txt");

    let err = load_word_list(&path, &NiihauTrieConfig::default()).unwrap_err();
    assert!(matches!(err, NiihauError::Io(_)));
}

/// Test that an empty file is an empty set.
#[test]
fn test_load_empty_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("empty.txt", "").unwrap();

    let trie = load_word_list(&path, &NiihauTrieConfig::default()).unwrap();
    assert!(trie.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Any set written to disk loads back as the same set.
    #[test]
    fn prop_word_list_round_trips(words in word_set_strategy(6)) {
        let fixture = TestFixture::new().unwrap();
        let path = fixture.create_word_list("words.txt", &words).unwrap();

        let trie = load_word_list(&path, &NiihauTrieConfig::default()).unwrap();
        prop_assert_eq!(trie.iter().collect::<Vec<_>>(), words.into_iter().collect::<Vec<_>>());
    }
}
