// Copyright (c) 2025 Niihau Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Niihau Trie.
//! Exercises the public API the way a downstream crate would, including
//! the timing behaviour of swap and of intersecting disjoint tries.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use niihau_lib::data_structures::{ErasePolicy, NiihauTrie, NiihauTrieConfig, NiihauTrieError};

/// Deterministic pseudo-random lowercase words, 1 to 10 symbols long.
fn generate_words(count: usize, seed: u64) -> Vec<String> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };

    (0..count)
        .map(|_| {
            let len = 1 + next() % 10;
            (0..len).map(|_| (b'a' + (next() % 26) as u8) as char).collect()
        })
        .collect()
}

fn sorted_unique(words: &[String]) -> Vec<String> {
    words.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Median of a few timings of `f`, padded by half a millisecond.
fn timed<F: FnMut()>(mut f: F) -> Duration {
    let mut samples: Vec<Duration> = (0..5)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    samples.sort();
    samples[samples.len() / 2] + Duration::from_micros(500)
}

#[test]
fn test_end_to_end() {
    let mut trie = NiihauTrie::new();
    let mut fresh = 0;
    for word in ["abc", "bc", "a", "bc", "d", "", "d", "abcd", "abc"] {
        if trie.insert(word).unwrap() {
            fresh += 1;
        }
    }

    assert_eq!(fresh, 6);
    assert_eq!(trie.len(), 6);
    assert!(trie.contains("").unwrap());
    assert!(!trie.contains("b").unwrap());
    assert!(trie.contains("bc").unwrap());
    assert_eq!(
        trie.iter().collect::<Vec<_>>(),
        vec!["", "a", "abc", "abcd", "bc", "d"]
    );
}

#[test]
fn test_queries() {
    let trie = NiihauTrie::from_strings(["a", "aa", "aaa", "ab", "b"]).unwrap();

    assert_eq!(trie.get_prefixes("aaaaa").unwrap(), vec!["a", "aa", "aaa"]);
    assert_eq!(trie.search_by_prefix("a").unwrap(), vec!["a", "aa", "aaa", "ab"]);
    assert_eq!(trie.search_by_prefix("").unwrap(), trie.iter().collect::<Vec<_>>());
    assert!(trie.search_by_prefix("c").unwrap().is_empty());
}

#[test]
fn test_cursor_protocol() {
    let trie = NiihauTrie::from_strings(["abc", "bcd", "cde", "edf"]).unwrap();

    let mut cursor = trie.begin();
    let mut words = Vec::new();
    while cursor.has_word() {
        words.push(cursor.read_word());
        cursor.move_to_next_word();
    }

    assert_eq!(words, vec!["abc", "bcd", "cde", "edf"]);
    assert_eq!(cursor, trie.end());
}

#[test]
fn test_rejects_non_ascii() {
    let mut trie = NiihauTrie::from_strings(["ok"]).unwrap();
    let err = trie.insert("naïve").unwrap_err();

    assert!(matches!(err, NiihauTrieError::InvalidSymbol { symbol: 'ï', position: 2 }));
    assert_eq!(trie.len(), 1);
    assert!(trie.contains("ñ").is_err());
}

#[test]
fn test_set_algebra() {
    let lhs = NiihauTrie::from_strings(["a", "ab", "abc", "b"]).unwrap();
    let rhs = NiihauTrie::from_strings(["ab", "b", "bcd", ""]).unwrap();

    let union = &lhs | &rhs;
    let intersection = &lhs & &rhs;

    assert_eq!(
        union.iter().collect::<Vec<_>>(),
        vec!["", "a", "ab", "abc", "b", "bcd"]
    );
    assert_eq!(intersection.iter().collect::<Vec<_>>(), vec!["ab", "b"]);
    assert_eq!(union, rhs.union(&lhs));
    assert_eq!(intersection, rhs.intersection(&lhs));
}

#[test]
fn test_lazy_erase_keeps_semantics() {
    let words = generate_words(500, 7);
    let config = NiihauTrieConfig::new().with_erase_policy(ErasePolicy::Lazy);

    let mut lazy = NiihauTrie::with_config(config);
    let mut eager = NiihauTrie::new();
    lazy.insert_all(&words).unwrap();
    eager.insert_all(&words).unwrap();

    for word in words.iter().step_by(2) {
        assert_eq!(lazy.remove(word).unwrap(), eager.remove(word).unwrap());
    }

    assert_eq!(lazy, eager);
    assert!(lazy.node_count() >= eager.node_count());
    assert_eq!(lazy.iter().collect::<Vec<_>>(), eager.iter().collect::<Vec<_>>());
}

#[test]
fn test_large_sets_match_btreeset() {
    let words = generate_words(20_000, 42);
    let trie = NiihauTrie::from_strings(&words).unwrap();
    let expected = sorted_unique(&words);

    assert_eq!(trie.len(), expected.len());
    assert_eq!(trie.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_very_long_key_does_not_recurse() {
    let deep = "a".repeat(1_000_000);
    let mut trie = NiihauTrie::new();
    assert!(trie.insert(&deep).unwrap());
    trie.insert("b").unwrap();
    assert_eq!(trie.node_count(), 1_000_002);

    let copy = trie.clone();
    assert_eq!(copy.iter().map(|w| w.len()).collect::<Vec<_>>(), vec![1_000_000, 1]);
    assert_eq!(trie.get_prefixes(&deep).unwrap().len(), 1);

    let intersection = &trie & &copy;
    assert_eq!(intersection.len(), 2);
    assert!(intersection.contains(&deep).unwrap());
    drop(intersection);

    let union = &trie | &NiihauTrie::from_strings(["c"]).unwrap();
    assert_eq!(union.len(), 3);
    drop(union);

    assert!(trie.remove(&deep).unwrap());
    assert!(trie.remove("b").unwrap());
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);

    // Dropping a million-deep chain must not overflow the stack
    drop(copy);
}

#[test]
fn test_swap_takes_constant_time() {
    let mut baseline: Option<Duration> = None;

    let mut size = 1_000;
    while size <= 64_000 {
        let lhs_words = sorted_unique(&generate_words(size, 1));
        let rhs_words = sorted_unique(&generate_words(size, 2));
        let mut lhs = NiihauTrie::from_strings(&lhs_words).unwrap();
        let mut rhs = NiihauTrie::from_strings(&rhs_words).unwrap();

        let elapsed = timed(|| lhs.swap(&mut rhs));

        // An odd number of swaps leaves them exchanged
        assert_eq!(lhs.iter().collect::<Vec<_>>(), rhs_words);
        assert_eq!(rhs.iter().collect::<Vec<_>>(), lhs_words);

        match baseline {
            None => baseline = Some(elapsed),
            Some(first) => assert!(
                elapsed.as_secs_f64() / first.as_secs_f64() <= 4.0,
                "swap of {size} words took {elapsed:?}, baseline {first:?}"
            ),
        }
        size *= 2;
    }
}

#[test]
fn test_disjoint_intersection_takes_constant_time() {
    let mut baseline: Option<Duration> = None;

    let mut size = 1_000;
    while size <= 64_000 {
        let words = generate_words(size, 3);
        let lhs = NiihauTrie::from_strings(words.iter().map(|w| format!("aaa{w}"))).unwrap();
        let rhs = NiihauTrie::from_strings(words.iter().map(|w| format!("zzz{w}"))).unwrap();

        let mut result = NiihauTrie::new();
        let elapsed = timed(|| result = &lhs & &rhs);
        assert!(result.is_empty());
        assert_eq!(result, NiihauTrie::new());

        match baseline {
            None => baseline = Some(elapsed),
            Some(first) => assert!(
                elapsed.as_secs_f64() / first.as_secs_f64() <= 4.0,
                "intersection at {size} words took {elapsed:?}, baseline {first:?}"
            ),
        }
        size *= 2;
    }
}
