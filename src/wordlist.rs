//! Word list loading.
//!
//! A word list is a UTF-8 text file holding one word per line. Trailing
//! carriage returns are stripped, so files with CRLF line endings load the
//! same as LF ones. Every line is a word, the empty line included.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::data_structures::{NiihauTrie, NiihauTrieConfig};
use crate::error::{NiihauError, NiihauResult};

/// Builds a trie from the word list at `path`.
///
/// # Arguments
///
/// * `path` - The word list to read.
/// * `config` - Configuration of the returned trie.
///
/// # Returns
///
/// * `Ok(NiihauTrie)` - The trie holding every distinct word of the file.
/// * `Err(NiihauError)` - If the file cannot be read or a word is rejected.
pub fn load_word_list<P: AsRef<Path>>(path: P, config: &NiihauTrieConfig) -> NiihauResult<NiihauTrie> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let trie = read_words(reader, config).map_err(|e| match e {
        NiihauError::WordList { line, source, .. } => NiihauError::WordList {
            path: path.to_path_buf(),
            line,
            source,
        },
        other => other,
    })?;
    info!(path = %path.display(), words = trie.len(), "loaded word list");
    Ok(trie)
}

/// Builds a trie from any line-oriented reader.
///
/// Rejected words are reported as [`NiihauError::WordList`] with an empty path.
pub fn read_words<R: BufRead>(reader: R, config: &NiihauTrieConfig) -> NiihauResult<NiihauTrie> {
    let mut trie = NiihauTrie::with_config(config.clone());
    let mut lines = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let word = line.strip_suffix('\r').unwrap_or(&line);
        trie.insert(word).map_err(|source| NiihauError::WordList {
            path: Default::default(),
            line: index + 1,
            source,
        })?;
        lines += 1;
    }

    debug!(lines, words = trie.len(), "read word list");
    Ok(trie)
}
