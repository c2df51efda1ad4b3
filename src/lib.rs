//! Niihau Library
//!
//! Niihau is an ordered set of ASCII strings stored in a prefix tree. Beyond
//! the usual set operations it answers prefix queries in both directions:
//! every stored word that starts with a prefix, and every stored word that is
//! a prefix of a given word. Whole sets combine through union and
//! intersection computed by walking both trees at once.
//!
//! # Architecture
//!
//! - [`data_structures`] holds the trie, its cursor and iterator.
//! - [`config`] loads layered configuration (defaults, file, environment).
//! - [`error`] defines the crate-wide error type and error reporting.
//! - [`wordlist`] builds tries from one-word-per-line text files.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod wordlist;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{NiihauTrie, NiihauTrieConfig};

/// Version information for Niihau.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs [`error::TracingErrorReporter`] as the global error reporter.
/// Calling it more than once is harmless.
pub fn init() {
    let installed = error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
    if !installed {
        tracing::trace!("error reporter already installed");
    }
}
