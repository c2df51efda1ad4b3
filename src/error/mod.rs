//! Error module for Niihau.
//!
//! This module provides the crate-wide error type, following Rust's idiomatic
//! error handling patterns with explicit error types, `?` propagation and
//! enough context to tell where a failure came from.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::data_structures::NiihauTrieError;

pub mod config;

/// Result type alias used throughout Niihau.
pub type NiihauResult<T> = Result<T, NiihauError>;

/// Core error enum for Niihau.
#[derive(Error, Debug)]
pub enum NiihauError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] NiihauTrieError),

    /// A word list contains a word the trie rejects.
    #[error("Invalid word at {}:{line}: {source}", .path.display())]
    WordList {
        /// File the word was read from
        path: PathBuf,
        /// 1-based line number of the word
        line: usize,
        /// Why the word was rejected
        source: NiihauTrieError,
    },

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

impl From<anyhow::Error> for NiihauError {
    /// Recovers the typed variant behind an `anyhow` error when there is one.
    /// Context layers are dropped; anything else becomes [`NiihauError::Custom`].
    fn from(error: anyhow::Error) -> Self {
        let error = match error.downcast::<NiihauError>() {
            Ok(error) => return error,
            Err(error) => error,
        };
        let error = match error.downcast::<NiihauTrieError>() {
            Ok(error) => return NiihauError::Trie(error),
            Err(error) => error,
        };
        let error = match error.downcast::<config::ConfigError>() {
            Ok(error) => return NiihauError::Config(error),
            Err(error) => error,
        };
        match error.downcast::<std::io::Error>() {
            Ok(error) => NiihauError::Io(error),
            Err(error) => NiihauError::Custom(format!("{error:#}")),
        }
    }
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: NiihauError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: NiihauError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: &ErrorContext);
}

/// Error reporter that logs errors through `tracing`.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: &ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Install the global error reporter. Only the first call takes effect.
///
/// # Returns
///
/// `true` if `reporter` was installed.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    ERROR_REPORTER.set(reporter).is_ok()
}

/// Report an error through the global reporter, falling back to stderr.
pub fn report_error(context: &ErrorContext) {
    match ERROR_REPORTER.get() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
