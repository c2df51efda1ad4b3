//! Trie configuration validation.
//!
//! The trie options themselves live next to the trie
//! ([`NiihauTrieConfig`]); this module checks them when they come in
//! through the configuration loader.

use super::{ConfigResult, Validate};
use crate::data_structures::NiihauTrieConfig;
use crate::error::config::ConfigError;

impl Validate for NiihauTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_length == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_key_length".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }

        Ok(())
    }
}
