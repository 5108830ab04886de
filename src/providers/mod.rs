/*!
 * Upstream source implementations for dictionary documents.
 *
 * This module contains the client abstraction the lookup service is built
 * on:
 * - Wiktionary: REST v1 client for the live service
 * - Mock: canned-document source for tests
 */

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for upstream dictionary document sources
///
/// A source hands back parsed JSON documents; interpreting them is the
/// lookup service's job. Words are expected pre-normalized (see
/// `dictionary_service::normalize_word`).
#[async_trait]
pub trait DictionarySource: Send + Sync + Debug {
    /// Fetch the definition document for a word
    ///
    /// # Arguments
    /// * `word` - The normalized word to look up
    ///
    /// # Returns
    /// * `Result<Value, ProviderError>` - The parsed document or an error
    async fn fetch_definition(&self, word: &str) -> Result<Value, ProviderError>;

    /// Fetch the sectioned page document for a word
    ///
    /// # Arguments
    /// * `word` - The normalized word to look up
    ///
    /// # Returns
    /// * `Result<Value, ProviderError>` - The parsed document or an error
    async fn fetch_page(&self, word: &str) -> Result<Value, ProviderError>;

    /// Public page URL for the word, used for attribution in responses
    fn page_url(&self, word: &str) -> String;
}

pub mod wiktionary;
pub mod mock;
