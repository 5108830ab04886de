/*!
 * Mock source implementation for testing.
 *
 * This module provides a canned-document source that simulates different
 * upstream behaviors:
 * - `MockSource::with_documents(...)` - serves fixed documents
 * - `MockSource::not_found(status)` - upstream status failure
 * - `MockSource::failing(...)` - connection-level failure
 */

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ProviderError;
use crate::providers::DictionarySource;

/// Behavior mode for the mock source
#[derive(Debug, Clone)]
enum MockBehavior {
    /// Serve the canned documents
    Working,
    /// Respond with an upstream status error
    Status(u16),
    /// Fail with a connection error
    Failing(String),
}

/// Mock source serving canned documents for tests
#[derive(Debug)]
pub struct MockSource {
    /// Canned definition document
    definition: Value,
    /// Canned page document
    page: Value,
    /// Behavior mode
    behavior: MockBehavior,
}

impl MockSource {
    /// Create a mock serving the given definition and page documents
    pub fn with_documents(definition: Value, page: Value) -> Self {
        Self {
            definition,
            page,
            behavior: MockBehavior::Working,
        }
    }

    /// Create a mock serving only a definition document
    pub fn with_definition(definition: Value) -> Self {
        Self::with_documents(definition, Value::Null)
    }

    /// Create a mock serving only a page document
    pub fn with_page(page: Value) -> Self {
        Self::with_documents(Value::Null, page)
    }

    /// Create a mock that answers every fetch with an upstream status error
    pub fn not_found(status: u16) -> Self {
        Self {
            definition: Value::Null,
            page: Value::Null,
            behavior: MockBehavior::Status(status),
        }
    }

    /// Create a mock that fails every fetch with a connection error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            definition: Value::Null,
            page: Value::Null,
            behavior: MockBehavior::Failing(message.into()),
        }
    }

    fn respond(&self, document: &Value) -> Result<Value, ProviderError> {
        match &self.behavior {
            MockBehavior::Working => Ok(document.clone()),
            MockBehavior::Status(status) => Err(ProviderError::ApiError {
                status_code: *status,
                message: "Not found.".to_string(),
            }),
            MockBehavior::Failing(message) => {
                Err(ProviderError::ConnectionError(message.clone()))
            }
        }
    }
}

#[async_trait]
impl DictionarySource for MockSource {
    async fn fetch_definition(&self, _word: &str) -> Result<Value, ProviderError> {
        self.respond(&self.definition)
    }

    async fn fetch_page(&self, _word: &str) -> Result<Value, ProviderError> {
        self.respond(&self.page)
    }

    fn page_url(&self, word: &str) -> String {
        format!("https://dictionary.test/wiki/{}", word)
    }
}
