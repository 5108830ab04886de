/*!
 * # wikidict - Wiktionary dictionary lookup
 *
 * A Rust library and CLI for fetching word definitions and pronunciations
 * from the Wiktionary REST API and normalizing them into clean text.
 *
 * ## Features
 *
 * - Plain-text definitions with examples, stripped of upstream markup
 * - IPA transcriptions for words and whole sentences
 * - Sentence mode: per-word transcriptions aligned under the sentence in a
 *   fixed-width two-line block
 * - Loose language input: ISO 639-1/639-3 codes, names, or name fragments
 * - Retrying HTTP client with exponential backoff
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `markup_processor`: Markup scanning, text and phonetic extraction
 * - `language_utils`: Language identifier resolution
 * - `sentence_aligner`: Sentence-to-pronunciation alignment
 * - `dictionary_service`: Upstream document interpretation and lookups
 * - `app_controller`: Main application controller
 * - `providers`: Upstream source implementations:
 *   - `providers::wiktionary`: Wiktionary REST v1 client
 *   - `providers::mock`: Canned-document source for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod markup_processor;
pub mod language_utils;
pub mod sentence_aligner;
pub mod dictionary_service;
pub mod app_controller;
pub mod providers;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use dictionary_service::{DictionaryService, DefinitionResponse, PronunciationResponse};
pub use language_utils::{LanguageDescriptor, LanguageMatch, resolve_language};
pub use markup_processor::{extract_text, extract_phonetic_tokens};
pub use sentence_aligner::{SentenceAlignment, align_sentence, MISSING_TRANSCRIPTION};
pub use errors::{AppError, LookupError, ProviderError};
