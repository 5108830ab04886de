/*!
 * End-to-end lookup tests over a canned-document source
 */

use serde_json::json;
use wikidict::dictionary_service::DictionaryService;
use wikidict::errors::LookupError;
use wikidict::providers::mock::MockSource;
use wikidict::sentence_aligner::MISSING_TRANSCRIPTION;

use crate::common;

/// Full definitions flow: fetch, select language, strip markup, render
#[tokio::test]
async fn test_get_definition_withSampleDocument_shouldRenderCleanText() {
    let source = MockSource::with_definition(common::sample_definition_document());
    let service = DictionaryService::new(source);

    let response = service.get_definition("Tag", "de").await.unwrap();
    assert_eq!(response.word, "Tag");
    assert_eq!(response.language, "German");
    assert_eq!(response.source_url, "https://dictionary.test/wiki/tag");
    assert!(response.definitions.starts_with("German - Noun:"));
    assert!(response.definitions.contains("  1. day; a of time"));
    assert!(response.definitions.contains("    Example: guten Tag"));
    assert!(response.definitions.contains("    Translation: good day"));
    // Raw markup never leaks through
    assert!(!response.definitions.contains('<'));
    assert!(!response.definitions.contains("unit"));
}

/// Link labels disappear from definition text entirely
#[tokio::test]
async fn test_get_definition_withAnchorMarkup_shouldDropLinkText() {
    let source = MockSource::with_definition(json!({
        "en": [
            {
                "partOfSpeech": "Noun",
                "language": "English",
                "definitions": [
                    { "definition": "<p>a <a href='x'>linked</a> word</p>" }
                ]
            }
        ]
    }));
    let service = DictionaryService::new(source);

    let response = service.get_definition("word", "en").await.unwrap();
    assert!(response.definitions.contains("  1. a word"));
}

/// A document with no matching language renders the empty-result literal
#[tokio::test]
async fn test_get_definition_withNoMatchingLanguage_shouldReportNoneFound() {
    let source = MockSource::with_definition(common::sample_definition_document());
    let service = DictionaryService::new(source);

    let response = service.get_definition("Tag", "fr").await.unwrap();
    assert_eq!(response.definitions, "No definitions found");
}

#[tokio::test]
async fn test_get_definition_withUnresolvedLanguage_shouldFailEarly() {
    let source = MockSource::with_definition(common::sample_definition_document());
    let service = DictionaryService::new(source);

    let error = service.get_definition("Tag", "zz-not-a-language").await.unwrap_err();
    assert!(matches!(error, LookupError::UnresolvedLanguage(identifier)
        if identifier == "zz-not-a-language"));
}

#[tokio::test]
async fn test_get_definition_withUpstreamStatus_shouldMapToNotFound() {
    let source = MockSource::not_found(404);
    let service = DictionaryService::new(source);

    let error = service.get_definition("blorkle", "en").await.unwrap_err();
    assert!(matches!(error, LookupError::NotFound { status: 404, .. }));
}

#[tokio::test]
async fn test_get_definition_withConnectionFailure_shouldStayProviderError() {
    let source = MockSource::failing("host unreachable");
    let service = DictionaryService::new(source);

    let error = service.get_definition("word", "en").await.unwrap_err();
    assert!(matches!(error, LookupError::Provider(_)));
}

/// A document of the wrong overall shape is malformed, not empty
#[tokio::test]
async fn test_get_definition_withWrongShapeDocument_shouldReportMalformed() {
    let source = MockSource::with_definition(json!(["not", "an", "object"]));
    let service = DictionaryService::new(source);

    let error = service.get_definition("word", "en").await.unwrap_err();
    assert!(matches!(error, LookupError::MalformedDocument(_)));
}

/// Word-mode pronunciation returns the raw extracted list
#[tokio::test]
async fn test_get_pronunciation_withWord_shouldReturnRawTokens() {
    let source = MockSource::with_page(common::sample_page_document(&["/taːk/"]));
    let service = DictionaryService::new(source);

    let response = service.get_pronunciation("Tag", "de", false).await.unwrap();
    assert_eq!(response.pronunciations, vec!["/taːk/"]);
    assert_eq!(response.formatted, None);
    assert_eq!(response.source_url, "https://dictionary.test/wiki/tag");
}

/// Sentence-mode pronunciation aligns tokens and fills placeholders
#[tokio::test]
async fn test_get_pronunciation_withSentence_shouldAlignAndPad() {
    let source = MockSource::with_page(common::sample_page_document(&["ˈɡuːtn̩"]));
    let service = DictionaryService::new(source);

    let response = service.get_pronunciation("guten Tag", "de", true).await.unwrap();
    assert_eq!(response.pronunciations, vec!["ˈɡuːtn̩", MISSING_TRANSCRIPTION]);
    assert_eq!(
        response.formatted.as_deref(),
        Some("guten   Tag  \nˈɡuːtn̩ [!!!]")
    );
    // The URL uses the normalized phrase
    assert_eq!(response.source_url, "https://dictionary.test/wiki/guten_tag");
}

/// A page without a matching pronunciation subsection is a valid empty result
#[tokio::test]
async fn test_get_pronunciation_withMissingSection_shouldReturnEmpty() {
    let source = MockSource::with_page(json!({}));
    let service = DictionaryService::new(source);

    let response = service.get_pronunciation("Tag", "de", false).await.unwrap();
    assert!(response.pronunciations.is_empty());
    assert_eq!(response.formatted, None);
}

#[tokio::test]
async fn test_get_pronunciation_withUpstreamStatus_shouldMapToNotFound() {
    let source = MockSource::not_found(404);
    let service = DictionaryService::new(source);

    let error = service.get_pronunciation("Tag", "de", false).await.unwrap_err();
    assert!(matches!(error, LookupError::NotFound { status: 404, .. }));
}
