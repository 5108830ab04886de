/*!
 * Tests for markup text and phonetic extraction
 */

use wikidict::markup_processor::{
    PhoneticExtractor, TextExtractor, extract_phonetic_tokens, extract_text,
};

/// Test text extraction on plain markup
#[test]
fn test_extract_text_withSimpleParagraph_shouldStripTags() {
    assert_eq!(extract_text("<p>a word</p>"), "a word");
    assert_eq!(extract_text("<p><i>emphasized</i> text</p>"), "emphasized text");
}

#[test]
fn test_extract_text_withEmptyInput_shouldReturnEmptyString() {
    assert_eq!(extract_text(""), "");
    assert_eq!(extract_text("<p></p>"), "");
}

/// Line-break tags become newlines, joined text trimmed at the ends
#[test]
fn test_extract_text_withLineBreaks_shouldJoinSegmentsWithNewlines() {
    assert_eq!(extract_text("first<br>second"), "first\nsecond");
    assert_eq!(extract_text("first<br/>second<br />third"), "first\nsecond\nthird");
    // Leading and trailing breaks trim away
    assert_eq!(extract_text("<br>only<br>"), "only");
}

/// Anchor text is suppressed at any nesting depth
#[test]
fn test_extract_text_withAnchors_shouldSuppressLinkText() {
    assert_eq!(extract_text("<p>a <a href='x'>linked</a> word</p>"), "a word");
    assert_eq!(
        extract_text("<p>see <a href='x'><b>deeply <i>nested</i></b> label</a> there</p>"),
        "see there"
    );
}

/// Unknown tags are structurally transparent
#[test]
fn test_extract_text_withUnknownTags_shouldIgnoreThem() {
    assert_eq!(extract_text("<blockquote><q>quoted</q></blockquote>"), "quoted");
}

/// Unbalanced and overlapping tags degrade to best-effort text
#[test]
fn test_extract_text_withUnbalancedTags_shouldNotFail() {
    // Close without open
    assert_eq!(extract_text("text</b> more"), "text more");
    // Overlapping close pops past the extra <i>
    assert_eq!(extract_text("<b><i>bold italic</b> after"), "bold italic after");
    // Closing an outer anchor unwinds the inner tags too
    assert_eq!(extract_text("<a href='x'><b>hidden</a>visible"), "visible");
}

#[test]
fn test_extract_text_withEntities_shouldDecodeThem() {
    assert_eq!(extract_text("<p>salt &amp; pepper</p>"), "salt & pepper");
    assert_eq!(extract_text("x &lt; y"), "x < y");
}

#[test]
fn test_extract_text_withCommentAndDoctype_shouldSkipThem() {
    assert_eq!(extract_text("<!-- note -->kept<!DOCTYPE html>"), "kept");
}

/// Reused instances must not leak state between parses
#[test]
fn test_textExtractor_withReuse_shouldBeOrderIndependent() {
    let mut extractor = TextExtractor::new();

    // An unclosed anchor leaves 'a' on the stack at end of parse
    let first = extractor.extract("<a href='x'>dangling");
    let second = extractor.extract("plain text");

    let mut fresh = TextExtractor::new();
    assert_eq!(second, fresh.extract("plain text"));
    assert_eq!(first, fresh.extract("<a href='x'>dangling"));
}

/// Test phonetic token collection in document order
#[test]
fn test_extract_phonetic_tokens_withMarkerSpans_shouldCollectInOrder() {
    let markup = "intro <span class=\"IPA\">/haʊs/</span> middle \
                  <span class=\"IPA\">/hʊs/</span> outro";
    assert_eq!(extract_phonetic_tokens(markup), vec!["/haʊs/", "/hʊs/"]);
}

#[test]
fn test_extract_phonetic_tokens_withoutMarkers_shouldReturnEmpty() {
    assert!(extract_phonetic_tokens("<p>no transcription here</p>").is_empty());
    assert!(extract_phonetic_tokens("").is_empty());
}

/// Only the first text chunk after a marker is captured
#[test]
fn test_extract_phonetic_tokens_withNestedText_shouldCaptureFirstChunkOnly() {
    let markup = "<span class=\"IPA\">/taːk/<small>(standard)</small></span>";
    assert_eq!(extract_phonetic_tokens(markup), vec!["/taːk/"]);
}

/// A marker span with no following text emits nothing
#[test]
fn test_extract_phonetic_tokens_withEmptySpan_shouldEmitNoToken() {
    assert!(extract_phonetic_tokens("<span class=\"IPA\"></span>").is_empty());
    // The empty span does not poison later spans either
    let markup = "<span class=\"IPA\"></span><span class=\"IPA\">/ok/</span>";
    assert_eq!(extract_phonetic_tokens(markup), vec!["/ok/"]);
}

#[test]
fn test_extract_phonetic_tokens_withOtherClasses_shouldIgnoreThem() {
    let markup = "<span class=\"usage\">skip</span><span class='IPA'>/ja/</span>";
    assert_eq!(extract_phonetic_tokens(markup), vec!["/ja/"]);
}

/// Reused instances reset the one-shot flag and token list
#[test]
fn test_phoneticExtractor_withReuse_shouldResetCaptureState() {
    let mut extractor = PhoneticExtractor::new();

    // Marker with no following text leaves the flag armed at end of parse
    let first = extractor.extract("<span class=\"IPA\">");
    assert!(first.is_empty());

    // A fresh parse must not capture its leading text
    let second = extractor.extract("leading text, no markers");
    assert!(second.is_empty());
}
