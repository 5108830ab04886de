/*!
 * Tests for language identifier resolution
 */

use wikidict::errors::LookupError;
use wikidict::language_utils::{LanguageMatch, matches_descriptor, resolve_language};

/// Test each resolver tier against German spellings
#[test]
fn test_resolve_language_withGermanSpellings_shouldAgreeOnIdentity() {
    let by_alpha2 = resolve_language("de").unwrap();
    let by_alpha3 = resolve_language("deu").unwrap();
    let by_name = resolve_language("German").unwrap();

    assert_eq!(by_alpha2.matched_by, LanguageMatch::Alpha2);
    assert_eq!(by_alpha3.matched_by, LanguageMatch::Alpha3);
    assert_eq!(by_name.matched_by, LanguageMatch::Name);

    for descriptor in [&by_alpha2, &by_alpha3, &by_name] {
        assert_eq!(descriptor.name, "German");
        assert_eq!(descriptor.alpha2.as_deref(), Some("de"));
        assert_eq!(descriptor.alpha3, "deu");
    }
}

/// The substring tier catches name fragments
#[test]
fn test_resolve_language_withNameFragment_shouldMatchBySubstring() {
    let descriptor = resolve_language("germ").unwrap();
    assert_eq!(descriptor.matched_by, LanguageMatch::NameFragment);
    assert_eq!(descriptor.name, "German");
    assert_eq!(descriptor.alpha3, "deu");
}

#[test]
fn test_resolve_language_withCaseAndWhitespace_shouldNormalize() {
    assert_eq!(resolve_language(" DE ").unwrap().alpha3, "deu");
    assert_eq!(resolve_language("GERMAN").unwrap().alpha3, "deu");
    assert_eq!(resolve_language("french").unwrap().alpha3, "fra");
}

#[test]
fn test_resolve_language_withUnknownIdentifier_shouldFailWithOriginal() {
    let error = resolve_language("zz-not-a-language").unwrap_err();
    match error {
        LookupError::UnresolvedLanguage(identifier) => {
            assert_eq!(identifier, "zz-not-a-language");
        }
        other => panic!("Expected UnresolvedLanguage, got {:?}", other),
    }

    assert!(resolve_language("").is_err());
    assert!(resolve_language("   ").is_err());
}

/// Exact name matches win over earlier substring hits
#[test]
fn test_resolve_language_withExactName_shouldNotFallThroughToFragmentTier() {
    // "english" is also a substring of "Middle English (1100-1500)" and
    // friends; the exact-name tier must claim it first
    let descriptor = resolve_language("English").unwrap();
    assert_eq!(descriptor.matched_by, LanguageMatch::Name);
    assert_eq!(descriptor.alpha3, "eng");
}

/// Test section label matching against a resolved descriptor
#[test]
fn test_matches_descriptor_withCodeAndName_shouldAcceptBoth() {
    let descriptor = resolve_language("de").unwrap();
    assert!(matches_descriptor("de", &descriptor));
    assert!(matches_descriptor("DE", &descriptor));
    assert!(matches_descriptor("German", &descriptor));
    assert!(matches_descriptor("german", &descriptor));
    assert!(!matches_descriptor("deu", &descriptor));
    assert!(!matches_descriptor("fr", &descriptor));
    assert!(!matches_descriptor("other", &descriptor));
}
