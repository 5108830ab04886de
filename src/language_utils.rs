use isolang::Language;

use crate::errors::LookupError;

/// Language resolution utilities
///
/// This module maps a loosely specified language identifier (an ISO 639
/// code or a free-text name) to a canonical descriptor, using a strict
/// then fuzzy fallback chain over the isolang table.
/// How an identifier was matched during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageMatch {
    /// Exact ISO 639-1 (2-letter) code match
    Alpha2,
    /// Exact ISO 639-3 (3-letter) code match
    Alpha3,
    /// Exact English display name match
    Name,
    /// Identifier found as a substring of a display name
    NameFragment,
}

/// Canonical identity of a resolved language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDescriptor {
    /// English display name (e.g. "German")
    pub name: String,

    /// ISO 639-1 code, when one exists (e.g. "de")
    pub alpha2: Option<String>,

    /// ISO 639-3 code (e.g. "deu")
    pub alpha3: String,

    /// Which resolver tier produced the match
    pub matched_by: LanguageMatch,
}

impl LanguageDescriptor {
    fn from_language(language: Language, matched_by: LanguageMatch) -> Self {
        LanguageDescriptor {
            name: language.to_name().to_string(),
            alpha2: language.to_639_1().map(str::to_string),
            alpha3: language.to_639_3().to_string(),
            matched_by,
        }
    }
}

/// Resolve a language identifier to a canonical descriptor.
///
/// The fallback chain is case-insensitive and the first matching tier wins:
///
/// 1. Exact ISO 639-1 code (2-character identifiers only)
/// 2. Exact ISO 639-3 code (3-character identifiers only)
/// 3. Exact English display name
/// 4. Substring of a display name, first hit in table order
///
/// Every failure mode is reported uniformly as
/// [`LookupError::UnresolvedLanguage`] carrying the original identifier;
/// callers never see the distinction between bad input and a lookup miss.
pub fn resolve_language(identifier: &str) -> Result<LanguageDescriptor, LookupError> {
    let normalized = identifier.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(LookupError::UnresolvedLanguage(identifier.to_string()));
    }

    if normalized.len() == 2 {
        if let Some(language) = Language::from_639_1(&normalized) {
            return Ok(LanguageDescriptor::from_language(language, LanguageMatch::Alpha2));
        }
    }

    if normalized.len() == 3 {
        if let Some(language) = Language::from_639_3(&normalized) {
            return Ok(LanguageDescriptor::from_language(language, LanguageMatch::Alpha3));
        }
    }

    if let Some(language) = isolang::languages()
        .find(|language| language.to_name().to_lowercase() == normalized)
    {
        return Ok(LanguageDescriptor::from_language(language, LanguageMatch::Name));
    }

    // Tie-break for multiple containing names is the table's natural
    // enumeration order, first hit wins
    if let Some(language) = isolang::languages()
        .find(|language| language.to_name().to_lowercase().contains(&normalized))
    {
        return Ok(LanguageDescriptor::from_language(language, LanguageMatch::NameFragment));
    }

    Err(LookupError::UnresolvedLanguage(identifier.to_string()))
}

/// Check whether a section label refers to the resolved language.
///
/// Upstream documents key language sections by 2-letter code and label
/// entries with the display name; both spellings are accepted.
pub fn matches_descriptor(label: &str, descriptor: &LanguageDescriptor) -> bool {
    let label = label.trim();
    if label.eq_ignore_ascii_case(&descriptor.name) {
        return true;
    }
    match &descriptor.alpha2 {
        Some(alpha2) => label.eq_ignore_ascii_case(alpha2),
        None => label.eq_ignore_ascii_case(&descriptor.alpha3),
    }
}
