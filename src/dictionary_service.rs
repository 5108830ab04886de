use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{LookupError, ProviderError};
use crate::language_utils::{self, LanguageDescriptor};
use crate::markup_processor::{TextExtractor, extract_phonetic_tokens};
use crate::providers::DictionarySource;
use crate::sentence_aligner::align_sentence;

// @module: Upstream document interpretation and lookup orchestration

/// Rendered output when a lookup produced no usable definitions
pub const NO_DEFINITIONS: &str = "No definitions found";

// Fallback literals for incomplete parsed examples
const NO_EXAMPLE: &str = "No example provided";
const NO_TRANSLATION: &str = "No translation available";

/// Normalize a word for use in an upstream URL.
///
/// Trims whitespace, converts to lowercase, and replaces internal spaces
/// with underscores.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "_")
}

/// Upstream definition document: language-section key to entry list.
///
/// A BTreeMap keeps cross-section scans deterministic regardless of the
/// JSON key order the upstream happens to emit.
pub type DefinitionDocument = BTreeMap<String, Vec<DefinitionDocumentEntry>>;

/// One part-of-speech entry inside a definition document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefinitionDocumentEntry {
    /// Part-of-speech label (e.g. "Noun")
    #[serde(default, rename = "partOfSpeech")]
    pub part_of_speech: String,

    /// Language label (e.g. "German")
    #[serde(default)]
    pub language: String,

    /// Ordered definition blocks
    #[serde(default)]
    pub definitions: Vec<DefinitionBlock>,
}

/// One definition with its examples, all fields still in markup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefinitionBlock {
    /// Definition text as markup
    #[serde(default)]
    pub definition: String,

    /// Examples with parsed translations
    #[serde(default, rename = "parsedExamples")]
    pub parsed_examples: Vec<ParsedExample>,

    /// Plain markup examples without translations
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Example variant carrying a parsed translation field
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParsedExample {
    /// Example text as markup
    #[serde(default)]
    pub example: String,

    /// Translation of the example, when the upstream provides one
    #[serde(default)]
    pub translation: Option<String>,
}

/// Upstream sectioned page document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageDocument {
    /// Lead section group
    #[serde(default)]
    pub lead: SectionGroup,

    /// Remaining section group
    #[serde(default)]
    pub remaining: SectionGroup,
}

/// Group of page sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionGroup {
    /// Sections in document order
    #[serde(default)]
    pub sections: Vec<PageSection>,
}

/// One page section with its heading, markup body and nested subsections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSection {
    /// Heading level (language sections sit at level 2)
    #[serde(default)]
    pub level: u32,

    /// Heading line
    #[serde(default)]
    pub line: String,

    /// Section body as markup
    #[serde(default)]
    pub text: String,

    /// Nested subsections
    #[serde(default)]
    pub sections: Vec<PageSection>,
}

/// Normalized definition entry for one part-of-speech block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionEntry {
    /// Part-of-speech label
    pub part_of_speech: String,

    /// Language label from the entry
    pub language: String,

    /// Definitions in document order
    pub senses: Vec<DefinitionSense>,
}

/// One cleaned definition with its examples
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionSense {
    /// Definition as clean text
    pub text: String,

    /// Examples in document order
    pub examples: Vec<ExampleText>,
}

/// One cleaned example, with translation where the upstream parsed one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleText {
    /// Example as clean text
    pub text: String,

    /// Translation, `None` for the plain example variant
    pub translation: Option<String>,
}

/// Response envelope for a definition lookup
#[derive(Debug, Clone, Serialize)]
pub struct DefinitionResponse {
    /// The word as requested
    pub word: String,

    /// Canonical display name of the resolved language
    pub language: String,

    /// Rendered definition text
    pub definitions: String,

    /// Public page URL for attribution
    pub source_url: String,
}

/// Response envelope for a pronunciation lookup
#[derive(Debug, Clone, Serialize)]
pub struct PronunciationResponse {
    /// The word or sentence as requested
    pub word: String,

    /// Canonical display name of the resolved language
    pub language: String,

    /// Extracted transcriptions; placeholder-filled in sentence mode
    pub pronunciations: Vec<String>,

    /// Two-line aligned rendering, sentence mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,

    /// Public page URL for attribution
    pub source_url: String,
}

/// Select and normalize the definition entries for a resolved language.
///
/// A section is selected when its key matches the descriptor or when an
/// entry's own language label does; the `other` section (etymologies and
/// related languages) is always skipped. Markup is stripped here, so
/// downstream consumers only ever see clean text.
pub fn normalize_definitions(
    document: &DefinitionDocument,
    language: &LanguageDescriptor,
) -> Vec<DefinitionEntry> {
    let mut extractor = TextExtractor::new();
    let mut entries = Vec::new();

    for (section_key, section_entries) in document {
        if section_key == "other" {
            continue;
        }
        let section_matches = language_utils::matches_descriptor(section_key, language);

        for entry in section_entries {
            if !section_matches && !language_utils::matches_descriptor(&entry.language, language) {
                continue;
            }

            let senses = entry.definitions.iter()
                .map(|block| DefinitionSense {
                    text: extractor.extract(&block.definition),
                    examples: collect_examples(block, &mut extractor),
                })
                .collect();

            let label = if entry.language.is_empty() {
                language.name.clone()
            } else {
                entry.language.clone()
            };
            entries.push(DefinitionEntry {
                part_of_speech: entry.part_of_speech.clone(),
                language: label,
                senses,
            });
        }
    }

    entries
}

fn collect_examples(block: &DefinitionBlock, extractor: &mut TextExtractor) -> Vec<ExampleText> {
    if !block.parsed_examples.is_empty() {
        // Parsed variant: a translation slot always exists, defaulted when
        // the upstream left it out
        block.parsed_examples.iter()
            .map(|example| ExampleText {
                text: extractor.extract(&example.example),
                translation: Some(
                    example.translation.clone()
                        .unwrap_or_else(|| NO_TRANSLATION.to_string()),
                ),
            })
            .collect()
    } else {
        block.examples.iter()
            .map(|markup| ExampleText {
                text: extractor.extract(markup),
                translation: None,
            })
            .collect()
    }
}

/// Render normalized entries into the numbered plain-text layout
pub fn render_definitions(entries: &[DefinitionEntry]) -> String {
    let mut lines = Vec::new();

    for entry in entries {
        lines.push(format!("{} - {}:", entry.language, entry.part_of_speech));

        for (index, sense) in entry.senses.iter().enumerate() {
            lines.push(format!("  {}. {}", index + 1, sense.text));

            for example in &sense.examples {
                let text = if example.text.is_empty() { NO_EXAMPLE } else { &example.text };
                lines.push(format!("    Example: {}", text));
                if let Some(translation) = &example.translation {
                    lines.push(format!("    Translation: {}", translation));
                }
            }
        }
    }

    if lines.is_empty() {
        NO_DEFINITIONS.to_string()
    } else {
        lines.join("\n")
    }
}

/// Locate the pronunciation subsection for a resolved language.
///
/// Finds the level-2 section whose heading line contains the language's
/// display name, then the nested subsection whose heading line contains
/// "pronunciation", both as case-insensitive substrings. `None` means the
/// page carries no transcription for that language, a normal outcome.
pub fn find_pronunciation_section<'a>(
    document: &'a PageDocument,
    language: &LanguageDescriptor,
) -> Option<&'a PageSection> {
    let name = language.name.to_lowercase();
    let language_section = document.lead.sections.iter()
        .chain(document.remaining.sections.iter())
        .find(|section| section.level == 2 && section.line.to_lowercase().contains(&name))?;

    find_subsection(language_section, "pronunciation")
}

fn find_subsection<'a>(section: &'a PageSection, needle: &str) -> Option<&'a PageSection> {
    for subsection in &section.sections {
        if subsection.line.to_lowercase().contains(needle) {
            return Some(subsection);
        }
        if let Some(found) = find_subsection(subsection, needle) {
            return Some(found);
        }
    }
    None
}

/// Dictionary lookup service over an upstream document source.
///
/// Stateless between calls; independent lookups may run concurrently.
#[derive(Debug)]
pub struct DictionaryService<S: DictionarySource> {
    source: S,
}

impl<S: DictionarySource> DictionaryService<S> {
    /// Create a service over the given source
    pub fn new(source: S) -> Self {
        DictionaryService { source }
    }

    /// Look up definitions for a word in a language.
    ///
    /// Fails with [`LookupError::UnresolvedLanguage`] when the language
    /// cannot be resolved and [`LookupError::NotFound`] when the upstream
    /// returns a non-success status for the word.
    pub async fn get_definition(
        &self,
        word: &str,
        language: &str,
    ) -> Result<DefinitionResponse, LookupError> {
        let descriptor = language_utils::resolve_language(language)?;
        let normalized = normalize_word(word);
        debug!("Definition lookup: '{}' ({})", normalized, descriptor.name);

        let value = self.source.fetch_definition(&normalized).await
            .map_err(|error| Self::lookup_error(word, error))?;
        let document: DefinitionDocument = serde_json::from_value(value)
            .map_err(|error| LookupError::MalformedDocument(error.to_string()))?;

        let entries = normalize_definitions(&document, &descriptor);
        Ok(DefinitionResponse {
            word: word.to_string(),
            language: descriptor.name,
            definitions: render_definitions(&entries),
            source_url: self.source.page_url(&normalized),
        })
    }

    /// Look up the pronunciation of a word or sentence in a language.
    ///
    /// Transcriptions come from the language's pronunciation subsection in
    /// document order. In sentence mode they are distributed across the
    /// sentence tokens position by position (a best-effort mapping) and
    /// the two-line rendering is returned alongside the padded list.
    pub async fn get_pronunciation(
        &self,
        word: &str,
        language: &str,
        is_sentence: bool,
    ) -> Result<PronunciationResponse, LookupError> {
        let descriptor = language_utils::resolve_language(language)?;
        let normalized = normalize_word(word);
        debug!("Pronunciation lookup: '{}' ({})", normalized, descriptor.name);

        let value = self.source.fetch_page(&normalized).await
            .map_err(|error| Self::lookup_error(word, error))?;
        let document: PageDocument = serde_json::from_value(value)
            .map_err(|error| LookupError::MalformedDocument(error.to_string()))?;

        let tokens = match find_pronunciation_section(&document, &descriptor) {
            Some(section) => extract_phonetic_tokens(&section.text),
            None => Vec::new(),
        };
        let source_url = self.source.page_url(&normalized);

        if is_sentence {
            let alignment = align_sentence(word, &tokens);
            Ok(PronunciationResponse {
                word: word.to_string(),
                language: descriptor.name,
                pronunciations: alignment.transcriptions.clone(),
                formatted: Some(alignment.rendered()),
                source_url,
            })
        } else {
            Ok(PronunciationResponse {
                word: word.to_string(),
                language: descriptor.name,
                pronunciations: tokens,
                formatted: None,
                source_url,
            })
        }
    }

    // Upstream status faults surface as NotFound; everything else stays a
    // provider error
    fn lookup_error(word: &str, error: ProviderError) -> LookupError {
        match error {
            ProviderError::ApiError { status_code, .. } => LookupError::NotFound {
                word: word.to_string(),
                status: status_code,
            },
            other => LookupError::Provider(other),
        }
    }
}
