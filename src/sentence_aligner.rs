use std::fmt;

/// Sentence-to-pronunciation alignment
///
/// Distributes per-word transcriptions across a sentence and renders a
/// fixed-width two-line block: words on top, transcriptions underneath,
/// columns aligned.
/// Literal stand-in for a word with no scraped transcription.
///
/// Consumers must treat this as ordinary text, not as an absence marker.
pub const MISSING_TRANSCRIPTION: &str = "[!!!]";

/// Result of aligning a sentence with its per-word transcriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceAlignment {
    /// Sentence tokens in order
    pub tokens: Vec<String>,

    /// One transcription per token, placeholder-filled where missing
    pub transcriptions: Vec<String>,

    /// Rendered top row: tokens, column-aligned
    pub word_row: String,

    /// Rendered bottom row: transcriptions, column-aligned
    pub phonetic_row: String,
}

impl SentenceAlignment {
    /// Both rows stacked as a two-line monospace block
    pub fn rendered(&self) -> String {
        format!("{}\n{}", self.word_row, self.phonetic_row)
    }
}

impl fmt::Display for SentenceAlignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.word_row)?;
        write!(f, "{}", self.phonetic_row)
    }
}

/// Align a sentence with an ordered list of per-word transcriptions.
///
/// The sentence is split on whitespace (empty tokens discarded). Token `i`
/// pairs with `transcriptions[i]` when present and with
/// [`MISSING_TRANSCRIPTION`] otherwise; excess transcriptions are silently
/// dropped. Each column is as wide as the longer member of its pair,
/// measured in Unicode scalar values, and both rows pad every column
/// uniformly before joining with single spaces.
///
/// The token-for-transcription correspondence is a best-effort assumption
/// about upstream span order, not a verified property.
pub fn align_sentence(sentence: &str, transcriptions: &[String]) -> SentenceAlignment {
    let tokens: Vec<String> = sentence.split_whitespace()
        .map(str::to_string)
        .collect();

    let transcriptions: Vec<String> = (0..tokens.len())
        .map(|i| {
            transcriptions.get(i)
                .cloned()
                .unwrap_or_else(|| MISSING_TRANSCRIPTION.to_string())
        })
        .collect();

    let mut word_columns = Vec::with_capacity(tokens.len());
    let mut phonetic_columns = Vec::with_capacity(tokens.len());
    for (token, transcription) in tokens.iter().zip(&transcriptions) {
        let width = token.chars().count().max(transcription.chars().count());
        word_columns.push(format!("{:<width$}", token));
        phonetic_columns.push(format!("{:<width$}", transcription));
    }

    SentenceAlignment {
        tokens,
        transcriptions,
        word_row: word_columns.join(" "),
        phonetic_row: phonetic_columns.join(" "),
    }
}
