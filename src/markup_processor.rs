use once_cell::sync::Lazy;
use regex::Regex;

// @module: Markup scanning and text/phonetic extraction

// @const: class attribute regex (first class token only)
static CLASS_ATTR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"class\s*=\s*["']?([^"'>\s]+)"#).unwrap()
});

/// Class marker the upstream service puts on phonetic notation spans
pub const PHONETIC_CLASS: &str = "IPA";

/// One event produced by a linear scan over a markup fragment
#[derive(Debug, PartialEq)]
enum MarkupEvent<'a> {
    /// Opening tag with its raw attribute string
    Open { name: String, attrs: &'a str },
    /// Closing tag
    Close { name: String },
    /// Text data between tags
    Text(&'a str),
}

/// Scan a markup fragment left to right into open/close/text events.
///
/// The scanner is deliberately forgiving: comment and doctype tags are
/// skipped, a trailing unterminated tag is dropped, and self-closing tags
/// are reported as plain open tags. Malformed input never fails.
fn scan_markup(markup: &str) -> Vec<MarkupEvent<'_>> {
    let mut events = Vec::new();
    let mut rest = markup;

    while let Some(lt) = rest.find('<') {
        if lt > 0 {
            events.push(MarkupEvent::Text(&rest[..lt]));
        }
        let after = &rest[lt + 1..];
        match after.find('>') {
            Some(gt) => {
                push_tag_event(&after[..gt], &mut events);
                rest = &after[gt + 1..];
            }
            None => {
                // Unterminated tag, drop the remainder
                rest = "";
            }
        }
    }

    if !rest.is_empty() {
        events.push(MarkupEvent::Text(rest));
    }

    events
}

// @param inner: tag content between '<' and '>'
fn push_tag_event<'a>(inner: &'a str, events: &mut Vec<MarkupEvent<'a>>) {
    let inner = inner.trim();
    if inner.is_empty() || inner.starts_with('!') {
        return;
    }

    if let Some(name_part) = inner.strip_prefix('/') {
        let name = tag_name(name_part);
        if !name.is_empty() {
            events.push(MarkupEvent::Close { name });
        }
        return;
    }

    let name = tag_name(inner);
    if name.is_empty() {
        return;
    }
    let attrs = inner[name.len()..].trim_end_matches('/').trim();
    events.push(MarkupEvent::Open { name, attrs });
}

// @returns: leading tag name, lowercased
fn tag_name(inner: &str) -> String {
    inner.trim()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Decode the small entity set the upstream service emits in text data
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

// @returns: value of the class attribute, if any
fn tag_class(attrs: &str) -> Option<&str> {
    CLASS_ATTR_REGEX.captures(attrs)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extractor that strips markup down to clean text.
///
/// Line-break tags become newlines, anchor text (cross-reference link
/// labels) is suppressed entirely, and every other tag is structurally
/// transparent. Text chunks are trimmed and glued with single spaces, so
/// dropping an anchor leaves well-spaced prose. Instances can be reused;
/// each call to [`extract`](TextExtractor::extract) starts from a fresh
/// tag stack and buffer.
#[derive(Debug, Default)]
pub struct TextExtractor {
    // @field: Stack of currently open tag names
    tag_stack: Vec<String>,

    // @field: Accumulated text fragments
    fragments: Vec<String>,
}

impl TextExtractor {
    /// Create a new extractor with empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the tag stack and fragment buffer.
    ///
    /// Called at the start of every parse; no state leaks between calls.
    pub fn reset(&mut self) {
        self.tag_stack.clear();
        self.fragments.clear();
    }

    /// Extract clean text from a markup fragment
    pub fn extract(&mut self, markup: &str) -> String {
        self.reset();

        for event in scan_markup(markup) {
            match event {
                MarkupEvent::Open { name, .. } => self.handle_open(name),
                MarkupEvent::Close { name } => self.handle_close(&name),
                MarkupEvent::Text(data) => self.handle_text(data),
            }
        }

        self.fragments.concat().trim().to_string()
    }

    fn handle_open(&mut self, name: String) {
        // The line-break tag has no matching close event to act on
        if name == "br" {
            self.fragments.push("\n".to_string());
        }
        self.tag_stack.push(name);
    }

    fn handle_close(&mut self, name: &str) {
        // Pop past extras rather than failing on unbalanced tags
        while self.tag_stack.iter().any(|tag| tag == name) {
            self.tag_stack.pop();
        }
    }

    fn handle_text(&mut self, data: &str) {
        // Anchor text is cross-reference noise, skip it at any depth
        if self.tag_stack.iter().any(|tag| tag == "a") {
            return;
        }
        let text = decode_entities(data.trim());
        if text.is_empty() {
            return;
        }
        // Glue inline chunks with a single space; newlines stand alone
        if let Some(last) = self.fragments.last() {
            if !last.ends_with('\n') {
                self.fragments.push(" ".to_string());
            }
        }
        self.fragments.push(text);
    }
}

/// One-shot convenience wrapper around [`TextExtractor`]
pub fn extract_text(markup: &str) -> String {
    TextExtractor::new().extract(markup)
}

/// Extractor that collects phonetic notation out of a markup fragment.
///
/// A tag carrying `class="IPA"` arms a one-shot capture flag; the first
/// text chunk that follows is taken verbatim as one transcription token.
/// Transcription spans never nest upstream, so capture is gated by the
/// flag alone, not by stack depth.
#[derive(Debug, Default)]
pub struct PhoneticExtractor {
    // @field: One-shot capture flag
    capturing: bool,

    // @field: Tokens collected in document order
    tokens: Vec<String>,
}

impl PhoneticExtractor {
    /// Create a new extractor with empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the capture flag and token list
    pub fn reset(&mut self) {
        self.capturing = false;
        self.tokens.clear();
    }

    /// Extract phonetic tokens in document order.
    ///
    /// An empty result means "not transcribed", which is a normal outcome.
    pub fn extract(&mut self, markup: &str) -> Vec<String> {
        self.reset();

        for event in scan_markup(markup) {
            match event {
                MarkupEvent::Open { attrs, .. } => {
                    if tag_class(attrs) == Some(PHONETIC_CLASS) {
                        self.capturing = true;
                    }
                }
                MarkupEvent::Text(data) => {
                    if self.capturing {
                        self.tokens.push(decode_entities(data));
                        self.capturing = false;
                    }
                }
                MarkupEvent::Close { .. } => {}
            }
        }

        std::mem::take(&mut self.tokens)
    }
}

/// One-shot convenience wrapper around [`PhoneticExtractor`]
pub fn extract_phonetic_tokens(markup: &str) -> Vec<String> {
    PhoneticExtractor::new().extract(markup)
}
