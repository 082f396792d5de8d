//! Punctuation-heuristic tokenization
//!
//! Words are whitespace-delimited runs of text after a fixed set of
//! punctuation characters has been removed. Whitespace follows the ECMAScript
//! definition so counts line up with browser-side counters.

/// Characters removed before words are split.
pub const PUNCTUATION: [char; 11] = ['\'', '"', ';', ':', ',', '.', '?', '¿', '-', '!', '¡'];

/// Whitespace as matched by `\s` in ECMAScript.
///
/// This differs from [`char::is_whitespace`] in two places: U+FEFF counts as
/// whitespace and U+0085 does not.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Check if a character is in the [`PUNCTUATION`] set
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Trim leading and trailing whitespace
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_whitespace)
}

/// Remove every whitespace character
pub fn remove_whitespace(text: &str) -> String {
    text.chars().filter(|&c| !is_whitespace(c)).collect()
}

/// Splits text into words
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Remove the punctuation set from `text`
    pub fn clean(&self, text: &str) -> String {
        text.chars().filter(|&c| !is_punctuation(c)).collect()
    }

    /// Split already cleaned text on whitespace
    pub fn split<'a>(&self, cleaned: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        cleaned.split(is_whitespace).filter(|w| !w.is_empty())
    }

    /// Clean and split `text` into owned words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = self.clean(text);
        self.split(&cleaned).map(str::to_string).collect()
    }

    /// Number of words in `text`
    pub fn count_words(&self, text: &str) -> usize {
        let cleaned = self.clean(text);
        self.split(&cleaned).count()
    }
}
