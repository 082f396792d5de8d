//! Text normalization ahead of counting.
//!
//! Order of operations: strip tags (optional), strip zero-width spaces
//! (optional), trim surrounding whitespace.

use super::tokenizer::trim;
use crate::source::TextSource;
use crate::types::Configuration;
use once_cell::sync::Lazy;
use std::borrow::Cow;

/// `<tag ...>` and `</tag>`. An angle-bracket heuristic, not an HTML parser.
static TAG_RE: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"</?[a-zA-Z][^>]*>").expect("valid tag pattern"));

const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Read `source` and normalize its text.
pub fn strip<S: TextSource + ?Sized>(source: &S, config: &Configuration) -> String {
    strip_text(&source.raw_text(), config)
}

/// Normalize text that has already been read from a source.
pub fn strip_text(raw: &str, config: &Configuration) -> String {
    let text = if config.strip_tags {
        TAG_RE.replace_all(raw, "")
    } else {
        Cow::Borrowed(raw)
    };

    let text = if config.ignore_zero_width && text.contains(ZERO_WIDTH_SPACE) {
        Cow::Owned(text.replace(ZERO_WIDTH_SPACE, ""))
    } else {
        text
    };

    trim(&text).to_string()
}
