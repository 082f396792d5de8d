//! Paragraph, sentence, word and character counting
//!
//! All counts except `all` are taken over the normalized text and are zero
//! when that text is empty. `all` measures the raw source text, markup and
//! surrounding whitespace included.

use crate::nlp::decode::code_point_len;
use crate::nlp::normalize::strip_text;
use crate::nlp::tokenizer::{remove_whitespace, Tokenizer};
use crate::source::TextSource;
use crate::types::{Configuration, MetricsResult};
use once_cell::sync::Lazy;
use regex::Regex;

static SOFT_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").expect("valid pattern"));
static HARD_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").expect("valid pattern"));

/// A run of terminators followed by any character other than a line terminator.
static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.?!…]+[^\n\r\x{2028}\x{2029}]").expect("valid pattern")
});

/// Counts paragraphs, sentences, words and characters
#[derive(Debug, Clone, Default)]
pub struct MetricsCalculator {
    config: Configuration,
    tokenizer: Tokenizer,
}

impl MetricsCalculator {
    /// Create a calculator with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: Configuration) -> Self {
        Self {
            config,
            tokenizer: Tokenizer::new(),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Count the current content of `source`
    pub fn count<S: TextSource + ?Sized>(&self, source: &S) -> MetricsResult {
        trace_stage!("metrics");

        let raw = source.raw_text();
        let trimmed = strip_text(&raw, &self.config);
        let all = self.count_all(&raw);

        if trimmed.is_empty() {
            return MetricsResult {
                all,
                ..MetricsResult::default()
            };
        }

        MetricsResult {
            paragraphs: self.count_paragraphs(&trimmed),
            sentences: SENTENCE_END_RE.find_iter(&trimmed).count() + 1,
            words: self.tokenizer.count_words(&trimmed),
            characters: code_point_len(&remove_whitespace(&trimmed)),
            all,
        }
    }

    fn count_paragraphs(&self, trimmed: &str) -> usize {
        let breaks = if self.config.hard_returns {
            &HARD_BREAK_RE
        } else {
            &SOFT_BREAK_RE
        };
        breaks.find_iter(trimmed).count() + 1
    }

    fn count_all(&self, raw: &str) -> usize {
        if self.config.ignore_returns {
            code_point_len(&raw.replace(['\n', '\r'], ""))
        } else {
            code_point_len(raw)
        }
    }
}

/// Count the current content of `source`
pub fn count_metrics<S: TextSource + ?Sized>(source: &S, config: &Configuration) -> MetricsResult {
    MetricsCalculator::with_config(*config).count(source)
}
