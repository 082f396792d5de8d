//! Word frequency analysis
//!
//! Normalizes a source, counts every word, and ranks the top words with
//! [`counting_sort`].

use super::counting_sort::counting_sort;
use crate::nlp::normalize::strip;
use crate::nlp::tokenizer::Tokenizer;
use crate::source::TextSource;
use crate::types::{Configuration, FrequencyResult, FrequencyTable, DEFAULT_FREQ_ITEM_COUNT};

/// Counts and ranks words
#[derive(Debug, Clone, Default)]
pub struct FrequencyAnalyzer {
    config: Configuration,
    tokenizer: Tokenizer,
}

impl FrequencyAnalyzer {
    /// Create an analyzer with default config
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

    /// Count every word of `source`. `None` when there are no words.
    pub fn table<S: TextSource + ?Sized>(&self, source: &S) -> Option<FrequencyTable> {
        trace_stage!("frequency_table");

        let trimmed = strip(source, &self.config);
        let cleaned = self.tokenizer.clean(&trimmed);
        let table = FrequencyTable::from_words(self.tokenizer.split(&cleaned));

        if table.is_empty() {
            None
        } else {
            Some(table)
        }
    }

    /// Rank the most frequent words of `source`. `None` when there are no words.
    pub fn freq<S: TextSource + ?Sized>(&self, source: &S) -> Option<FrequencyResult> {
        let table = self.table(source)?;
        let limit = effective_item_count(self.config.freq_item_count, table.total_words());

        trace_stage!("counting_sort");
        Some(counting_sort(&table, limit))
    }
}

/// Clamp a requested item count against the number of words counted.
///
/// Requests above `total_words` are cut to `total_words`; requests `<= 0`
/// fall back to [`DEFAULT_FREQ_ITEM_COUNT`].
pub fn effective_item_count(requested: i64, total_words: usize) -> usize {
    let total = i64::try_from(total_words).unwrap_or(i64::MAX);
    if requested > total {
        total_words
    } else if requested <= 0 {
        DEFAULT_FREQ_ITEM_COUNT as usize
    } else {
        requested as usize
    }
}

/// Rank the most frequent words of `source`
pub fn compute_frequencies<S: TextSource + ?Sized>(
    source: &S,
    config: &Configuration,
) -> Option<FrequencyResult> {
    FrequencyAnalyzer::with_config(*config).freq(source)
}

/// Count every word of `source`
pub fn word_frequencies<S: TextSource + ?Sized>(
    source: &S,
    config: &Configuration,
) -> Option<FrequencyTable> {
    FrequencyAnalyzer::with_config(*config).table(source)
}
