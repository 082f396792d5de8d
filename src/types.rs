//! Core types for rapid_textstats
//!
//! This module defines the data structures shared by the counters: the word
//! pool used for frequency tables, the per-call configuration and its
//! overrides, and the result records handed back to callers.

use crate::errors::Result;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Word Pool
// ============================================================================

/// Interns words in first-occurrence order.
///
/// Each distinct word is stored once and gets a dense `u32` id. Ids are handed
/// out in the order words are first seen, which is what the ranking step uses
/// to break ties between equally frequent words.
#[derive(Debug, Default, Clone)]
pub struct WordPool {
    /// Maps words to their interned IDs
    word_to_id: FxHashMap<Arc<str>, u32>,
    /// Maps IDs back to words
    id_to_word: Vec<Arc<str>>,
}

impl WordPool {
    /// Create a new empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            id_to_word: Vec::with_capacity(capacity),
        }
    }

    /// Intern a word, returning its ID
    pub fn intern(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.id_to_word.len() as u32;
        let arc: Arc<str> = word.into();
        self.word_to_id.insert(arc.clone(), id);
        self.id_to_word.push(arc);
        id
    }

    /// Look up the ID of an already interned word
    pub fn id(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(word).copied()
    }

    /// Get a word by its ID
    pub fn get(&self, id: u32) -> Option<&str> {
        self.id_to_word.get(id as usize).map(|s| s.as_ref())
    }

    /// Iterate words in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.id_to_word.iter().map(|s| s.as_ref())
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.id_to_word.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.id_to_word.is_empty()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Default number of words returned by the frequency ranking.
pub const DEFAULT_FREQ_ITEM_COUNT: i64 = 10;

/// Per-call configuration for the counters.
///
/// Built fresh for every computation by merging [`ConfigOverrides`] onto the
/// defaults. The highest observed word frequency is not part of this type; it
/// travels inside [`FrequencyTable`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Separate paragraphs by two or more newlines instead of one
    pub hard_returns: bool,
    /// Remove HTML-like tags before counting
    pub strip_tags: bool,
    /// Exclude `\n` and `\r` from the `all` count
    pub ignore_returns: bool,
    /// Remove zero-width spaces (U+200B) before counting
    pub ignore_zero_width: bool,
    /// Number of top words to return. Values `<= 0` fall back to the default.
    pub freq_item_count: i64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            hard_returns: false,
            strip_tags: false,
            ignore_returns: false,
            ignore_zero_width: true,
            freq_item_count: DEFAULT_FREQ_ITEM_COUNT,
        }
    }
}

impl Configuration {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this configuration with every present override applied
    pub fn merged(&self, overrides: &ConfigOverrides) -> Self {
        Self {
            hard_returns: overrides.hard_returns.unwrap_or(self.hard_returns),
            strip_tags: overrides.strip_tags.unwrap_or(self.strip_tags),
            ignore_returns: overrides.ignore_returns.unwrap_or(self.ignore_returns),
            ignore_zero_width: overrides.ignore_zero_width.unwrap_or(self.ignore_zero_width),
            freq_item_count: overrides.freq_item_count.unwrap_or(self.freq_item_count),
        }
    }

    /// Builder method: use two or more newlines as a paragraph break
    pub fn with_hard_returns(mut self, hard_returns: bool) -> Self {
        self.hard_returns = hard_returns;
        self
    }

    /// Builder method: strip HTML-like tags
    pub fn with_strip_tags(mut self, strip_tags: bool) -> Self {
        self.strip_tags = strip_tags;
        self
    }

    /// Builder method: exclude returns from the `all` count
    pub fn with_ignore_returns(mut self, ignore_returns: bool) -> Self {
        self.ignore_returns = ignore_returns;
        self
    }

    /// Builder method: remove zero-width spaces
    pub fn with_ignore_zero_width(mut self, ignore_zero_width: bool) -> Self {
        self.ignore_zero_width = ignore_zero_width;
        self
    }

    /// Builder method: set the number of top words to return
    pub fn with_freq_item_count(mut self, freq_item_count: i64) -> Self {
        self.freq_item_count = freq_item_count;
        self
    }
}

/// Caller-supplied overrides, one optional value per recognized option.
///
/// Deserializes from the camelCase option bag (`{"hardReturns": true}`).
/// Unknown keys in JSON input are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_returns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_returns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_zero_width: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq_item_count: Option<i64>,
}

impl ConfigOverrides {
    /// Create an empty set of overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from a JSON option bag.
    ///
    /// Unknown keys are ignored, and `null` or a missing key keeps the
    /// default. Known keys are typed: a value of the wrong JSON type is a
    /// [`TextStatsError::Serialization`] error and is not coerced, so
    /// `"true"` for a flag and `2.0` for `freqItemCount` are both rejected.
    ///
    /// [`TextStatsError::Serialization`]: crate::errors::TextStatsError::Serialization
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder method: override `hard_returns`
    pub fn with_hard_returns(mut self, hard_returns: bool) -> Self {
        self.hard_returns = Some(hard_returns);
        self
    }

    /// Builder method: override `strip_tags`
    pub fn with_strip_tags(mut self, strip_tags: bool) -> Self {
        self.strip_tags = Some(strip_tags);
        self
    }

    /// Builder method: override `ignore_returns`
    pub fn with_ignore_returns(mut self, ignore_returns: bool) -> Self {
        self.ignore_returns = Some(ignore_returns);
        self
    }

    /// Builder method: override `ignore_zero_width`
    pub fn with_ignore_zero_width(mut self, ignore_zero_width: bool) -> Self {
        self.ignore_zero_width = Some(ignore_zero_width);
        self
    }

    /// Builder method: override `freq_item_count`
    pub fn with_freq_item_count(mut self, freq_item_count: i64) -> Self {
        self.freq_item_count = Some(freq_item_count);
        self
    }
}

/// Merge overrides onto the default configuration.
pub fn resolve_configuration(overrides: Option<&ConfigOverrides>) -> Configuration {
    match overrides {
        Some(overrides) => Configuration::default().merged(overrides),
        None => Configuration::default(),
    }
}

/// Parse a JSON option bag and merge it onto the default configuration.
pub fn resolve_configuration_json(json: &str) -> Result<Configuration> {
    let overrides = ConfigOverrides::from_json(json)?;
    Ok(resolve_configuration(Some(&overrides)))
}

// ============================================================================
// Metrics
// ============================================================================

/// Counts produced by the metrics calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricsResult {
    pub paragraphs: usize,
    pub sentences: usize,
    pub words: usize,
    pub characters: usize,
    /// Code points of the raw, unprocessed text
    pub all: usize,
}

// ============================================================================
// Frequencies
// ============================================================================

/// Word to occurrence count
pub type FrequencyMap = FxHashMap<String, usize>;

/// Occurrence counts for one snapshot of text.
///
/// `max_frequency` is the largest value in `counts`; the ranking step sizes
/// its buckets from it.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Distinct words, in first-occurrence order
    pool: WordPool,
    /// Occurrences per word, indexed by pool ID
    counts: Vec<usize>,
    max_frequency: usize,
    total_words: usize,
}

impl FrequencyTable {
    /// Count every word in `words`.
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = words.into_iter();
        let mut table = Self::with_capacity(words.size_hint().0);
        for word in words {
            table.add(word);
        }
        table
    }

    /// Create an empty table with room for `capacity` distinct words
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: WordPool::with_capacity(capacity),
            counts: Vec::with_capacity(capacity),
            max_frequency: 0,
            total_words: 0,
        }
    }

    /// Record one occurrence of `word`
    pub fn add(&mut self, word: &str) {
        let id = self.pool.intern(word) as usize;
        if id == self.counts.len() {
            self.counts.push(0);
        }
        self.counts[id] += 1;
        self.total_words += 1;
        self.max_frequency = self.max_frequency.max(self.counts[id]);
    }

    /// Highest occurrence count of any word
    pub fn max_frequency(&self) -> usize {
        self.max_frequency
    }

    /// Total number of words counted
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Occurrences of `word`, if it was seen
    pub fn get(&self, word: &str) -> Option<usize> {
        self.pool.id(word).map(|id| self.counts[id as usize])
    }

    /// Iterate `(word, count)` pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.pool.iter().zip(self.counts.iter().copied())
    }

    /// Number of distinct words
    pub fn distinct_words(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_words == 0
    }

    /// Copy the table into a plain map
    pub fn to_map(&self) -> FrequencyMap {
        self.iter().map(|(word, count)| (word.to_string(), count)).collect()
    }
}

/// One ranked word
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// The top-K words of a snapshot, most frequent first.
///
/// Among words with equal counts, the one that occurs first in the text comes
/// first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyResult {
    entries: Vec<WordFrequency>,
}

impl FrequencyResult {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, word: &str, count: usize) {
        self.entries.push(WordFrequency {
            word: word.to_string(),
            count,
        });
    }

    /// Count for `word`, if it made the cut
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.word == word).map(|e| e.count)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked entries, most frequent first
    pub fn entries(&self) -> &[WordFrequency] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordFrequency> + '_ {
        self.entries.iter()
    }

    /// Copy the result into a plain map
    pub fn to_map(&self) -> FrequencyMap {
        self.entries
            .iter()
            .map(|e| (e.word.clone(), e.count))
            .collect()
    }
}

impl IntoIterator for FrequencyResult {
    type Item = WordFrequency;
    type IntoIter = std::vec::IntoIter<WordFrequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_pool() {
        let mut pool = WordPool::new();
        let id1 = pool.intern("hello");
        let id2 = pool.intern("world");
        let id3 = pool.intern("hello"); // duplicate

        assert_eq!(id1, id3);
        assert_ne!(id1, id2);
        assert_eq!(pool.get(id1), Some("hello"));
        assert_eq!(pool.id("world"), Some(id2));
        assert_eq!(pool.id("missing"), None);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec!["hello", "world"]);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_config_defaults() {
        let cfg = Configuration::default();
        assert!(!cfg.hard_returns);
        assert!(!cfg.strip_tags);
        assert!(!cfg.ignore_returns);
        assert!(cfg.ignore_zero_width);
        assert_eq!(cfg.freq_item_count, 10);
    }

    #[test]
    fn test_merge_only_touches_present_fields() {
        let overrides = ConfigOverrides::new()
            .with_hard_returns(true)
            .with_freq_item_count(3);
        let cfg = resolve_configuration(Some(&overrides));

        assert!(cfg.hard_returns);
        assert_eq!(cfg.freq_item_count, 3);
        assert!(!cfg.strip_tags);
        assert!(cfg.ignore_zero_width);
    }

    #[test]
    fn test_resolve_without_overrides() {
        assert_eq!(resolve_configuration(None), Configuration::default());
    }

    #[test]
    fn test_overrides_from_json_ignores_unknown_keys() {
        let cfg = resolve_configuration_json(
            r#"{"stripTags": true, "ignoreZeroWidth": false, "max": 99, "colour": "red"}"#,
        )
        .unwrap();

        assert!(cfg.strip_tags);
        assert!(!cfg.ignore_zero_width);
        assert_eq!(cfg.freq_item_count, 10);
    }

    #[test]
    fn test_overrides_from_json_rejects_wrong_types() {
        let err = ConfigOverrides::from_json(r#"{"hardReturns": "yes"}"#).unwrap_err();
        assert!(!err.is_binding_error());

        for json in [r#"{"freqItemCount": 2.0}"#, r#"{"stripTags": "true"}"#] {
            let err = ConfigOverrides::from_json(json).unwrap_err();
            assert!(
                matches!(err, crate::errors::TextStatsError::Serialization { .. }),
                "{json}"
            );
        }

        let overrides = ConfigOverrides::from_json(r#"{"stripTags": null}"#).unwrap();
        assert_eq!(overrides, ConfigOverrides::new());
    }

    #[test]
    fn test_config_serde_camel_case() {
        let json = serde_json::to_string(&Configuration::default()).unwrap();
        assert!(json.contains(r#""hardReturns":false"#));
        assert!(json.contains(r#""freqItemCount":10"#));
        assert!(!json.contains("max"));

        // Missing fields fall back to defaults.
        let cfg: Configuration = serde_json::from_str(r#"{"ignoreReturns": true}"#).unwrap();
        assert!(cfg.ignore_returns);
        assert!(cfg.ignore_zero_width);
    }

    #[test]
    fn test_frequency_table_counts() {
        let table = FrequencyTable::from_words(["b", "a", "b", "c", "b", "a"]);

        assert_eq!(table.total_words(), 6);
        assert_eq!(table.distinct_words(), 3);
        assert_eq!(table.max_frequency(), 3);
        assert_eq!(table.get("b"), Some(3));
        assert_eq!(table.get("a"), Some(2));
        assert_eq!(table.get("z"), None);

        let order: Vec<_> = table.iter().collect();
        assert_eq!(order, vec![("b", 3), ("a", 2), ("c", 1)]);
        assert_eq!(table.to_map().values().sum::<usize>(), 6);
    }

    #[test]
    fn test_frequency_table_presized() {
        let table = FrequencyTable::with_capacity(8);
        assert!(table.is_empty());
        assert_eq!(table.max_frequency(), 0);

        let mut table = FrequencyTable::from_words(["x"; 4]);
        table.add("y");
        assert_eq!(table.total_words(), 5);
        assert_eq!(table.distinct_words(), 2);
        assert_eq!(table.max_frequency(), 4);
    }

    #[test]
    fn test_frequency_result_accessors() {
        let mut result = FrequencyResult::with_capacity(2);
        result.push("the", 3);
        result.push("cat", 2);

        assert_eq!(result.len(), 2);
        assert_eq!(result.get("the"), Some(3));
        assert!(result.contains("cat"));
        assert!(!result.contains("dog"));
        assert_eq!(result.entries()[0].word, "the");

        let map = result.to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("cat"), Some(&2));

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"[{"word":"the","count":3},{"word":"cat","count":2}]"#
        );
    }
}
