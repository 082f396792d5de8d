//! # rapid_textstats
//!
//! Live text statistics: paragraph, sentence, word and character counts plus
//! a linear-time ranking of the most frequent words.
//!
//! ## Features
//!
//! - **Fast**: one pass to count, counting-sort ranking in O(n + max frequency)
//! - **Unicode-aware counts**: characters are counted as code points over
//!   UTF-16, so a surrogate pair is one character
//! - **Live**: bind a [`TextBuffer`] to a [`SubscriptionRegistry`] and get
//!   fresh results after every edit
//!
//! ## Quick start
//!
//! ```
//! use rapid_textstats::{compute_frequencies, compute_metrics, Configuration};
//!
//! let config = Configuration::default().with_freq_item_count(2);
//! let text = "the cat sat on the mat. the cat ran.";
//!
//! let metrics = compute_metrics(text, &config);
//! assert_eq!(metrics.words, 9);
//! assert_eq!(metrics.sentences, 2);
//!
//! let top = compute_frequencies(text, &config).unwrap();
//! assert_eq!(top.get("the"), Some(3));
//! assert_eq!(top.len(), 2);
//! ```

#[macro_use]
mod trace;

pub mod errors;
pub mod frequency;
pub mod metrics;
pub mod nlp;
pub mod registry;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextStatsError};
pub use types::{
    resolve_configuration, resolve_configuration_json, ConfigOverrides, Configuration,
    FrequencyMap, FrequencyResult, FrequencyTable, MetricsResult, WordFrequency, WordPool,
    DEFAULT_FREQ_ITEM_COUNT,
};

// Re-export main functionality
pub use frequency::analyzer::{word_frequencies, FrequencyAnalyzer};
pub use frequency::counting_sort::counting_sort;
pub use metrics::MetricsCalculator;
pub use nlp::decode::{code_point_len, decode, CodePoints};
pub use nlp::normalize::strip;
pub use nlp::tokenizer::Tokenizer;
pub use registry::{BindingKind, SubscriptionRegistry};
pub use source::{ChangeHandler, SubscriptionHandle, TextBuffer, TextSource};

/// Count paragraphs, sentences, words and characters of `source`.
pub fn compute_metrics<S: TextSource + ?Sized>(source: &S, config: &Configuration) -> MetricsResult {
    metrics::count_metrics(source, config)
}

/// Rank the most frequent words of `source`; `None` if it holds no words.
pub fn compute_frequencies<S: TextSource + ?Sized>(
    source: &S,
    config: &Configuration,
) -> Option<FrequencyResult> {
    frequency::analyzer::compute_frequencies(source, config)
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
