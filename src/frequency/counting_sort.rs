//! Top-K selection by counting sort
//!
//! Word counts are small integers bounded by the table's highest frequency,
//! so ranking buckets words by count instead of comparing them. Runs in
//! O(n + max_frequency).

use crate::types::{FrequencyResult, FrequencyTable};

/// Select the `limit` most frequent words of `table`.
///
/// Strategy:
/// 1. Allocate one bucket per count `0..=max_frequency`
/// 2. Drop each distinct word into the bucket for its count, in
///    first-occurrence order
/// 3. Drain buckets from `max_frequency` down to 1 until `limit` words are
///    collected
///
/// Equal counts keep first-occurrence order. The result holds
/// `min(limit, distinct words)` entries.
pub fn counting_sort(table: &FrequencyTable, limit: usize) -> FrequencyResult {
    let top = table.max_frequency();
    let mut buckets: Vec<Vec<&str>> = vec![Vec::new(); top + 1];
    for (word, count) in table.iter() {
        buckets[count].push(word);
    }

    let mut result = FrequencyResult::with_capacity(limit.min(table.distinct_words()));
    if limit == 0 {
        return result;
    }

    'descend: for count in (1..=top).rev() {
        for word in &buckets[count] {
            result.push(word, count);
            if result.len() == limit {
                break 'descend;
            }
        }
    }

    result
}
