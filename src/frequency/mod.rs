//! Word frequency counting and top-K ranking
//!
//! - `analyzer`: normalization, word counting, item-count clamping
//! - `counting_sort`: O(n + max) bucket ranking

pub mod analyzer;
pub mod counting_sort;
