//! Text handling shared by the counters
//!
//! - `decode`: UTF-16 code point decoding for character counts
//! - `normalize`: tag / zero-width stripping and trimming
//! - `tokenizer`: whitespace and punctuation rules for word splitting

pub mod decode;
pub mod normalize;
pub mod tokenizer;
