//! UTF-16 code point decoding
//!
//! Character counts are defined over UTF-16 text: a well-formed surrogate
//! pair is one character, any other code unit (including a lone surrogate)
//! is one character on its own.

const HIGH_SURROGATE_START: u16 = 0xD800;
const HIGH_SURROGATE_END: u16 = 0xDBFF;
const LOW_SURROGATE_TAG: u16 = 0xDC00;
const SURROGATE_MASK: u16 = 0xFC00;

/// Iterator adapter turning UTF-16 code units into code points.
///
/// Unlike [`char::decode_utf16`], this never fails: unpaired surrogates are
/// passed through verbatim as their own code point value.
#[derive(Debug, Clone)]
pub struct CodePoints<I: Iterator<Item = u16>> {
    units: std::iter::Peekable<I>,
}

impl<I: Iterator<Item = u16>> CodePoints<I> {
    pub fn new(units: I) -> Self {
        Self {
            units: units.peekable(),
        }
    }
}

impl<I: Iterator<Item = u16>> Iterator for CodePoints<I> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let unit = self.units.next()?;
        if (HIGH_SURROGATE_START..=HIGH_SURROGATE_END).contains(&unit) {
            // Only consume the next unit if it completes the pair, so a
            // following high surrogate can still start its own pair.
            if let Some(&low) = self.units.peek() {
                if low & SURROGATE_MASK == LOW_SURROGATE_TAG {
                    self.units.next();
                    return Some(combine(unit, low));
                }
            }
        }
        Some(u32::from(unit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.units.size_hint();
        (lower.saturating_add(1) / 2, upper)
    }
}

#[inline]
fn combine(high: u16, low: u16) -> u32 {
    ((u32::from(high) & 0x3FF) << 10) + (u32::from(low) & 0x3FF) + 0x10000
}

/// Decode a UTF-16 buffer into code points.
pub fn decode(units: &[u16]) -> Vec<u32> {
    CodePoints::new(units.iter().copied()).collect()
}

/// Number of code points in `text`, counted over its UTF-16 encoding.
pub fn code_point_len(text: &str) -> usize {
    CodePoints::new(text.encode_utf16()).count()
}
