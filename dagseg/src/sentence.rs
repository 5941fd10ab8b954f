//! Decoded text and ranges over it.
use std::ops::Range;

use crate::unicode::{self, DecodeError, Rune};
use crate::word::Word;

/// Input text together with its decoded codepoints.
#[derive(Default, Clone, Debug)]
pub struct Sentence {
    input: String,
    runes: Vec<Rune>,
}

impl Sentence {
    /// Decodes `input`.
    pub fn new<S>(input: S) -> Result<Self, DecodeError>
    where
        S: Into<String>,
    {
        let input = input.into();
        let runes = unicode::decode(input.as_bytes())?;
        Ok(Self { input, runes })
    }

    /// Gets the input text.
    #[inline(always)]
    pub fn raw(&self) -> &str {
        &self.input
    }

    /// Gets the decoded buffer.
    #[inline(always)]
    pub fn runes(&self) -> &[Rune] {
        &self.runes
    }

    /// Gets the number of codepoints.
    #[inline(always)]
    pub fn len_char(&self) -> usize {
        self.runes.len()
    }

    /// Checks if the sentence has no codepoints.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// Gets the range covering the whole sentence.
    #[inline(always)]
    pub fn full_range(&self) -> WordRange<'_> {
        WordRange::new(&self.runes, 0, self.runes.len())
    }

    /// Materializes a range over this sentence.
    pub fn word(&self, range: &WordRange) -> Word {
        debug_assert!(std::ptr::eq(range.buffer.as_ptr(), self.runes.as_ptr()));
        let bytes = range.range_byte();
        Word::new(
            self.input[bytes.clone()].to_string(),
            bytes.start,
            range.start,
            range.len(),
        )
    }

    /// Materializes ranges over this sentence, in order.
    pub fn words<'a, I>(&self, ranges: I) -> Vec<Word>
    where
        I: IntoIterator<Item = &'a WordRange<'a>>,
    {
        ranges.into_iter().map(|r| self.word(r)).collect()
    }
}

/// Span of positions `start..end` in a decoded buffer.
///
/// The range borrows the buffer, so it never outlives the decoded text.
#[derive(Clone, Copy, Debug)]
pub struct WordRange<'a> {
    buffer: &'a [Rune],
    start: usize,
    end: usize,
}

impl<'a> WordRange<'a> {
    /// Creates a new range over `buffer`.
    #[inline(always)]
    pub fn new(buffer: &'a [Rune], start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= buffer.len());
        Self { buffer, start, end }
    }

    /// Gets the first position.
    #[inline(always)]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Gets the position next to the last one.
    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Gets the number of positions.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Checks if the range has no positions.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Gets the whole decoded buffer the range points into.
    #[inline(always)]
    pub const fn buffer(&self) -> &'a [Rune] {
        self.buffer
    }

    /// Gets the codepoint records in the range.
    #[inline(always)]
    pub fn runes(&self) -> &'a [Rune] {
        &self.buffer[self.start..self.end]
    }

    /// Creates a range over the same buffer; `start` and `end` are relative to this range.
    #[inline(always)]
    pub fn sub(&self, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= self.len());
        Self::new(self.buffer, self.start + start, self.start + end)
    }

    /// Checks if every codepoint is ASCII.
    pub fn is_all_ascii(&self) -> bool {
        self.runes().iter().all(Rune::is_ascii)
    }

    /// Checks if every codepoint is an ASCII digit.
    pub fn is_all_digit(&self) -> bool {
        self.runes().iter().all(Rune::is_ascii_digit)
    }

    /// Gets the byte range in the source text.
    pub fn range_byte(&self) -> Range<usize> {
        match (self.runes().first(), self.runes().last()) {
            (Some(first), Some(last)) => {
                first.byte_offset()..last.byte_offset() + last.byte_len()
            }
            _ => {
                let pos = self
                    .buffer
                    .get(self.start)
                    .map_or_else(|| self.buffer_byte_len(), Rune::byte_offset);
                pos..pos
            }
        }
    }

    fn buffer_byte_len(&self) -> usize {
        self.buffer
            .last()
            .map_or(0, |r| r.byte_offset() + r.byte_len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence() {
        let sent = Sentence::new("自然ab").unwrap();
        assert_eq!(sent.len_char(), 4);
        let range = sent.full_range();
        assert_eq!(range.range_byte(), 0..8);
        let sub = range.sub(1, 3);
        assert_eq!(sub.start(), 1);
        assert_eq!(sub.end(), 3);
        let word = sent.word(&sub);
        assert_eq!(word.text(), "然a");
        assert_eq!(word.range_byte(), 3..7);
        assert_eq!(word.range_char(), 1..3);
    }

    #[test]
    fn test_predicates() {
        let sent = Sentence::new("12a3").unwrap();
        let range = sent.full_range();
        assert!(range.is_all_ascii());
        assert!(!range.is_all_digit());
        assert!(range.sub(0, 2).is_all_digit());
        assert!(range.sub(3, 4).is_all_digit());

        let sent = Sentence::new("1中").unwrap();
        assert!(!sent.full_range().is_all_ascii());
    }

    #[test]
    fn test_empty() {
        let sent = Sentence::new("").unwrap();
        assert!(sent.is_empty());
        assert!(sent.full_range().is_empty());
        assert_eq!(sent.full_range().range_byte(), 0..0);
    }
}
