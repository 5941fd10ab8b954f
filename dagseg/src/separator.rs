//! Splitting of text into chunks at separator characters.
use hashbrown::HashSet;

use crate::common::DEFAULT_SEPARATORS;
use crate::errors::{DagsegError, Result};
use crate::sentence::WordRange;
use crate::unicode::{self, Rune};

/// Set of separator codepoints.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Separators {
    codepoints: HashSet<u32>,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            codepoints: DEFAULT_SEPARATORS.chars().map(|c| c as u32).collect(),
        }
    }
}

impl Separators {
    /// Creates a set from the characters of `chars`.
    ///
    /// # Errors
    ///
    /// [`DagsegError`] is returned when a character appears twice.
    pub fn new(chars: &str) -> Result<Self> {
        let mut codepoints = HashSet::new();
        for c in unicode::decode_codepoints(chars.as_bytes())? {
            if !codepoints.insert(c) {
                return Err(DagsegError::invalid_argument(
                    "chars",
                    format!("duplicate separator U+{:04X}", c),
                ));
            }
        }
        Ok(Self { codepoints })
    }

    /// Checks if `codepoint` is a separator.
    #[inline(always)]
    pub fn contains(&self, codepoint: u32) -> bool {
        self.codepoints.contains(&codepoint)
    }

    /// Gets the number of separators.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    /// Checks if there are no separators.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }

    /// Splits `range` into maximal runs of non-separators.
    pub fn split<'a, 's>(&'s self, range: WordRange<'a>) -> SeparatorIter<'a, 's> {
        SeparatorIter::new(self, range)
    }
}

/// Iterator over maximal runs of non-separator codepoints.
///
/// No empty ranges are produced, and consecutive separators are skipped together.
pub struct SeparatorIter<'a, 's> {
    separators: &'s Separators,
    buffer: &'a [Rune],
    cursor: usize,
    end: usize,
}

impl<'a, 's> SeparatorIter<'a, 's> {
    /// Creates a new iterator over `range`.
    pub fn new(separators: &'s Separators, range: WordRange<'a>) -> Self {
        Self {
            separators,
            buffer: range.buffer(),
            cursor: range.start(),
            end: range.end(),
        }
    }

    #[inline(always)]
    fn is_separator(&self, i: usize) -> bool {
        self.separators.contains(self.buffer[i].codepoint())
    }
}

impl<'a, 's> Iterator for SeparatorIter<'a, 's> {
    type Item = WordRange<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.end && self.is_separator(self.cursor) {
            self.cursor += 1;
        }
        if self.cursor == self.end {
            return None;
        }
        let start = self.cursor;
        while self.cursor < self.end && !self.is_separator(self.cursor) {
            self.cursor += 1;
        }
        Some(WordRange::new(self.buffer, start, self.cursor))
    }
}
