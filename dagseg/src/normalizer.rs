//! Text normalization: ASCII lowercasing, stop-word removal and digit isolation.
use std::path::Path;
use std::sync::Arc;

use crate::common::MAX_WORD_LEN;
use crate::dictionary::Dictionary;
use crate::errors::Result;
use crate::sentence::{Sentence, WordRange};
use crate::word::{self, Word};

/// Stop-word dictionary held by a [`Normalizer`].
pub enum StopWords {
    /// The normalizer is the only owner.
    Owned(Dictionary),
    /// The dictionary is owned elsewhere and shared.
    Shared(Arc<Dictionary>),
}

impl StopWords {
    /// Gets the reference to the dictionary.
    #[inline(always)]
    pub fn dictionary(&self) -> &Dictionary {
        match self {
            Self::Owned(dict) => dict,
            Self::Shared(dict) => dict,
        }
    }
}

/// Normalizer removing stop words and isolating ASCII digit runs.
pub struct Normalizer {
    stop_words: Option<StopWords>,
    max_word_len: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Creates a normalizer without stop words.
    pub const fn new() -> Self {
        Self {
            stop_words: None,
            max_word_len: MAX_WORD_LEN,
        }
    }

    /// Creates a normalizer owning the stop words loaded from `path`.
    ///
    /// # Errors
    ///
    /// [`DagsegError`](crate::errors::DagsegError) is returned when the file cannot be read.
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Ok(Self::with_dictionary(Dictionary::stop_words_from_path(
            path,
        )?))
    }

    /// Creates a normalizer owning `dict`.
    pub const fn with_dictionary(dict: Dictionary) -> Self {
        Self {
            stop_words: Some(StopWords::Owned(dict)),
            max_word_len: MAX_WORD_LEN,
        }
    }

    /// Creates a normalizer sharing `dict` with other owners.
    pub const fn with_shared(dict: Arc<Dictionary>) -> Self {
        Self {
            stop_words: Some(StopWords::Shared(dict)),
            max_word_len: MAX_WORD_LEN,
        }
    }

    /// Specifies the maximum length of a stop word in codepoints.
    /// The default value is [`MAX_WORD_LEN`].
    pub const fn max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Gets the stop words.
    #[inline(always)]
    pub const fn stop_words(&self) -> Option<&StopWords> {
        self.stop_words.as_ref()
    }

    /// Normalizes `text` into words.
    ///
    /// # Errors
    ///
    /// [`DagsegError`](crate::errors::DagsegError) is returned when the text is not decodable.
    pub fn normalize(&self, text: &str) -> Result<Vec<Word>> {
        let sent = Sentence::new(text.to_ascii_lowercase())?;
        let ranges = self.normalize_range(sent.full_range());
        Ok(sent.words(&ranges))
    }

    /// Normalizes `text` into words joined by a single space.
    ///
    /// If the text is not decodable, it is returned as is.
    pub fn normalize_to_string(&self, text: &str) -> String {
        match self.normalize(text) {
            Ok(words) => word::join_words(&words),
            Err(e) => {
                log::warn!("Failed to normalize text: {}", e);
                text.to_string()
            }
        }
    }

    /// Normalizes an already lowercased and decoded range.
    pub fn normalize_range<'a>(&self, range: WordRange<'a>) -> Vec<WordRange<'a>> {
        let ranges = self.remove_stop_words(range);
        split_digits(&ranges)
    }

    /// Removes the longest stop word at each position, scanning from left to right.
    fn remove_stop_words<'a>(&self, range: WordRange<'a>) -> Vec<WordRange<'a>> {
        if range.is_empty() {
            return vec![];
        }
        let Some(stop_words) = self.stop_words.as_ref() else {
            return vec![range];
        };
        let mut dag = stop_words.dictionary().build_dag(&range, self.max_word_len);
        dag.choose_longest();

        let mut ranges = vec![];
        let mut i = 0;
        let mut j = 0;
        while i < dag.len() {
            let chosen = dag.node(i).chosen();
            if chosen.word_idx().is_some() {
                if j < i {
                    ranges.push(range.sub(j, i));
                }
                i = chosen.end() + 1;
                j = i;
            } else {
                i += 1;
            }
        }
        if j < dag.len() {
            ranges.push(range.sub(j, dag.len()));
        }
        ranges
    }
}

/// Splits each range into maximal runs of ASCII digits and of other codepoints.
fn split_digits<'a>(ranges: &[WordRange<'a>]) -> Vec<WordRange<'a>> {
    let mut results = Vec::with_capacity(ranges.len());
    for range in ranges {
        let runes = range.runes();
        if runes.is_empty() {
            continue;
        }
        let mut start = 0;
        for k in 1..runes.len() {
            if runes[k].is_ascii_digit() != runes[k - 1].is_ascii_digit() {
                results.push(range.sub(start, k));
                start = k;
            }
        }
        results.push(range.sub(start, runes.len()));
    }
    results
}
