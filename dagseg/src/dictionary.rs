//! Dictionary for segmentation.
pub(crate) mod builder;
pub(crate) mod entry;
pub(crate) mod trie;
pub(crate) mod word_idx;

use std::io::{Read, Write};

use bincode::{Decode, Encode};

use crate::common;
use crate::dag::{Candidate, Dag};
use crate::errors::{DagsegError, Result};
use crate::sentence::WordRange;
use crate::unicode;
use trie::Trie;

pub use entry::DictEntry;
pub use word_idx::WordIdx;

/// Magic bytes at the head of an exported dictionary.
pub const MODEL_MAGIC: &[u8] = b"DagsegDictionary 0.1\n";

/// Type of a dictionary.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Decode, Encode)]
#[repr(u8)]
pub enum DictKind {
    /// Words with log-probability weights.
    Frequency,
    /// Stop words, all weighted 0.
    StopWords,
}

impl Default for DictKind {
    fn default() -> Self {
        Self::Frequency
    }
}

/// Inner data of [`Dictionary`].
#[derive(Decode, Encode)]
struct DictionaryInner {
    kind: DictKind,
    entries: Vec<DictEntry>,
    trie: Trie,
    freq_sum: f64,
    min_weight: f64,
    max_weight: f64,
}

/// Dictionary for segmentation.
///
/// A dictionary is immutable once built, so it can be shared by any number of readers.
pub struct Dictionary(DictionaryInner);

impl Dictionary {
    /// Gets the type of the dictionary.
    #[inline(always)]
    pub const fn kind(&self) -> DictKind {
        self.0.kind
    }

    /// Gets the number of entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.entries.len()
    }

    /// Checks if the dictionary has no entries.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.entries.is_empty()
    }

    /// Gets all entries in the loading order.
    #[inline(always)]
    pub fn entries(&self) -> &[DictEntry] {
        &self.0.entries
    }

    /// Gets the entry of `word_idx`.
    #[inline(always)]
    pub fn entry(&self, word_idx: WordIdx) -> &DictEntry {
        &self.0.entries[word_idx.word_id() as usize]
    }

    /// Gets the sum of the raw frequencies. It is 0 for stop words.
    ///
    /// The sum may be infinite for huge frequencies; the weights are still finite.
    #[inline(always)]
    pub const fn freq_sum(&self) -> f64 {
        self.0.freq_sum
    }

    /// Gets the smallest weight, used as the penalty of unknown codepoints.
    #[inline(always)]
    pub const fn min_weight(&self) -> f64 {
        self.0.min_weight
    }

    /// Gets the largest weight.
    #[inline(always)]
    pub const fn max_weight(&self) -> f64 {
        self.0.max_weight
    }

    /// Looks up the exact codepoint sequence.
    pub fn find_exact<I>(&self, word: I) -> Option<&DictEntry>
    where
        I: IntoIterator<Item = u32>,
    {
        self.0.trie.find_exact(word).map(|idx| self.entry(idx))
    }

    /// Checks if `word` is an entry of the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        match unicode::decode_codepoints(word.as_bytes()) {
            Ok(word) => self.find_exact(word).is_some(),
            Err(e) => {
                log::debug!("{}", e);
                false
            }
        }
    }

    /// Builds the DAG of matches in `range`, each at most `max_len` codepoints long.
    #[inline(always)]
    pub fn build_dag(&self, range: &WordRange, max_len: usize) -> Dag {
        self.0.trie.find_dag(range.runes(), max_len)
    }

    /// Gets the score of taking the edge `candidate`.
    ///
    /// An unknown codepoint costs [`Dictionary::min_weight()`].
    #[inline(always)]
    pub fn edge_score(&self, candidate: &Candidate) -> f64 {
        candidate
            .word_idx()
            .map_or(self.0.min_weight, |idx| self.entry(idx).weight())
    }

    /// Exports the dictionary data.
    ///
    /// # Errors
    ///
    /// When bincode generates an error, it will be returned as is.
    pub fn write<W>(&self, mut wtr: W) -> Result<usize>
    where
        W: Write,
    {
        wtr.write_all(MODEL_MAGIC)?;
        let num_bytes =
            bincode::encode_into_std_write(&self.0, &mut wtr, common::bincode_config())?;
        Ok(MODEL_MAGIC.len() + num_bytes)
    }

    /// Creates a dictionary from a reader of the data exported by [`Dictionary::write()`].
    ///
    /// # Errors
    ///
    /// When bincode generates an error, it will be returned as is.
    /// [`DagsegError`] is also returned when the magic bytes mismatch or
    /// the data is inconsistent.
    pub fn read<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut magic = [0; MODEL_MAGIC.len()];
        rdr.read_exact(&mut magic)?;
        if magic != MODEL_MAGIC {
            return Err(DagsegError::invalid_format(
                "rdr",
                "the magic number of the input dictionary mismatches",
            ));
        }
        let data: DictionaryInner =
            bincode::decode_from_std_read(&mut rdr, common::bincode_config())?;
        if !data.trie.verify(data.entries.len()) {
            return Err(DagsegError::invalid_format(
                "rdr",
                "the trie refers to a missing entry",
            ));
        }
        Ok(Self(data))
    }
}
