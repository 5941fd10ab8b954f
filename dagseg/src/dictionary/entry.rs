use bincode::{Decode, Encode};

/// Entry of a dictionary.
///
/// In a frequency dictionary, the weight is the log-probability `ln(freq / total)`.
/// In a stop-word dictionary, the weight is always 0.
#[derive(Clone, Debug, PartialEq, Decode, Encode)]
pub struct DictEntry {
    word: Vec<u32>,
    weight: f64,
}

impl DictEntry {
    /// Creates a new entry.
    #[inline(always)]
    pub fn new(word: Vec<u32>, weight: f64) -> Self {
        Self { word, weight }
    }

    /// Gets the codepoints of the word.
    #[inline(always)]
    pub fn word(&self) -> &[u32] {
        &self.word
    }

    /// Gets the number of codepoints of the word.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Checks if the word has no codepoints.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Gets the weight.
    #[inline(always)]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    #[inline(always)]
    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Gets the word as a string, replacing codepoints that are not Unicode scalar values.
    pub fn surface(&self) -> String {
        self.word
            .iter()
            .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}
