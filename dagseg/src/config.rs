//! Settings shared by the segmenters.
use hashbrown::HashSet;

use crate::common::MAX_WORD_LEN;
use crate::errors::Result;
use crate::segmenter::MmMode;
use crate::separator::Separators;

/// Settings of segmentation.
#[derive(Clone, Debug)]
pub struct SegmentConfig {
    pub(crate) max_word_len: usize,
    pub(crate) separators: Separators,
    pub(crate) non_ascii_passthrough: HashSet<String>,
    pub(crate) mm_mode: MmMode,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentConfig {
    /// Creates a new instance with the default settings.
    pub fn new() -> Self {
        Self {
            max_word_len: MAX_WORD_LEN,
            separators: Separators::default(),
            non_ascii_passthrough: HashSet::new(),
            mm_mode: MmMode::Bidirectional,
        }
    }

    /// Specifies the maximum length of a dictionary match in codepoints.
    /// The default value is [`MAX_WORD_LEN`].
    ///
    /// With `1`, every codepoint becomes its own word.
    pub const fn max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Replaces the separators with the characters of `chars`.
    ///
    /// # Errors
    ///
    /// [`DagsegError`](crate::errors::DagsegError) is returned when a character appears twice.
    pub fn separators(mut self, chars: &str) -> Result<Self> {
        self.separators = Separators::new(chars)?;
        Ok(self)
    }

    /// Leaves ranges with non-ASCII codepoints unsegmented for the language `lang`.
    pub fn non_ascii_passthrough<S>(mut self, lang: S) -> Self
    where
        S: Into<String>,
    {
        self.non_ascii_passthrough.insert(lang.into());
        self
    }

    /// Specifies the variant used by [`Analyzer::cut()`](crate::Analyzer::cut).
    /// The default value is [`MmMode::Bidirectional`].
    pub const fn mm_mode(mut self, mode: MmMode) -> Self {
        self.mm_mode = mode;
        self
    }

    /// Gets the maximum length of a dictionary match.
    #[inline(always)]
    pub const fn word_len_limit(&self) -> usize {
        self.max_word_len
    }

    /// Gets the separators.
    #[inline(always)]
    pub const fn separator_set(&self) -> &Separators {
        &self.separators
    }

    /// Gets the variant used by [`Analyzer::cut()`](crate::Analyzer::cut).
    #[inline(always)]
    pub const fn default_mm_mode(&self) -> MmMode {
        self.mm_mode
    }

    /// Checks if non-ASCII ranges of `lang` are left unsegmented.
    #[inline(always)]
    pub fn is_passthrough(&self, lang: &str) -> bool {
        self.non_ascii_passthrough.contains(lang)
    }
}
