//! Dictionary-driven segmenters.
//!
//! Both segmenters share the same pipeline:
//!
//!  1. The text is ASCII-lowercased and decoded.
//!  2. If a [`Normalizer`] is given, stop words are removed and digit runs are isolated.
//!     Digit-only ranges are emitted as they are.
//!  3. Each remaining range is split at separators into chunks.
//!  4. A DAG of dictionary matches is built for each chunk and resolved into words.
mod mm;
mod mp;

use std::sync::Arc;

pub use mm::{MmMode, MmSegmenter};
pub use mp::MpSegmenter;

use crate::config::SegmentConfig;
use crate::dag::Dag;
use crate::dictionary::Dictionary;
use crate::normalizer::Normalizer;
use crate::registry::Registry;
use crate::sentence::{Sentence, WordRange};
use crate::word::{self, Word};

/// Spans `(start, end)` with exclusive ends, relative to a chunk.
type Spans = Vec<(usize, usize)>;

/// State shared by the segmenters.
pub(crate) struct Pipeline {
    config: SegmentConfig,
    registry: Arc<Registry>,
    normalizer: Option<Arc<Normalizer>>,
}

impl Pipeline {
    pub(crate) fn new(
        config: SegmentConfig,
        registry: Arc<Registry>,
        normalizer: Option<Arc<Normalizer>>,
    ) -> Self {
        Self {
            config,
            registry,
            normalizer,
        }
    }

    #[inline(always)]
    pub(crate) const fn config(&self) -> &SegmentConfig {
        &self.config
    }

    /// Segments `text` with the dictionary of `lang`, resolving each chunk's DAG by `resolve`.
    ///
    /// Text of an unregistered language or undecodable text is returned as one lowercased
    /// word.
    pub(crate) fn cut<F>(&self, text: &str, lang: &str, resolve: F) -> Vec<Word>
    where
        F: Fn(&Dictionary, Dag) -> Spans,
    {
        let lowered = text.to_ascii_lowercase();
        let Some(dict) = self.registry.get(lang) else {
            log::warn!("No dictionary is registered for {:?}", lang);
            return word::single_word(lowered);
        };
        let sent = match Sentence::new(lowered.as_str()) {
            Ok(sent) => sent,
            Err(e) => {
                log::warn!("Failed to decode text: {}", e);
                return word::single_word(lowered);
            }
        };

        let mut ranges = vec![];
        match self.normalizer.as_deref() {
            Some(normalizer) => {
                let passthrough = self.config.is_passthrough(lang);
                for range in normalizer.normalize_range(sent.full_range()) {
                    if range.is_all_digit() || (passthrough && !range.is_all_ascii()) {
                        ranges.push(range);
                    } else {
                        self.cut_range(dict, range, &resolve, &mut ranges);
                    }
                }
            }
            None => self.cut_range(dict, sent.full_range(), &resolve, &mut ranges),
        }
        sent.words(&ranges)
    }

    fn cut_range<'a, F>(
        &self,
        dict: &Dictionary,
        range: WordRange<'a>,
        resolve: &F,
        ranges: &mut Vec<WordRange<'a>>,
    ) where
        F: Fn(&Dictionary, Dag) -> Spans,
    {
        // Normalized ranges are split at separators too, so separators never form words.
        for chunk in self.config.separators.split(range) {
            let dag = dict.build_dag(&chunk, self.config.max_word_len);
            for (start, end) in resolve(dict, dag) {
                ranges.push(chunk.sub(start, end));
            }
        }
    }
}
