//! Entry point wiring dictionaries, the normalizer and the segmenters together.
use std::path::Path;
use std::sync::Arc;

use crate::config::SegmentConfig;
use crate::dictionary::Dictionary;
use crate::errors::Result;
use crate::normalizer::Normalizer;
use crate::registry::Registry;
use crate::segmenter::{MmMode, MmSegmenter, MpSegmenter};
use crate::word::{self, Word};

struct Segmenters {
    normalizer: Arc<Normalizer>,
    mm: MmSegmenter,
    mp: MpSegmenter,
}

/// Text analyzer.
///
/// Dictionaries and stop words are registered first, and then [`Analyzer::init()`]
/// builds the normalizer and the segmenters sharing them.
///
/// # Examples
///
/// ```
/// use dagseg::{Analyzer, Dictionary};
///
/// let dict = Dictionary::from_frequencies([("new", 5.0), ("york", 5.0), ("newyork", 1.0)])?;
///
/// let mut analyzer = Analyzer::default();
/// analyzer.insert_dictionary("en", dict);
/// analyzer.init();
///
/// let words = analyzer.cut_mp("NewYork", "en");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "new");
/// assert_eq!(words[1].text(), "york");
/// # Ok::<(), dagseg::errors::DagsegError>(())
/// ```
pub struct Analyzer {
    config: SegmentConfig,
    registry: Registry,
    stop_words: Option<Arc<Dictionary>>,
    segmenters: Option<Segmenters>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(SegmentConfig::default())
    }
}

impl Analyzer {
    /// Creates a new instance with `config`.
    pub fn new(config: SegmentConfig) -> Self {
        Self {
            config,
            registry: Registry::new(),
            stop_words: None,
            segmenters: None,
        }
    }

    /// Loads the frequency dictionary in `path` for the language `lang`.
    ///
    /// # Errors
    ///
    /// [`DagsegError`](crate::errors::DagsegError) is returned when the file cannot be read.
    pub fn add_dictionary<S, P>(&mut self, lang: S, path: P) -> Result<()>
    where
        S: Into<String>,
        P: AsRef<Path>,
    {
        let dict = Dictionary::from_path(path)?;
        self.insert_dictionary(lang, dict);
        Ok(())
    }

    /// Registers the prebuilt `dict` for the language `lang`.
    ///
    /// The first dictionary registered for a language is kept.
    /// [`Analyzer::init()`] must be called again to make the dictionary visible.
    pub fn insert_dictionary<S>(&mut self, lang: S, dict: Dictionary)
    where
        S: Into<String>,
    {
        let lang = lang.into();
        if self.registry.contains(&lang) {
            log::warn!("A dictionary is already registered for {:?}; ignored", lang);
            return;
        }
        self.registry.insert(lang, Arc::new(dict));
        self.segmenters = None;
    }

    /// Loads the stop words in `path`, replacing the current ones.
    ///
    /// # Errors
    ///
    /// [`DagsegError`](crate::errors::DagsegError) is returned when the file cannot be read.
    pub fn add_stop_words<P>(&mut self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let dict = Dictionary::stop_words_from_path(path)?;
        self.set_stop_words(dict);
        Ok(())
    }

    /// Sets the prebuilt stop-word dictionary, replacing the current one.
    pub fn set_stop_words(&mut self, dict: Dictionary) {
        self.stop_words = Some(Arc::new(dict));
        self.segmenters = None;
    }

    /// Builds the normalizer and the segmenters over the registered dictionaries.
    pub fn init(&mut self) {
        let registry = Arc::new(self.registry.clone());
        let normalizer = match self.stop_words.as_ref() {
            Some(dict) => Normalizer::with_shared(Arc::clone(dict)),
            None => Normalizer::new(),
        };
        let normalizer = Arc::new(normalizer.max_word_len(self.config.max_word_len));
        let mm = MmSegmenter::new(
            self.config.clone(),
            Arc::clone(&registry),
            Some(Arc::clone(&normalizer)),
        );
        let mp = MpSegmenter::new(self.config.clone(), registry, Some(Arc::clone(&normalizer)));
        log::info!(
            "Initialized the analyzer with {} languages (stop words: {})",
            self.registry.len(),
            self.stop_words.as_ref().map_or(0, |d| d.len()),
        );
        self.segmenters = Some(Segmenters { normalizer, mm, mp });
    }

    /// Checks if [`Analyzer::init()`] has been called after the last change.
    #[inline(always)]
    pub const fn is_initialized(&self) -> bool {
        self.segmenters.is_some()
    }

    /// Gets the settings.
    #[inline(always)]
    pub const fn config(&self) -> &SegmentConfig {
        &self.config
    }

    /// Gets the registered dictionaries.
    #[inline(always)]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Checks if `lang` has a dictionary, i.e., if its text is segmented.
    pub fn needs_segmentation(&self, lang: &str) -> bool {
        self.registry.contains(lang)
    }

    /// Normalizes `text` into words.
    ///
    /// Undecodable text is returned as one lowercased word.
    pub fn normalize(&self, text: &str) -> Vec<Word> {
        let Some(segmenters) = self.segmenters() else {
            return word::single_word(text.to_ascii_lowercase());
        };
        segmenters.normalizer.normalize(text).unwrap_or_else(|e| {
            log::warn!("Failed to normalize text: {}", e);
            word::single_word(text.to_ascii_lowercase())
        })
    }

    /// Normalizes `text` into words joined by a single space.
    pub fn normalize_to_string(&self, text: &str) -> String {
        match self.segmenters() {
            Some(segmenters) => segmenters.normalizer.normalize_to_string(text),
            None => text.to_ascii_lowercase(),
        }
    }

    /// Segments `text` of the language `lang` by maximum matching in the configured mode.
    ///
    /// Text of an unregistered language is returned as one lowercased word.
    pub fn cut(&self, text: &str, lang: &str) -> Vec<Word> {
        self.cut_with_mode(text, lang, self.config.mm_mode)
    }

    /// Segments `text` of the language `lang` by maximum matching in `mode`.
    pub fn cut_with_mode(&self, text: &str, lang: &str, mode: MmMode) -> Vec<Word> {
        match self.segmenters() {
            Some(segmenters) => segmenters.mm.cut_with_mode(text, lang, mode),
            None => word::single_word(text.to_ascii_lowercase()),
        }
    }

    /// Segments `text` of the language `lang` by maximizing the log-probability.
    ///
    /// Text of an unregistered language is returned as one lowercased word.
    pub fn cut_mp(&self, text: &str, lang: &str) -> Vec<Word> {
        match self.segmenters() {
            Some(segmenters) => segmenters.mp.cut(text, lang),
            None => word::single_word(text.to_ascii_lowercase()),
        }
    }

    fn segmenters(&self) -> Option<&Segmenters> {
        if self.segmenters.is_none() {
            log::warn!("The analyzer is used before init(); the text is not segmented");
        }
        self.segmenters.as_ref()
    }
}
