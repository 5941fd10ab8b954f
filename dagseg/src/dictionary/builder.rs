use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::dictionary::{DictEntry, DictKind, Dictionary, DictionaryInner, Trie, WordIdx};
use crate::errors::{DagsegError, Result};
use crate::unicode;
use crate::utils;

impl Dictionary {
    /// Creates a new instance from a reader of a frequency dictionary.
    ///
    /// Each line consists of a word and its frequency separated by a tab. Fields after the
    /// frequency are ignored. Blank lines, lines starting with `#`, and malformed lines are
    /// skipped.
    ///
    /// # Errors
    ///
    /// [`DagsegError`] is returned when the reader fails.
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let entries = load_entries(rdr, "dict", parse_frequency_line)?;
        Ok(Self::from_raw_frequencies(entries))
    }

    /// Creates a new instance from a frequency dictionary file.
    ///
    /// # Errors
    ///
    /// [`DagsegError`] is returned when the file cannot be opened or read.
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let dict = Self::from_reader(File::open(path)?)?;
        log::info!(
            "Loaded {} words from {:?} (total frequency {})",
            dict.len(),
            path,
            dict.freq_sum()
        );
        Ok(dict)
    }

    /// Creates a new instance from a reader of a stop-word dictionary.
    ///
    /// Each line is a list of decimal codepoint values separated by spaces, e.g.,
    /// `46 46 46` for `...`. Lines starting with `#` and malformed lines are skipped.
    ///
    /// # Errors
    ///
    /// [`DagsegError`] is returned when the reader fails.
    pub fn stop_words_from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let entries = load_entries(rdr, "stop_words", parse_stop_words_line)?;
        Ok(Self::from_stop_word_entries(entries))
    }

    /// Creates a new instance from a stop-word dictionary file.
    ///
    /// # Errors
    ///
    /// [`DagsegError`] is returned when the file cannot be opened or read.
    pub fn stop_words_from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let dict = Self::stop_words_from_reader(File::open(path)?)?;
        log::info!("Loaded {} stop words from {:?}", dict.len(), path);
        Ok(dict)
    }

    /// Creates a new instance from pairs of a word and its raw frequency.
    ///
    /// # Errors
    ///
    /// [`DagsegError`] is returned when a frequency is not a positive finite number.
    pub fn from_frequencies<I, W>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = (W, f64)>,
        W: AsRef<str>,
    {
        let mut entries = vec![];
        for (word, freq) in words {
            check_frequency(freq)?;
            let word = unicode::decode_codepoints(word.as_ref().as_bytes())?;
            entries.push(DictEntry::new(word, freq));
        }
        Ok(Self::from_raw_frequencies(entries))
    }

    /// Creates a new stop-word instance from codepoint sequences.
    pub fn from_stop_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Vec<u32>>,
    {
        Self::from_stop_word_entries(
            words
                .into_iter()
                .map(|word| DictEntry::new(word, 0.0))
                .collect(),
        )
    }

    /// Converts raw frequencies into log-probabilities and builds the trie.
    ///
    /// The log of the sum is computed on frequencies scaled by the largest one,
    /// so the weights stay finite even when the plain sum overflows.
    fn from_raw_frequencies(entries: Vec<DictEntry>) -> Self {
        let freq_sum: f64 = entries.iter().map(DictEntry::weight).sum();
        let max_freq = entries.iter().map(DictEntry::weight).fold(0.0, f64::max);
        let log_sum = if max_freq > 0.0 {
            let scaled_sum: f64 = entries.iter().map(|e| e.weight() / max_freq).sum();
            max_freq.ln() + scaled_sum.ln()
        } else {
            0.0
        };

        let mut kept = Vec::with_capacity(entries.len());
        let mut min_weight = f64::INFINITY;
        let mut max_weight = f64::NEG_INFINITY;
        for mut e in entries {
            let weight = e.weight().ln() - log_sum;
            if !weight.is_finite() {
                log::debug!("dict: skipped {:?} (weight {})", e.surface(), weight);
                continue;
            }
            min_weight = min_weight.min(weight);
            max_weight = max_weight.max(weight);
            e.set_weight(weight);
            kept.push(e);
        }
        if kept.is_empty() {
            return Self::build(DictKind::Frequency, kept, 0.0, 0.0, 0.0);
        }
        Self::build(
            DictKind::Frequency,
            kept,
            freq_sum,
            min_weight,
            max_weight,
        )
    }

    fn from_stop_word_entries(entries: Vec<DictEntry>) -> Self {
        Self::build(DictKind::StopWords, entries, 0.0, 0.0, 0.0)
    }

    fn build(
        kind: DictKind,
        entries: Vec<DictEntry>,
        freq_sum: f64,
        min_weight: f64,
        max_weight: f64,
    ) -> Self {
        let mut trie = Trie::new();
        for (i, e) in entries.iter().enumerate() {
            // The number of entries never exceeds the number of input bytes.
            trie.insert(e.word(), WordIdx::new(i as u32));
        }
        Self(DictionaryInner {
            kind,
            entries,
            trie,
            freq_sum,
            min_weight,
            max_weight,
        })
    }
}

fn check_frequency(freq: f64) -> Result<()> {
    if freq.is_finite() && freq > 0.0 {
        Ok(())
    } else {
        Err(DagsegError::invalid_argument(
            "freq",
            format!("frequency must be positive and finite, got {}", freq),
        ))
    }
}

/// Reads entries line by line. A line failing to parse is logged and skipped.
fn load_entries<R, F>(rdr: R, name: &'static str, parse: F) -> Result<Vec<DictEntry>>
where
    R: Read,
    F: Fn(&str) -> Result<Option<DictEntry>>,
{
    let mut entries = vec![];
    let mut num_skipped = 0;
    for (line_no, line) in utils::read_lines(BufReader::new(rdr))? {
        let Some(line) = line else {
            log::debug!("{}: skipped a non UTF-8 line (at line {})", name, line_no);
            num_skipped += 1;
            continue;
        };
        match parse(&line) {
            Ok(Some(e)) => entries.push(e),
            Ok(None) => (),
            Err(e) => {
                log::debug!("{}: skipped a line (at line {}): {}", name, line_no, e);
                num_skipped += 1;
            }
        }
    }
    if num_skipped != 0 {
        log::info!("{}: skipped {} malformed lines", name, num_skipped);
    }
    Ok(entries)
}

/// Parses a line `word\tfreq[\t...]`. Returns `None` for a blank or comment line.
fn parse_frequency_line(line: &str) -> Result<Option<DictEntry>> {
    let line = utils::trim_line(line);
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let fields: Vec<_> = utils::parse_tsv_row(line)
        .into_iter()
        .filter(|f| !f.is_empty())
        .collect();
    if fields.len() < 2 {
        return Err(DagsegError::invalid_format(
            "dict",
            format!("a line must have two fields at least, {:?}", line),
        ));
    }
    let freq: f64 = fields[1].parse()?;
    check_frequency(freq)?;
    let word = unicode::decode_codepoints(fields[0].as_bytes())?;
    Ok(Some(DictEntry::new(word, freq)))
}

/// Parses a line of space-separated decimal codepoints. Returns `None` for a comment line
/// or a line without tokens.
fn parse_stop_words_line(line: &str) -> Result<Option<DictEntry>> {
    let line = utils::trim_line(line);
    if line.starts_with('#') {
        return Ok(None);
    }
    let mut word = vec![];
    for token in line.split(' ').filter(|t| !t.is_empty()) {
        word.push(token.parse::<u32>()?);
    }
    if word.is_empty() {
        return Ok(None);
    }
    Ok(Some(DictEntry::new(word, 0.0)))
}
