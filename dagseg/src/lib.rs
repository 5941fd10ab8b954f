//! # Dagseg
//!
//! Dagseg is a dictionary-driven word segmenter.
//! It matches a frequency dictionary against the input with a codepoint trie,
//! builds a DAG of the matches, and resolves it by greedy longest matching
//! (forward, backward or bidirectional) or by maximizing the log-probability.
//!
//! ## Examples
//!
//! ```
//! use dagseg::{Analyzer, Dictionary, MmMode};
//!
//! let dict = Dictionary::from_frequencies([
//!     ("東京", 10.0),
//!     ("東京都", 5.0),
//!     ("京都", 10.0),
//!     ("に", 20.0),
//!     ("行く", 10.0),
//! ])?;
//!
//! let mut analyzer = Analyzer::default();
//! analyzer.insert_dictionary("ja", dict);
//! analyzer.init();
//!
//! let words = analyzer.cut_with_mode("東京都に行く", "ja", MmMode::Forward);
//! let surfaces: Vec<_> = words.iter().map(|w| w.text()).collect();
//! assert_eq!(surfaces, vec!["東京都", "に", "行く"]);
//!
//! assert_eq!(words[1].range_char(), 3..4);
//! assert_eq!(words[1].range_byte(), 9..12);
//! # Ok::<(), dagseg::errors::DagsegError>(())
//! ```
#![warn(missing_docs)]

#[cfg(target_pointer_width = "16")]
compile_error!("`target_pointer_width` must be larger than or equal to 32");

pub mod analyzer;
pub mod common;
pub mod config;
pub mod dag;
pub mod dictionary;
pub mod errors;
pub mod normalizer;
pub mod registry;
pub mod segmenter;
pub mod sentence;
pub mod separator;
pub mod unicode;
pub mod word;
mod utils;


pub use analyzer::Analyzer;
pub use config::SegmentConfig;
pub use dictionary::Dictionary;
pub use normalizer::Normalizer;
pub use registry::Registry;
pub use segmenter::{MmMode, MmSegmenter, MpSegmenter};
pub use word::Word;
