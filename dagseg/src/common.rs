//! Common settings in Dagseg.

use bincode::config::{self, Fixint, LittleEndian};

/// The default maximum length of a dictionary match in codepoints.
pub const MAX_WORD_LEN: usize = 50;

/// The default separator characters splitting text into segmentation chunks.
pub const DEFAULT_SEPARATORS: &str = " \n\t-";

/// Route weight assigned before any candidate of a DAG node is scored.
pub(crate) const MIN_ROUTE_WEIGHT: f64 = -3.14e100;

pub(crate) fn bincode_config() -> config::Configuration<LittleEndian, Fixint> {
    config::standard()
        .with_little_endian()
        .with_fixed_int_encoding()
}
