use std::error::Error;
use std::fs::File;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use dagseg::word::join_words;
use dagseg::{Analyzer, Dictionary, MmMode, SegmentConfig};

use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Forward,
    Backward,
    Bidirectional,
}

impl From<Mode> for MmMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Forward => Self::Forward,
            Mode::Backward => Self::Backward,
            Mode::Bidirectional => Self::Bidirectional,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "tokenize",
    about = "A program to normalize and segment lines from stdin."
)]
struct Args {
    /// Dictionary of a language, given as `LANG=PATH`. It can be repeated.
    #[clap(short = 'd', long = "dict", value_parser = parse_lang_path, required = true)]
    dicts: Vec<(String, PathBuf)>,

    /// Stop-word dictionary.
    #[clap(short = 's', long)]
    stop_words: Option<PathBuf>,

    /// Reads the dictionaries in the binary format output by `compile` (in zstd).
    #[clap(short = 'c', long)]
    compiled: bool,

    /// Language of the input lines.
    #[clap(short = 'l', long, default_value = "cn")]
    lang: String,

    /// Variant of maximum matching.
    #[clap(short = 'm', long, value_enum, default_value = "bidirectional")]
    mm_mode: Mode,

    /// Maximum length of a dictionary match.
    #[clap(long, default_value_t = dagseg::common::MAX_WORD_LEN)]
    max_word_len: usize,

    /// Separator characters.
    #[clap(long)]
    separators: Option<String>,

    /// Language whose non-ASCII runs are kept unsegmented, e.g., `id`. It can be repeated.
    #[clap(long = "non-ascii-passthrough", value_name = "LANG")]
    non_ascii_passthrough: Vec<String>,
}

fn parse_lang_path(arg: &str) -> Result<(String, PathBuf), String> {
    match arg.split_once('=') {
        Some((lang, path)) if !lang.is_empty() && !path.is_empty() => {
            Ok((lang.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected LANG=PATH, got {:?}", arg)),
    }
}

fn read_compiled(path: &Path) -> Result<Dictionary, Box<dyn Error>> {
    let reader = zstd::Decoder::new(File::open(path)?)?;
    Ok(Dictionary::read(reader)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = SegmentConfig::new()
        .max_word_len(args.max_word_len)
        .mm_mode(args.mm_mode.into());
    if let Some(separators) = &args.separators {
        config = config.separators(separators)?;
    }
    for lang in args.non_ascii_passthrough {
        config = config.non_ascii_passthrough(lang);
    }
    let mut analyzer = Analyzer::new(config);

    eprintln!("Loading the dictionaries...");
    for (lang, path) in &args.dicts {
        if args.compiled {
            analyzer.insert_dictionary(lang.as_str(), read_compiled(path)?);
        } else {
            analyzer.add_dictionary(lang.as_str(), path)?;
        }
    }
    if let Some(path) = &args.stop_words {
        if args.compiled {
            analyzer.set_stop_words(read_compiled(path)?);
        } else {
            analyzer.add_stop_words(path)?;
        }
    }
    analyzer.init();
    eprintln!("Ready to tokenize :)");

    #[allow(clippy::significant_drop_in_scrutinee)]
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        println!("normalize: {}", analyzer.normalize_to_string(&line));
        println!("mmseg: {}", join_words(&analyzer.cut(&line, &args.lang)));
        println!("mpseg: {}", join_words(&analyzer.cut_mp(&line, &args.lang)));
    }

    Ok(())
}
