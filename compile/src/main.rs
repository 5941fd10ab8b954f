use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use dagseg::Dictionary;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "compile",
    about = "A program to compile a text dictionary into the binary format."
)]
struct Args {
    /// Dictionary file in text.
    ///
    /// Each line is `word<TAB>frequency`, or a list of decimal codepoints
    /// separated by spaces if `--stop-words` is given.
    #[clap(short = 'i', long)]
    dict_in: PathBuf,

    /// File to which the binary dictionary is output (in zstd).
    #[clap(short = 'o', long)]
    dict_out: PathBuf,

    /// Compiles the input as a stop-word dictionary.
    #[clap(long)]
    stop_words: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    eprintln!("Compiling the dictionary...");
    let start = Instant::now();
    let dict = if args.stop_words {
        Dictionary::stop_words_from_path(&args.dict_in)?
    } else {
        Dictionary::from_path(&args.dict_in)?
    };
    eprintln!(
        "{} words, {} seconds",
        dict.len(),
        start.elapsed().as_secs_f64()
    );

    eprintln!("Writing the dictionary in zstd...: {:?}", &args.dict_out);
    let mut f = zstd::Encoder::new(File::create(args.dict_out)?, 19)?;
    dict.write(&mut f)?;
    f.finish()?;

    Ok(())
}
