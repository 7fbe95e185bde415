use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use wordpack::core::dictionary::{DICTIONARY, WordTable};
use wordpack::{decode_file, encode_file, round_trip_file, Result};

#[derive(Parser)]
#[command(name = "wordpack")]
#[command(about = "Swap common English words for short escape codes, and back")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Compress a text file
    wordpack compress example_original.txt example_compressed.txt

    # Restore it
    wordpack decompress example_compressed.txt example_decompressed.txt

    # Do both and check the result matches the input
    wordpack round-trip example_original.txt

    # Show the word table
    wordpack table
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace dictionary words with their codes
    Compress {
        /// Text file to read
        input: PathBuf,
        /// File to write the coded text to
        output: PathBuf,
    },
    /// Replace codes with their dictionary words
    Decompress {
        /// Coded file to read
        input: PathBuf,
        /// File to write the restored text to
        output: PathBuf,
    },
    /// Compress, then decompress, and compare with the input
    RoundTrip {
        /// Text file to read
        input: PathBuf,
        /// Where the coded text goes
        #[arg(long, default_value = "example_compressed.txt")]
        packed: PathBuf,
        /// Where the restored text goes
        #[arg(long, default_value = "example_decompressed.txt")]
        restored: PathBuf,
    },
    /// Print the built-in word table
    Table,
}

pub fn compress(input: &Path, output: &Path) -> Result<()> {
    let report = encode_file(input, output)?;
    info!("File compressed successfully: {}", report);
    Ok(())
}

pub fn decompress(input: &Path, output: &Path) -> Result<()> {
    let report = decode_file(input, output)?;
    info!("File decompressed successfully: {}", report);
    Ok(())
}

/// returns whether the restored file matched the input
pub fn round_trip(input: &Path, packed: &Path, restored: &Path) -> Result<bool> {
    let report = round_trip_file(input, packed, restored)?;
    info!("File compressed successfully: {}", report.compress);
    info!("File decompressed successfully: {}", report.decompress);
    if report.lossless {
        info!("Restored text matches {}", input.display());
    }
    Ok(report.lossless)
}

pub fn show_table() {
    println!("{} words:", DICTIONARY.len());
    for (word, code) in DICTIONARY.entries() {
        println!("  {:<6} {}", word, code);
    }
}
