use std::fs::File;
use std::io;
use std::io::{BufWriter, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::core::codec::{Decoder, Encoder};
use crate::core::dictionary::DICTIONARY;

pub mod core;
pub mod error;
pub mod report;
mod util;

pub use error::{CodecError, Result};
pub use report::{CodecReport, Direction, RoundTripReport};

/// encode a string with the built-in dictionary
/// # Example
///
/// ```
/// use wordpack::{decode_string, encode_string};
/// let encoding = encode_string("Alice said that the cat was out");
/// assert_eq!("_n _p _f _a cat _l _8", encoding);
/// assert_eq!("Alice said that the cat was out", decode_string(&encoding));
/// ```
pub fn encode_string(str: &str) -> String {
    Encoder::from_table(&*DICTIONARY).encode(str)
}

/// decode a string with the built-in dictionary
/// text that holds no valid codes comes back unchanged
pub fn decode_string(str: &str) -> String {
    Decoder::from_table(&*DICTIONARY).decode(str)
}

/// encode the whole input file into the output file
/// the output is only created once the input has been read in full, so a missing input leaves it untouched
/// # Example
///
/// ```no_run
/// use wordpack::encode_file;
/// let report = encode_file("example_original.txt", "example_compressed.txt").unwrap();
/// println!("{}", report);
/// ```
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<CodecReport> {
    let text = read_text(&input)?;
    let mut writer = BufWriter::new(File::create(&output)?);
    let report = Encoder::from_table(&*DICTIONARY).encode_stream(&mut text.as_bytes(), &mut writer)?;
    debug!(input = %input.as_ref().display(), output = %output.as_ref().display(), %report, "encoded file");
    Ok(report)
}

/// decode the whole input file into the output file, with the same guarantees as `encode_file`
pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<CodecReport> {
    let text = read_text(&input)?;
    let mut writer = BufWriter::new(File::create(&output)?);
    let report = Decoder::from_table(&*DICTIONARY).decode_stream(&mut text.as_bytes(), &mut writer)?;
    debug!(input = %input.as_ref().display(), output = %output.as_ref().display(), %report, "decoded file");
    Ok(report)
}

/// encode `input` into `packed`, decode `packed` into `restored`,
/// and check whether the restored text equals the input
pub fn round_trip_file<P, Q, R>(input: P, packed: Q, restored: R) -> Result<RoundTripReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let compress = encode_file(&input, &packed)?;
    let decompress = decode_file(&packed, &restored)?;
    let lossless = read_text(&input)? == read_text(&restored)?;
    if !lossless {
        warn!(input = %input.as_ref().display(), "restored text differs from the input");
    }
    Ok(RoundTripReport { compress, decompress, lossless })
}

/// read a whole text file; failing to open it is reported as `SourceNotFound`
pub fn read_text<P: AsRef<Path>>(filename: P) -> Result<String> {
    let path = filename.as_ref();
    let mut file = File::open(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "input file not found");
        CodecError::SourceNotFound { path: path.to_path_buf(), source }
    })?;
    let mut text = String::new();
    file.read_to_string(&mut text).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => CodecError::InvalidText(path.display().to_string()),
        _ => CodecError::Io(e),
    })?;
    Ok(text)
}
