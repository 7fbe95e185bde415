use std::io::{Read, Write};

use crate::core::dictionary::WordTable;
use crate::core::run::Runs;
use crate::error::{CodecError, Result};
use crate::report::{CodecReport, Direction};
use crate::util::char_class::{is_code_char, is_word_char};

/// copies `text` into `out`, replacing each in-class run that `lookup` knows;
/// returns the number of replaced runs
fn substitute<'t, P, L>(text: &str, predicate: P, lookup: L, out: &mut String) -> usize
where
    P: Fn(char) -> bool,
    L: Fn(&str) -> Option<&'t str>,
{
    let mut substitutions = 0;
    for run in Runs::new(text, predicate) {
        match run.in_class.then(|| lookup(run.text)).flatten() {
            Some(replacement) => {
                out.push_str(replacement);
                substitutions += 1;
            }
            None => out.push_str(run.text),
        }
    }
    substitutions
}

fn read_all<R: Read>(reader: &mut R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => CodecError::InvalidText(e.to_string()),
        _ => CodecError::Io(e),
    })?;
    Ok(text)
}

pub struct Encoder<'a> {
    table: &'a dyn WordTable,
}

impl Encoder<'_> {
    pub fn from_table(table: &dyn WordTable) -> Encoder {
        Encoder { table }
    }

    /// replaces every maximal ASCII-letter run that is exactly a dictionary word
    pub fn encode(&self, text: &str) -> String {
        let mut buf = String::with_capacity(text.len());
        self.encode_into(text, &mut buf);
        buf
    }

    pub fn encode_into(&self, text: &str, buf: &mut String) -> usize {
        substitute(text, is_word_char, |word| self.table.code_for(word), buf)
    }

    /// reads the whole source, then writes the whole coded text to the sink
    pub fn encode_stream<R: Read, W: Write>(&self, reader: &mut R, writer: &mut W) -> Result<CodecReport> {
        let text = read_all(reader)?;
        let mut buf = String::with_capacity(text.len());
        let substitutions = self.encode_into(&text, &mut buf);
        writer.write_all(buf.as_bytes())?;
        writer.flush()?;
        Ok(CodecReport::new(Direction::Compress, text.len(), buf.len(), substitutions))
    }
}

pub struct Decoder<'a> {
    table: &'a dyn WordTable,
}

impl Decoder<'_> {
    pub fn from_table(table: &dyn WordTable) -> Decoder {
        Decoder { table }
    }

    /// restores codes to words. A code glued to letters, digits or another
    /// code (e.g. `_ax`) forms a single run that is not a code, so it is kept verbatim
    pub fn decode(&self, text: &str) -> String {
        let mut buf = String::with_capacity(text.len() * 2);
        self.decode_into(text, &mut buf);
        buf
    }

    pub fn decode_into(&self, text: &str, buf: &mut String) -> usize {
        substitute(text, is_code_char, |code| self.table.word_for(code), buf)
    }

    pub fn decode_stream<R: Read, W: Write>(&self, reader: &mut R, writer: &mut W) -> Result<CodecReport> {
        let text = read_all(reader)?;
        let mut buf = String::with_capacity(text.len() * 2);
        let substitutions = self.decode_into(&text, &mut buf);
        writer.write_all(buf.as_bytes())?;
        writer.flush()?;
        Ok(CodecReport::new(Direction::Decompress, text.len(), buf.len(), substitutions))
    }
}

#[cfg(test)]
mod test {
    use crate::core::codec::{Decoder, Encoder};
    use crate::core::dictionary::DICTIONARY;
    use crate::error::CodecError;
    use crate::report::Direction;

    #[test]
    pub fn test_encode_sentence() {
        let encoder = Encoder::from_table(&*DICTIONARY);
        assert_eq!("_n _l beginning", encoder.encode("Alice was beginning"));
        assert_eq!("_a, cat; _b _z dog.", encoder.encode("the, cat; and my dog."));
        assert_eq!("", encoder.encode(""));
        assert_eq!(" \n\t--", encoder.encode(" \n\t--"));
    }

    #[test]
    pub fn test_case_sensitive() {
        let encoder = Encoder::from_table(&*DICTIONARY);
        assert_eq!("The cat sat.", encoder.encode("The cat sat."));
        assert_eq!("_a cat sat.", encoder.encode("the cat sat."));
        assert_eq!("alice ALICE _n", encoder.encode("alice ALICE Alice"));
    }

    #[test]
    pub fn test_only_whole_words_match() {
        let encoder = Encoder::from_table(&*DICTIONARY);
        assert_eq!("them other thesis", encoder.encode("them other thesis"));
        assert_eq!("_a2_b", encoder.encode("the2and"));
        assert_eq!("café", encoder.encode("café"));
        assert_eq!("_9é", encoder.encode("soé"));
    }

    #[test]
    pub fn test_decode_restores_words() {
        let decoder = Decoder::from_table(&*DICTIONARY);
        assert_eq!("the cat and the hat", decoder.decode("_a cat _b _a hat"));
        assert_eq!("Alice, said she.", decoder.decode("_n, _p _d."));
        assert_eq!("", decoder.decode(""));
    }

    #[test]
    pub fn test_decode_keeps_glued_codes() {
        let decoder = Decoder::from_table(&*DICTIONARY);
        assert_eq!("_ax", decoder.decode("_ax"));
        assert_eq!("_a_b", decoder.decode("_a_b"));
        assert_eq!("x_a", decoder.decode("x_a"));
        assert_eq!("_Q _ _!", decoder.decode("_Q _ _!"));
        assert_eq!("the!", decoder.decode("_a!"));
    }

    #[test]
    pub fn test_digit_glued_word_is_lossy() {
        let encoder = Encoder::from_table(&*DICTIONARY);
        let decoder = Decoder::from_table(&*DICTIONARY);
        let encoded = encoder.encode("the2and");
        assert_eq!("_a2_b", encoded);
        assert_eq!("_a2_b", decoder.decode(&encoded));
    }

    #[test]
    pub fn test_stream_report() {
        let encoder = Encoder::from_table(&*DICTIONARY);
        let mut out = Vec::new();
        let report = encoder.encode_stream(&mut "the cat and the hat".as_bytes(), &mut out).unwrap();
        assert_eq!(b"_a cat _b _a hat".to_vec(), out);
        assert_eq!(Direction::Compress, report.direction);
        assert_eq!(19, report.input_bytes);
        assert_eq!(16, report.output_bytes);
        assert_eq!(3, report.substitutions);

        let decoder = Decoder::from_table(&*DICTIONARY);
        let mut restored = Vec::new();
        let report = decoder.decode_stream(&mut out.as_slice(), &mut restored).unwrap();
        assert_eq!(b"the cat and the hat".to_vec(), restored);
        assert_eq!(Direction::Decompress, report.direction);
        assert_eq!(3, report.substitutions);
    }

    #[test]
    pub fn test_stream_rejects_invalid_utf8() {
        let encoder = Encoder::from_table(&*DICTIONARY);
        let mut out = Vec::new();
        let err = encoder.encode_stream(&mut [0x66u8, 0xff, 0xfe].as_slice(), &mut out).unwrap_err();
        assert!(matches!(err, CodecError::InvalidText(_)));
        assert!(out.is_empty());
    }
}
