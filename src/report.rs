use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Compress,
    Decompress,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Compress => write!(f, "compressed"),
            Direction::Decompress => write!(f, "decompressed"),
        }
    }
}

/// completion status of one encode or decode pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecReport {
    pub direction: Direction,
    pub input_bytes: usize,
    pub output_bytes: usize,
    /// runs replaced through a dictionary lookup
    pub substitutions: usize,
}

impl CodecReport {
    pub fn new(direction: Direction, input_bytes: usize, output_bytes: usize, substitutions: usize) -> CodecReport {
        CodecReport { direction, input_bytes, output_bytes, substitutions }
    }

    pub fn compression_factor(&self) -> f64 {
        if self.output_bytes == 0 {
            return 1.0;
        }
        self.input_bytes as f64 / self.output_bytes as f64
    }
}

impl Display for CodecReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} -> {} bytes ({} substitutions, factor {:.4})",
            self.direction,
            self.input_bytes,
            self.output_bytes,
            self.substitutions,
            self.compression_factor()
        )
    }
}

/// outcome of encoding a file and decoding the result back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTripReport {
    pub compress: CodecReport,
    pub decompress: CodecReport,
    pub lossless: bool,
}
