use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Input file not found: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidText(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
