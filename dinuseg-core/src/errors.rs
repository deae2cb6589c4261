use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Sequence data before any FASTA header in: {0}")]
    MissingHeader(String),

    #[error("FASTA header is not valid UTF-8: {0}")]
    InvalidHeader(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
