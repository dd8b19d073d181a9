use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZplaneError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed filter file at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Malformed root input: {0}")]
    MalformedInput(String),

    #[error("Filter design failed: {0}")]
    FilterDesign(String),

    #[error("Unknown prototype: {0}")]
    UnknownPrototype(String),

    #[error("Unknown all-pass section: {0}")]
    UnknownSection(String),
}

pub type Result<T> = std::result::Result<T, ZplaneError>;
