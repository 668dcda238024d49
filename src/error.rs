//! Error types for deck generation.
use thiserror::Error;

/// Result type for deck generation.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Error types for deck generation.
#[derive(Error, Debug)]
pub enum DeckError {
    /// A palette name with no entry in the color table
    #[error("unknown palette color: {0}")]
    UnknownColor(String),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// Invalid part name
    #[error("invalid part name: {0}")]
    InvalidPartName(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for DeckError {
    fn from(err: quick_xml::Error) -> Self {
        DeckError::Xml(err.to_string())
    }
}

impl From<zip::result::ZipError> for DeckError {
    fn from(err: zip::result::ZipError) -> Self {
        DeckError::Zip(err.to_string())
    }
}
