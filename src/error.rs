// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// The chosen directory could not be listed (missing, not a directory,
    /// permission denied). The message carries the offending path.
    DirectoryUnreadable(String),
    Decode(DecodeError),
    Io(String),
    Config(String),
}

/// Specific error types for image decoding issues.
/// A decode failure degrades the display of one entry; it never removes the
/// entry from its sequence and never aborts navigation.
#[derive(Debug, Clone)]
pub enum DecodeError {
    /// The file format is not supported or could not be recognized
    UnsupportedFormat,

    /// File appears corrupted or has invalid data
    CorruptedData(String),

    /// I/O error while reading the file
    IoError(String),

    /// The file was not found
    NotFound,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnsupportedFormat => write!(f, "Unsupported image format"),
            DecodeError::CorruptedData(msg) => write!(f, "Corrupted image data: {}", msg),
            DecodeError::IoError(msg) => write!(f, "I/O error: {}", msg),
            DecodeError::NotFound => write!(f, "File not found"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryUnreadable(e) => write!(f, "Directory unreadable: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
