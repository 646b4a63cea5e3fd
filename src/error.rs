// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Content(ContentError),
}

/// Specific error types for brochure content loading.
/// Content problems degrade features rather than abort the app, but the
/// CLI-override path reports them so a broken file is not silently ignored.
#[derive(Debug, Clone)]
pub enum ContentError {
    /// The content file could not be read from disk.
    Unreadable(String),

    /// The content document is not valid TOML.
    Malformed(String),

    /// The embedded default content asset is missing from the binary.
    MissingEmbedded,
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Unreadable(msg) => write!(f, "content file unreadable: {}", msg),
            ContentError::Malformed(msg) => write!(f, "content document malformed: {}", msg),
            ContentError::MissingEmbedded => write!(f, "embedded content asset missing"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
        }
    }
}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
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
