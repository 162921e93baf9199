// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Toast operations themselves never fail; errors only come from the
//! configuration layer and from parsing kinds/anchors out of strings.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A string did not name one of the five toast kinds.
    #[error("Unknown toast kind: {0}")]
    InvalidKind(String),

    /// A string did not name one of the nine screen anchors.
    #[error("Unknown toast position: {0}")]
    InvalidPosition(String),
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
