//! Lookup errors.
//!
//! The only fallible surface is name resolution: tokenization itself is
//! total over any `&str` and never fails.

/// Error returned by registry lookups and the engine facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No lexer is registered under the offered name or alias.
    UnknownLanguage(String),
    /// No formatter is registered under the offered name or alias.
    UnknownFormatter(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownLanguage(name) => {
                write!(f, "unknown language: {name:?}")
            }
            Error::UnknownFormatter(name) => {
                write!(f, "unknown formatter: {name:?}")
            }
        }
    }
}

impl std::error::Error for Error {}
