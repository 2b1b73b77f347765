//! Validated ticker symbols
//!
//! User-supplied symbol text ends up inside the outbound FINRA filter, so it
//! is checked against a conservative whitelist before any request is built.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::config::DEFAULT_SYMBOL;

pub const MAX_SYMBOL_LEN: usize = 14;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Invalid symbol: empty")]
    Empty,

    #[error("Invalid symbol: {0} is longer than 14 characters")]
    TooLong(String),

    #[error("Invalid symbol: {symbol} contains {character:?}")]
    InvalidCharacter { symbol: String, character: char },

    #[error("Invalid symbol: {0} mixes upper and lower case")]
    MixedCase(String),

    #[error("Invalid symbol: {0} is not in canonical form")]
    NotCanonical(String),
}

/// Upper-cased ticker symbol made of ASCII alphanumerics, `.`, `-` and `/`.
///
/// All-lowercase input is upper-cased. Mixed case is rejected, since folding
/// it could name a different instrument than the one the caller meant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, SymbolError> {
        let trimmed = input.trim();
        if trimmed.chars().any(|c| c.is_ascii_lowercase())
            && trimmed.chars().any(|c| c.is_ascii_uppercase())
        {
            return Err(SymbolError::MixedCase(trimmed.to_string()));
        }

        let symbol = trimmed.to_ascii_uppercase();
        if symbol.is_empty() {
            return Err(SymbolError::Empty);
        }
        if symbol.chars().count() > MAX_SYMBOL_LEN {
            return Err(SymbolError::TooLong(symbol));
        }

        for (i, c) in symbol.chars().enumerate() {
            let allowed = c.is_ascii_alphanumeric() || (i > 0 && matches!(c, '.' | '-' | '/'));
            if !allowed {
                return Err(SymbolError::InvalidCharacter {
                    symbol: symbol.clone(),
                    character: c,
                });
            }
        }

        Ok(Self(symbol))
    }

    /// Accept only text that is already a canonical symbol, as FINRA reports
    /// them. Anything `parse` would rewrite is rejected.
    pub fn parse_exact(input: &str) -> Result<Self, SymbolError> {
        let symbol = Self::parse(input)?;
        if symbol.0 != input {
            return Err(SymbolError::NotCanonical(input.to_string()));
        }
        Ok(symbol)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self(DEFAULT_SYMBOL.to_string())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for Symbol {
    type Error = SymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}
