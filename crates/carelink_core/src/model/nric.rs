//! NRIC identity value type.
//!
//! # Responsibility
//! - Parse and validate national identity numbers at the core boundary.
//! - Normalize identifiers so lookup is case-insensitive everywhere.
//!
//! # Invariants
//! - A constructed `Nric` always matches `[A-Z]\d{7}[A-Z]`.
//! - Equality, ordering and hashing use the uppercase form only.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static NRIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][0-9]{7}[A-Za-z]$").expect("valid nric regex"));

/// Validation errors for NRIC input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NricError {
    /// Input is blank after trim.
    Empty,
    /// Input does not follow letter + seven digits + letter.
    InvalidFormat(String),
}

impl Display for NricError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "NRIC must not be blank"),
            Self::InvalidFormat(value) => write!(
                f,
                "invalid NRIC `{value}`: expected one letter, seven digits and one letter"
            ),
        }
    }
}

impl Error for NricError {}

/// Normalized national identity number used as the unique person key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nric(String);

impl Nric {
    /// Parses raw user input into a normalized identifier.
    ///
    /// Surrounding whitespace is ignored and letters are uppercased.
    pub fn parse(value: &str) -> Result<Self, NricError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(NricError::Empty);
        }
        if !NRIC_RE.is_match(trimmed) {
            return Err(NricError::InvalidFormat(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Nric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Nric {
    type Err = NricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Nric {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Nric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Nric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{Nric, NricError};

    #[test]
    fn parse_uppercases_and_trims() {
        let nric = Nric::parse("  s1234567a ").expect("lowercase nric should parse");
        assert_eq!(nric.as_str(), "S1234567A");
    }

    #[test]
    fn parse_rejects_blank_and_malformed() {
        assert_eq!(Nric::parse("   "), Err(NricError::Empty));
        assert!(matches!(
            Nric::parse("S123456A"),
            Err(NricError::InvalidFormat(_))
        ));
        assert!(matches!(
            Nric::parse("12345678A"),
            Err(NricError::InvalidFormat(_))
        ));
        assert!(matches!(
            Nric::parse("S1234567AB"),
            Err(NricError::InvalidFormat(_))
        ));
    }

    #[test]
    fn case_variants_compare_equal() {
        assert_eq!(
            Nric::parse("t7654321b").unwrap(),
            Nric::parse("T7654321B").unwrap()
        );
    }
}
