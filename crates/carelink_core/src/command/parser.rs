//! Command-line parser for user input.
//!
//! # Responsibility
//! - Split a raw input line into command word and prefixed arguments.
//! - Validate NRIC format before values reach the command layer.
//!
//! # Invariants
//! - Each prefix appears exactly once; order does not matter.
//! - Any token without a known prefix is rejected.
//! - Command words are case-sensitive; NRIC values are not.

use crate::command::link::LinkCommand;
use crate::command::messages::{LINK_COMMAND_WORD, LINK_USAGE, PREFIX_CAREGIVER, PREFIX_PATIENT};
use crate::command::Command;
use crate::model::nric::{Nric, NricError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input parsing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    EmptyInput,
    UnknownCommand(String),
    /// Arguments are missing, repeated or unrecognized.
    InvalidFormat { usage: &'static str },
    InvalidNric(NricError),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "command input must not be blank"),
            Self::UnknownCommand(word) => write!(f, "unknown command: `{word}`"),
            Self::InvalidFormat { usage } => write!(f, "Invalid command format!\n{usage}"),
            Self::InvalidNric(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidNric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NricError> for ParseError {
    fn from(value: NricError) -> Self {
        Self::InvalidNric(value)
    }
}

/// Parses one full input line into an executable command.
pub fn parse_command(line: &str) -> Result<Box<dyn Command>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (trimmed, ""),
    };

    match word {
        LINK_COMMAND_WORD => Ok(Box::new(parse_link_args(args)?)),
        _ => Err(ParseError::UnknownCommand(word.to_string())),
    }
}

/// Parses `p/<NRIC> c/<NRIC>` arguments for the link command.
pub fn parse_link_args(args: &str) -> Result<LinkCommand, ParseError> {
    let mut patient: Option<&str> = None;
    let mut caregiver: Option<&str> = None;

    for token in args.split_whitespace() {
        let (slot, value) = if let Some(value) = token.strip_prefix(PREFIX_PATIENT) {
            (&mut patient, value)
        } else if let Some(value) = token.strip_prefix(PREFIX_CAREGIVER) {
            (&mut caregiver, value)
        } else {
            return Err(link_format_error());
        };

        if slot.replace(value).is_some() {
            return Err(link_format_error());
        }
    }

    match (patient, caregiver) {
        (Some(patient), Some(caregiver)) => Ok(LinkCommand::new(
            Nric::parse(patient)?,
            Nric::parse(caregiver)?,
        )),
        _ => Err(link_format_error()),
    }
}

fn link_format_error() -> ParseError {
    ParseError::InvalidFormat { usage: LINK_USAGE }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, parse_link_args, ParseError};

    #[test]
    fn command_word_must_match_exactly() {
        assert_eq!(
            parse_command("LINK p/S1234567A c/S7654321B").err(),
            Some(ParseError::UnknownCommand("LINK".to_string()))
        );
        assert!(parse_command("link p/S1234567A c/S7654321B").is_ok());
    }

    #[test]
    fn bare_prefix_is_rejected_as_blank_nric() {
        let err = parse_link_args("p/ c/S7654321B").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNric(_)));
    }
}
