//! User-facing commands over the address book.
//!
//! # Responsibility
//! - Define the command contract used by dispatchers.
//! - Carry user-facing outcomes and errors as explicit results.
//!
//! # Invariants
//! - A failed command leaves the address book unchanged.
//! - Error `Display` output is safe to show verbatim to users.

pub mod link;
pub mod messages;
pub mod parser;

use crate::model::nric::Nric;
use crate::model::person::Role;
use crate::service::address_book::AddressBook;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandResult<T> = Result<T, CommandError>;

/// Successful command outcome shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub feedback: String,
}

impl CommandOutcome {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}

/// Expected user-input failures raised while executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// One of the NRICs does not resolve to a stored person.
    PersonNotFound,
    /// The patient/caregiver pair is already linked.
    DuplicateLink,
    /// The resolved person does not hold the role its position requires.
    InvalidRole { nric: Nric, expected: Role },
    /// Patient and caregiver resolve to the same person.
    SelfLink(Nric),
}

impl CommandError {
    /// Stable snake_case kind used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PersonNotFound => "person_not_found",
            Self::DuplicateLink => "duplicate_link",
            Self::InvalidRole { .. } => "invalid_role",
            Self::SelfLink(_) => "self_link",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PersonNotFound => f.write_str(messages::MESSAGE_PERSON_NOT_FOUND),
            Self::DuplicateLink => f.write_str(messages::MESSAGE_DUPLICATE_LINK),
            Self::InvalidRole { nric, expected } => {
                write!(f, "Person {nric} is not registered as a {expected}")
            }
            Self::SelfLink(nric) => write!(f, "Person {nric} cannot be linked to themselves"),
        }
    }
}

impl Error for CommandError {}

/// Executable command against the in-memory address book.
pub trait Command {
    /// Stable command word, e.g. `link`.
    fn word(&self) -> &'static str;

    fn execute(&self, book: &mut AddressBook) -> CommandResult<CommandOutcome>;
}
