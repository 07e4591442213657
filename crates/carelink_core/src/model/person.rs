//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical record for patients and caregivers.
//!
//! # Invariants
//! - `nric` is the stable identity and is unique within a person store.
//! - `name` is never blank after trim.

use crate::model::nric::Nric;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Role a person plays in a care relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Receives care.
    Patient,
    /// Provides care.
    Caregiver,
}

impl Role {
    /// Stable lowercase label used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Caregiver => "caregiver",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for person records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    BlankName,
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "person name must not be blank"),
        }
    }
}

impl Error for PersonValidationError {}

/// Canonical person record keyed by NRIC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonWire")]
pub struct Person {
    pub nric: Nric,
    pub name: String,
    pub role: Role,
}

impl Person {
    /// Creates a validated person. The name is trimmed.
    pub fn new(
        nric: Nric,
        name: impl Into<String>,
        role: Role,
    ) -> Result<Self, PersonValidationError> {
        let person = Self {
            nric,
            name: name.into().trim().to_string(),
            role,
        };
        person.validate()?;
        Ok(person)
    }

    /// Validates record invariants.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if self.name.trim().is_empty() {
            return Err(PersonValidationError::BlankName);
        }
        Ok(())
    }

    pub fn is_patient(&self) -> bool {
        self.role == Role::Patient
    }

    pub fn is_caregiver(&self) -> bool {
        self.role == Role::Caregiver
    }
}

#[derive(Deserialize)]
struct PersonWire {
    nric: Nric,
    name: String,
    role: Role,
}

impl TryFrom<PersonWire> for Person {
    type Error = PersonValidationError;

    fn try_from(value: PersonWire) -> Result<Self, Self::Error> {
        Self::new(value.nric, value.name, value.role)
    }
}
