//! Built-in sample persons for demos and smoke runs.

use crate::model::nric::{Nric, NricError};
use crate::model::person::{Person, PersonValidationError, Role};
use crate::repo::person_store::StoreError;
use crate::service::address_book::AddressBook;
use std::error::Error;
use std::fmt::{Display, Formatter};

const SAMPLE_PERSONS: &[(&str, &str, Role)] = &[
    ("S1234567A", "Alex Yeoh", Role::Patient),
    ("S7654321B", "Bernice Yu", Role::Caregiver),
    ("T0123456C", "Charlotte Oliveiro", Role::Patient),
    ("T7654321D", "David Li", Role::Caregiver),
];

/// Failure while building sample data.
#[derive(Debug)]
pub enum SampleError {
    Nric(NricError),
    Person(PersonValidationError),
    Store(StoreError),
}

impl Display for SampleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nric(err) => write!(f, "{err}"),
            Self::Person(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SampleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Nric(err) => Some(err),
            Self::Person(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<NricError> for SampleError {
    fn from(value: NricError) -> Self {
        Self::Nric(value)
    }
}

impl From<PersonValidationError> for SampleError {
    fn from(value: PersonValidationError) -> Self {
        Self::Person(value)
    }
}

impl From<StoreError> for SampleError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Returns the sample persons in declaration order.
pub fn sample_persons() -> Result<Vec<Person>, SampleError> {
    SAMPLE_PERSONS
        .iter()
        .map(|(nric, name, role)| -> Result<Person, SampleError> {
            Ok(Person::new(Nric::parse(nric)?, *name, *role)?)
        })
        .collect()
}

/// Builds an in-memory address book seeded with sample persons and no links.
pub fn sample_address_book() -> Result<AddressBook, SampleError> {
    let mut book = AddressBook::in_memory();
    for person in sample_persons()? {
        book.add_person(person)?;
    }
    Ok(book)
}
