//! Person store contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide keyed add/remove/find APIs over person records.
//!
//! # Invariants
//! - At most one person per normalized `Nric`.
//! - `find` has no side effects and reports a miss as `None`.

use crate::model::nric::Nric;
use crate::model::person::Person;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Keyed store errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicatePerson(Nric),
    PersonNotFound(Nric),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson(nric) => write!(f, "person already exists: {nric}"),
            Self::PersonNotFound(nric) => write!(f, "person not found: {nric}"),
        }
    }
}

impl Error for StoreError {}

/// Store interface for person records keyed by NRIC.
pub trait PersonStore {
    fn add(&mut self, person: Person) -> StoreResult<()>;
    fn remove(&mut self, nric: &Nric) -> StoreResult<Person>;
    fn find(&self, nric: &Nric) -> Option<&Person>;
    fn len(&self) -> usize;
    /// Returns every person sorted by NRIC.
    fn persons(&self) -> Vec<&Person>;

    fn contains(&self, nric: &Nric) -> bool {
        self.find(nric).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered in-memory person store.
#[derive(Debug, Default)]
pub struct InMemoryPersonStore {
    persons: BTreeMap<Nric, Person>,
}

impl InMemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersonStore for InMemoryPersonStore {
    fn add(&mut self, person: Person) -> StoreResult<()> {
        if self.persons.contains_key(&person.nric) {
            return Err(StoreError::DuplicatePerson(person.nric));
        }
        self.persons.insert(person.nric.clone(), person);
        Ok(())
    }

    fn remove(&mut self, nric: &Nric) -> StoreResult<Person> {
        self.persons
            .remove(nric)
            .ok_or_else(|| StoreError::PersonNotFound(nric.clone()))
    }

    fn find(&self, nric: &Nric) -> Option<&Person> {
        self.persons.get(nric)
    }

    fn len(&self) -> usize {
        self.persons.len()
    }

    fn persons(&self) -> Vec<&Person> {
        self.persons.values().collect()
    }
}
