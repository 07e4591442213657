//! Link command: connects a patient and a caregiver by NRIC.
//!
//! # Invariants
//! - Resolve, role check and duplicate check are pure; the registry insert
//!   is the only mutation and runs last.
//! - Lookup misses fail fast on the first unresolved NRIC.

use crate::command::messages::{self, LINK_COMMAND_WORD};
use crate::command::{Command, CommandError, CommandOutcome, CommandResult};
use crate::model::nric::Nric;
use crate::model::person::Role;
use crate::repo::link_registry::LinkRegistry;
use crate::repo::person_store::PersonStore;
use crate::service::address_book::AddressBook;
use log::{info, warn};

/// Links the specified patient and caregiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCommand {
    patient_nric: Nric,
    caregiver_nric: Nric,
}

impl LinkCommand {
    pub fn new(patient_nric: Nric, caregiver_nric: Nric) -> Self {
        Self {
            patient_nric,
            caregiver_nric,
        }
    }

    pub fn patient_nric(&self) -> &Nric {
        &self.patient_nric
    }

    pub fn caregiver_nric(&self) -> &Nric {
        &self.caregiver_nric
    }

    /// Runs the command against any store/registry pairing.
    pub fn run<P: PersonStore, L: LinkRegistry>(
        &self,
        book: &mut AddressBook<P, L>,
    ) -> CommandResult<CommandOutcome> {
        let result = self.apply(book);
        match &result {
            Ok(_) => info!(
                "event=link_create module=command status=ok links={}",
                book.link_count()
            ),
            Err(err) => warn!(
                "event=link_create module=command status=error kind={}",
                err.kind()
            ),
        }
        result
    }

    fn apply<P: PersonStore, L: LinkRegistry>(
        &self,
        book: &mut AddressBook<P, L>,
    ) -> CommandResult<CommandOutcome> {
        let patient = book
            .get_person(&self.patient_nric)
            .ok_or(CommandError::PersonNotFound)?
            .clone();
        let caregiver = book
            .get_person(&self.caregiver_nric)
            .ok_or(CommandError::PersonNotFound)?
            .clone();

        if patient.nric == caregiver.nric {
            return Err(CommandError::SelfLink(patient.nric));
        }
        if !patient.is_patient() {
            return Err(CommandError::InvalidRole {
                nric: patient.nric,
                expected: Role::Patient,
            });
        }
        if !caregiver.is_caregiver() {
            return Err(CommandError::InvalidRole {
                nric: caregiver.nric,
                expected: Role::Caregiver,
            });
        }

        if book.has_link(&patient, &caregiver) || !book.add_link(&patient, &caregiver) {
            return Err(CommandError::DuplicateLink);
        }

        Ok(CommandOutcome::new(messages::link_success(
            &patient, &caregiver,
        )))
    }
}

impl Command for LinkCommand {
    fn word(&self) -> &'static str {
        LINK_COMMAND_WORD
    }

    fn execute(&self, book: &mut AddressBook) -> CommandResult<CommandOutcome> {
        self.run(book)
    }
}
