//! User-facing strings and person formatting.

use crate::model::person::Person;

pub const LINK_COMMAND_WORD: &str = "link";
pub const PREFIX_PATIENT: &str = "p/";
pub const PREFIX_CAREGIVER: &str = "c/";

pub const LINK_USAGE: &str = "link: Links a caregiver and a patient by their NRICs.\n\
Parameters: p/PATIENT_NRIC c/CAREGIVER_NRIC\n\
Example: link p/S1234567A c/S7654321B";

pub const MESSAGE_PERSON_NOT_FOUND: &str = "Incorrect NRIC. Person not found";
pub const MESSAGE_DUPLICATE_LINK: &str = "This link already exists in the address book";

/// Builds the link success feedback from two formatted persons.
pub fn link_success(patient: &Person, caregiver: &Person) -> String {
    format!(
        "Linked {} and {}",
        format_person(patient),
        format_person(caregiver)
    )
}

/// Formats a person for display in command feedback.
pub fn format_person(person: &Person) -> String {
    format!(
        "{}; NRIC: {}; Role: {}",
        person.name, person.nric, person.role
    )
}
