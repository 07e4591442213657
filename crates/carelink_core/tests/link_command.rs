use carelink_core::{
    AddressBook, Command, CommandError, LinkCommand, Nric, Person, Role,
};

fn nric(value: &str) -> Nric {
    Nric::parse(value).unwrap()
}

fn person(value: &str, name: &str, role: Role) -> Person {
    Person::new(nric(value), name, role).unwrap()
}

fn seeded_book() -> AddressBook {
    let mut book = AddressBook::in_memory();
    book.add_person(person("S1234567A", "Alex Yeoh", Role::Patient))
        .unwrap();
    book.add_person(person("S7654321B", "Bernice Yu", Role::Caregiver))
        .unwrap();
    book
}

fn link(patient: &str, caregiver: &str) -> LinkCommand {
    LinkCommand::new(nric(patient), nric(caregiver))
}

#[test]
fn link_succeeds_and_reports_both_persons() {
    let mut book = seeded_book();

    let outcome = link("S1234567A", "S7654321B").execute(&mut book).unwrap();

    assert_eq!(
        outcome.feedback,
        "Linked Alex Yeoh; NRIC: S1234567A; Role: patient and \
         Bernice Yu; NRIC: S7654321B; Role: caregiver"
    );
    assert_eq!(book.link_count(), 1);

    let patient = book.get_person(&nric("S1234567A")).unwrap().clone();
    let caregiver = book.get_person(&nric("S7654321B")).unwrap().clone();
    assert!(book.has_link(&patient, &caregiver));
}

#[test]
fn second_identical_link_is_duplicate() {
    let mut book = seeded_book();
    let command = link("S1234567A", "S7654321B");

    command.execute(&mut book).unwrap();
    let err = command.execute(&mut book).unwrap_err();

    assert_eq!(err, CommandError::DuplicateLink);
    assert_eq!(err.to_string(), "This link already exists in the address book");
    assert_eq!(book.link_count(), 1);
}

#[test]
fn missing_person_on_either_side_leaves_registry_untouched() {
    let mut book = seeded_book();

    let missing_patient = link("S0000000Z", "S7654321B")
        .execute(&mut book)
        .unwrap_err();
    let missing_caregiver = link("S1234567A", "S0000000Z")
        .execute(&mut book)
        .unwrap_err();

    assert_eq!(missing_patient, CommandError::PersonNotFound);
    assert_eq!(missing_caregiver, CommandError::PersonNotFound);
    assert_eq!(missing_patient.to_string(), "Incorrect NRIC. Person not found");
    assert_eq!(book.link_count(), 0);
}

#[test]
fn empty_store_reports_person_not_found() {
    let mut book = AddressBook::in_memory();

    let err = link("S1234567A", "S7654321B")
        .execute(&mut book)
        .unwrap_err();

    assert_eq!(err, CommandError::PersonNotFound);
    assert_eq!(book.link_count(), 0);
}

#[test]
fn lookup_is_case_insensitive() {
    let mut lower = seeded_book();
    let mut upper = seeded_book();

    let lower_outcome = link("s1234567a", "S7654321B").execute(&mut lower).unwrap();
    let upper_outcome = link("S1234567A", "S7654321B").execute(&mut upper).unwrap();

    assert_eq!(lower_outcome, upper_outcome);
    assert_eq!(lower.links(), upper.links());

    let err = link("S1234567A", "s7654321b")
        .execute(&mut lower)
        .unwrap_err();
    assert_eq!(err, CommandError::DuplicateLink);
}

#[test]
fn swapped_roles_are_rejected_without_mutation() {
    let mut book = seeded_book();

    let err = link("S7654321B", "S1234567A")
        .execute(&mut book)
        .unwrap_err();

    assert_eq!(
        err,
        CommandError::InvalidRole {
            nric: nric("S7654321B"),
            expected: Role::Patient,
        }
    );
    assert_eq!(book.link_count(), 0);
}

#[test]
fn caregiver_position_requires_caregiver_role() {
    let mut book = seeded_book();
    book.add_person(person("T0123456C", "Charlotte Oliveiro", Role::Patient))
        .unwrap();

    let err = link("S1234567A", "T0123456C")
        .execute(&mut book)
        .unwrap_err();

    assert!(matches!(
        err,
        CommandError::InvalidRole { expected: Role::Caregiver, .. }
    ));
    assert_eq!(book.link_count(), 0);
}

#[test]
fn self_link_is_rejected() {
    let mut book = seeded_book();

    let err = link("S1234567A", "s1234567a")
        .execute(&mut book)
        .unwrap_err();

    assert_eq!(err, CommandError::SelfLink(nric("S1234567A")));
    assert_eq!(book.link_count(), 0);
}

#[test]
fn one_patient_can_have_several_caregivers() {
    let mut book = seeded_book();
    book.add_person(person("T7654321D", "David Li", Role::Caregiver))
        .unwrap();

    link("S1234567A", "S7654321B").execute(&mut book).unwrap();
    link("S1234567A", "T7654321D").execute(&mut book).unwrap();

    assert_eq!(book.link_count(), 2);
    assert_eq!(book.links_of(&nric("S1234567A")).len(), 2);
    assert_eq!(book.links_of(&nric("T7654321D")).len(), 1);
}

#[test]
fn command_word_is_link() {
    assert_eq!(link("S1234567A", "S7654321B").word(), "link");
}
