//! Address book model facade.
//!
//! # Responsibility
//! - Own the person store and the link registry as one explicitly passed model.
//! - Provide the lookup/link entry points consumed by commands.
//! - Keep links consistent with the person store on deletion.
//!
//! # Invariants
//! - No link references a person missing from the store.
//! - Mutations happen only through `&mut self`; there is a single writer.

use crate::model::link::Link;
use crate::model::nric::Nric;
use crate::model::person::Person;
use crate::repo::link_registry::{InMemoryLinkRegistry, LinkRegistry};
use crate::repo::person_store::{InMemoryPersonStore, PersonStore, StoreResult};
use log::info;

/// Model facade over a person store and a link registry.
#[derive(Debug, Default)]
pub struct AddressBook<P: PersonStore = InMemoryPersonStore, L: LinkRegistry = InMemoryLinkRegistry>
{
    persons: P,
    links: L,
}

impl AddressBook {
    /// Creates an empty in-memory address book.
    pub fn in_memory() -> Self {
        Self::new(InMemoryPersonStore::new(), InMemoryLinkRegistry::new())
    }
}

impl<P: PersonStore, L: LinkRegistry> AddressBook<P, L> {
    /// Creates a model from store implementations.
    pub fn new(persons: P, links: L) -> Self {
        Self { persons, links }
    }

    /// Looks up one person by NRIC. Returns `None` on a miss.
    pub fn get_person(&self, nric: &Nric) -> Option<&Person> {
        self.persons.find(nric)
    }

    pub fn has_person(&self, nric: &Nric) -> bool {
        self.persons.contains(nric)
    }

    /// Adds a person; rejects a second record with the same NRIC.
    pub fn add_person(&mut self, person: Person) -> StoreResult<()> {
        self.persons.add(person)?;
        info!(
            "event=person_add module=address_book status=ok persons={}",
            self.persons.len()
        );
        Ok(())
    }

    /// Removes a person together with every link that references it.
    pub fn delete_person(&mut self, nric: &Nric) -> StoreResult<Person> {
        let removed = self.persons.remove(nric)?;
        let dropped_links = self.links.remove_all_for(nric);
        info!(
            "event=person_delete module=address_book status=ok dropped_links={} persons={}",
            dropped_links,
            self.persons.len()
        );
        Ok(removed)
    }

    /// Returns whether the typed pair is already linked.
    pub fn has_link(&self, patient: &Person, caregiver: &Person) -> bool {
        self.links.exists(&patient.nric, &caregiver.nric)
    }

    /// Registers the pair. Returns `false` when it was already linked.
    pub fn add_link(&mut self, patient: &Person, caregiver: &Person) -> bool {
        self.links.add(&patient.nric, &caregiver.nric)
    }

    /// Returns every link the person takes part in.
    pub fn links_of(&self, nric: &Nric) -> Vec<Link> {
        self.links.links_for(nric)
    }

    pub fn links(&self) -> Vec<Link> {
        self.links.links()
    }

    pub fn persons(&self) -> Vec<&Person> {
        self.persons.persons()
    }

    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
