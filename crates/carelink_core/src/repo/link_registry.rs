//! Link registry contracts and in-memory implementation.
//!
//! # Responsibility
//! - Track the set of registered patient-caregiver links.
//! - Answer existence and per-person enumeration queries.
//!
//! # Invariants
//! - A (patient, caregiver) pair is stored at most once.
//! - `add` is a single insert-if-absent step, so the duplicate check cannot
//!   be separated from the mutation.
//! - The registry does not validate roles; callers own that contract.

use crate::model::link::Link;
use crate::model::nric::Nric;
use std::collections::BTreeSet;

/// Registry interface for typed patient-caregiver links.
pub trait LinkRegistry {
    fn exists(&self, patient: &Nric, caregiver: &Nric) -> bool;
    /// Inserts the pair when absent. Returns `false` when it already existed.
    fn add(&mut self, patient: &Nric, caregiver: &Nric) -> bool;
    /// Removes the pair. Returns `false` when it was not registered.
    fn remove(&mut self, patient: &Nric, caregiver: &Nric) -> bool;
    /// Returns links where `nric` is either the patient or the caregiver.
    fn links_for(&self, nric: &Nric) -> Vec<Link>;
    /// Removes every link that references `nric` and returns how many were dropped.
    fn remove_all_for(&mut self, nric: &Nric) -> usize;
    fn len(&self) -> usize;
    /// Returns every link in (patient, caregiver) order.
    fn links(&self) -> Vec<Link>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered in-memory link registry.
#[derive(Debug, Default)]
pub struct InMemoryLinkRegistry {
    links: BTreeSet<Link>,
}

impl InMemoryLinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkRegistry for InMemoryLinkRegistry {
    fn exists(&self, patient: &Nric, caregiver: &Nric) -> bool {
        self.links
            .contains(&Link::new(patient.clone(), caregiver.clone()))
    }

    fn add(&mut self, patient: &Nric, caregiver: &Nric) -> bool {
        self.links
            .insert(Link::new(patient.clone(), caregiver.clone()))
    }

    fn remove(&mut self, patient: &Nric, caregiver: &Nric) -> bool {
        self.links
            .remove(&Link::new(patient.clone(), caregiver.clone()))
    }

    fn links_for(&self, nric: &Nric) -> Vec<Link> {
        self.links
            .iter()
            .filter(|link| link.involves(nric))
            .cloned()
            .collect()
    }

    fn remove_all_for(&mut self, nric: &Nric) -> usize {
        let before = self.links.len();
        self.links.retain(|link| !link.involves(nric));
        before - self.links.len()
    }

    fn len(&self) -> usize {
        self.links.len()
    }

    fn links(&self) -> Vec<Link> {
        self.links.iter().cloned().collect()
    }
}
