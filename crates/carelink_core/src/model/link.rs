//! Patient-caregiver link record.
//!
//! # Invariants
//! - Roles are explicit fields; argument order never implies a role.
//! - Links reference persons by identity only.

use crate::model::nric::Nric;
use serde::{Deserialize, Serialize};

/// One registered patient-caregiver relationship.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Link {
    pub patient: Nric,
    pub caregiver: Nric,
}

impl Link {
    pub fn new(patient: Nric, caregiver: Nric) -> Self {
        Self { patient, caregiver }
    }

    /// Returns whether `nric` takes part in this link in either role.
    pub fn involves(&self, nric: &Nric) -> bool {
        &self.patient == nric || &self.caregiver == nric
    }

    /// Returns the other member of the link, if `nric` is one of them.
    pub fn counterpart(&self, nric: &Nric) -> Option<&Nric> {
        if &self.patient == nric {
            Some(&self.caregiver)
        } else if &self.caregiver == nric {
            Some(&self.patient)
        } else {
            None
        }
    }
}
