//! Domain model for persons and care links.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every person is identified by a normalized `Nric`.
//! - Links own no person data; they reference persons by `Nric`.

pub mod link;
pub mod nric;
pub mod person;
