//! Store layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define keyed person storage and link registry contracts.
//! - Keep collection details away from service/command orchestration.
//!
//! # Invariants
//! - Lookups report misses as `None` instead of errors.
//! - Link insertion is insert-if-absent.

pub mod link_registry;
pub mod person_store;
