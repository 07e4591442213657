//! Core domain logic for CareLink.
//! This crate is the single source of truth for person and link invariants.

pub mod command;
pub mod logging;
pub mod model;
pub mod repo;
pub mod sample;
pub mod service;

pub use command::link::LinkCommand;
pub use command::messages::format_person;
pub use command::parser::{parse_command, parse_link_args, ParseError};
pub use command::{Command, CommandError, CommandOutcome, CommandResult};
pub use logging::{init_logging, logging_status, LogConfig, LogLevel, LoggingError};
pub use model::link::Link;
pub use model::nric::{Nric, NricError};
pub use model::person::{Person, PersonValidationError, Role};
pub use repo::link_registry::{InMemoryLinkRegistry, LinkRegistry};
pub use repo::person_store::{InMemoryPersonStore, PersonStore, StoreError, StoreResult};
pub use sample::{sample_address_book, sample_persons, SampleError};
pub use service::address_book::AddressBook;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
