//! Core use-case services.
//!
//! # Responsibility
//! - Compose store implementations into the model consumed by commands.
//! - Keep command/CLI layers decoupled from collection details.

pub mod address_book;
