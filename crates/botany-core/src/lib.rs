//! Lifecycle logic for Botany bot accounts.
//!
//! Defines the collaborator ports (time source, identifier generator) and the
//! service that walks bots through create, patch, and validate. Depends only
//! on `botany-types` -- never on a store or a transport.

pub mod clock;
pub mod id;
pub mod service;
