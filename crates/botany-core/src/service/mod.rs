//! Lifecycle services.
//!
//! Services compose the pure model operations with the collaborator ports.
//! Persistence stays outside this workspace; callers hand the returned
//! entities to their own stores.

pub mod bot;
