//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain: read-only documentation resources.

pub mod resources;
