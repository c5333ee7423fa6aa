//! Resources domain module.
//!
//! This module handles all resource-related functionality for the MCP server.
//! Every resource is a static Markdown documentation page addressed by a
//! `category/slug` key.
//!
//! ## Architecture
//!
//! - `key.rs` - Composite resource keys and their external form
//! - `producer.rs` - Content producers and the content they yield
//! - `registry.rs` - The key → (metadata, producer) table
//! - `definitions/` - Documentation tables (one file per category)
//! - `catalogue.rs` - Builds a populated registry from the tables
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Document
//!
//! 1. Write the Markdown under `content/<category>/`
//! 2. Add an entry to the category's table in `definitions/`
//!
//! **No need to modify `service.rs`!**

pub mod catalogue;
pub mod definitions;
mod error;
mod key;
mod producer;
mod registry;
mod service;

pub use catalogue::{build_registry, category_names, resource_templates, resource_uris};
pub use definitions::{DocCategory, MarkdownDoc};
pub use error::ResourceError;
pub use key::{KEY_SEPARATOR, ResourceKey};
pub use producer::{
    ContentEntry, FnProducer, MARKDOWN_MIME_TYPE, ResourceContent, ResourceProducer,
    StaticDocument, producer_fn,
};
pub use registry::{RegisteredResource, ResourceDescriptor, ResourceRegistry};
pub use service::{ResourcePage, ResourceService};
