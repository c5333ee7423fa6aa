//! Documentation MCP Server Library
//!
//! This crate serves a fixed catalogue of framework documentation as Model
//! Context Protocol (MCP) resources. Every document is a static Markdown page
//! addressed by a `category/slug` URI such as `vue/animation`.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **resources**: The resource registry and the documentation catalogue
//!
//! # Example
//!
//! ```rust,no_run
//! use docs_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     let page = server.resources().read_resource("vue/vue").await?;
//!     assert_eq!(page.contents.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::resources::{ResourceKey, ResourceRegistry};
