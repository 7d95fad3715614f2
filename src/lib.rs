//! Demo MCP Server Library
//!
//! A small Model Context Protocol server exposing a handful of tools:
//! integer addition, a random secret word, the current local time, a weather
//! lookup, and create/list operations on a single PostgreSQL table.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and the
//!   STDIO / HTTP+SSE transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the remotely invocable tools and their dispatch
//!   - **storage**: the `codingLanguage` table accessor
//!
//! # Example
//!
//! ```rust,no_run
//! use lang_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
