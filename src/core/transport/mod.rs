//! Transport layer for the MCP server.
//!
//! This module provides two transport implementations:
//! - **STDIO**: Standard input/output, used when no `PORT` is configured
//! - **HTTP**: An SSE event stream (`GET /sse` + `POST /messages/`) and a
//!   synchronous JSON-RPC endpoint (`POST /mcp`)
//!
//! Each transport handles the connection lifecycle and delegates
//! message processing to the MCP server handler.

mod config;
mod error;
mod service;

pub mod http;
pub mod stdio;

pub use config::{HttpConfig, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
