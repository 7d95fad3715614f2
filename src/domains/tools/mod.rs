//! Tools domain module.
//!
//! Tools are the remotely invocable operations of this server. Each call is
//! independent: arguments are validated against the tool's parameter struct,
//! the tool runs to completion and returns text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - rmcp ToolRouter builder for the STDIO transport
//! - `registry.rs` - Name-based dispatch for the HTTP/SSE transport
//! - `context.rs` - Configuration and storage handed to each tool
//! - `error.rs` - Dispatch error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/`
//! 2. Define params, execute(), http_handler(), to_tool() and create_route()
//! 3. Export in `definitions/mod.rs`
//! 4. Add the route in `router.rs` and the dispatch arm in `registry.rs`

mod context;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use context::ToolContext;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
