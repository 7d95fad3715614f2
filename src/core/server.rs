//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The STDIO transport reaches them through the rmcp `ToolRouter` built in
//! `domains/tools/router.rs`; the HTTP/SSE transport goes through
//! `ToolRegistry`. Adding a tool does not require modifying this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use super::error::Result as ServerResult;
use crate::domains::tools::{ToolContext, ToolRegistry, build_tool_router};

/// Instructions sent to clients during initialization.
pub const INSTRUCTIONS: &str = "Demo MCP server. Tools: add, get_secret_word, get_current_weather, \
     get_current_time, add_coding_language, list_coding_languages, test_database_connection.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Cloning is
/// cheap; every clone shares the same configuration and storage accessor.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Name-based dispatch used by the HTTP/SSE transport.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server backed by PostgreSQL.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let context = Arc::new(ToolContext::new(config.clone()));
        Self::with_context(config, context)
    }

    /// Create a server around an existing tool context.
    pub fn with_context(config: Arc<Config>, context: Arc<ToolContext>) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(context.clone()),
            registry: Arc::new(ToolRegistry::new(context)),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> ServerResult<serde_json::Value> {
        Ok(self.registry.call_tool(name, arguments).await?)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
