//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Name-based dispatch for the HTTP/SSE transport
//! - Tool metadata for listing

use std::sync::Arc;

use tracing::warn;

use super::definitions::{
    AddLanguageTool, AddTool, CurrentTimeTool, DatabaseStatusTool, ListLanguagesTool,
    SecretWordTool, WeatherTool,
};
use super::{ToolContext, ToolError};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    context: Arc<ToolContext>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(context: Arc<ToolContext>) -> Self {
        Self { context }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AddTool::NAME,
            SecretWordTool::NAME,
            WeatherTool::NAME,
            CurrentTimeTool::NAME,
            AddLanguageTool::NAME,
            ListLanguagesTool::NAME,
            DatabaseStatusTool::NAME,
        ]
    }

    /// Dispatch a tool call to the appropriate handler by name.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let context = self.context.clone();
        match name {
            AddTool::NAME => AddTool::http_handler(arguments),
            SecretWordTool::NAME => SecretWordTool::http_handler(arguments),
            WeatherTool::NAME => WeatherTool::http_handler(arguments, context).await,
            CurrentTimeTool::NAME => CurrentTimeTool::http_handler(arguments),
            AddLanguageTool::NAME => AddLanguageTool::http_handler(arguments, context).await,
            ListLanguagesTool::NAME => ListLanguagesTool::http_handler(arguments, context).await,
            DatabaseStatusTool::NAME => DatabaseStatusTool::http_handler(arguments, context).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
