//! Current local time tool.

use chrono::Local;
use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use super::common::{NoParams, success_result, to_http_value};
use crate::domains::tools::ToolError;

/// `YYYY-MM-DD HH:MM:SS`
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct CurrentTimeTool;

impl CurrentTimeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_current_time";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the current local time formatted as YYYY-MM-DD HH:MM:SS";

    pub fn now() -> String {
        Local::now().format(TIME_FORMAT).to_string()
    }

    pub fn execute() -> CallToolResult {
        info!("Tool called: get_current_time()");
        success_result(Self::now())
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub fn http_handler(_arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        Ok(to_http_value(Self::execute()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<NoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |_ctx: ToolCallContext<'_, S>| {
            async move { Ok(Self::execute()) }.boxed()
        })
    }
}
