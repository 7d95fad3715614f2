//! Tool Router - builds the rmcp ToolRouter used by the STDIO transport.
//!
//! Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::ToolContext;
use super::definitions::{
    AddLanguageTool, AddTool, CurrentTimeTool, DatabaseStatusTool, ListLanguagesTool,
    SecretWordTool, WeatherTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(context: Arc<ToolContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AddTool::create_route())
        .with_route(SecretWordTool::create_route())
        .with_route(WeatherTool::create_route(context.clone()))
        .with_route(CurrentTimeTool::create_route())
        .with_route(AddLanguageTool::create_route(context.clone()))
        .with_route(ListLanguagesTool::create_route(context.clone()))
        .with_route(DatabaseStatusTool::create_route(context))
}
