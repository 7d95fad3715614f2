//! Database connectivity check.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{error, info};

use super::super::common::{NoParams, error_result, run_guarded, success_result, to_http_value};
use crate::domains::storage::TABLE_NAME;
use crate::domains::tools::{ToolContext, ToolError};

pub struct DatabaseStatusTool;

impl DatabaseStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "test_database_connection";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Test the database connection and report server version and table status";

    pub async fn execute(context: Arc<ToolContext>) -> CallToolResult {
        info!("Tool called: test_database_connection()");

        match context.store().status().await {
            Ok(status) => success_result(format!(
                "Database Connection: SUCCESS\n\
                 PostgreSQL Version: {}\n\
                 {} table: {}\n\
                 Connected as: {}",
                status.server_version,
                TABLE_NAME,
                if status.table_exists { "EXISTS" } else { "MISSING" },
                status.target
            )),
            Err(e) => {
                error!("Database connection test failed: {}", e);
                error_result(format!(
                    "Error: Database Connection: FAILED\nAttempted: {}\nReason: {}",
                    context.config().database.target(),
                    e
                ))
            }
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        _arguments: serde_json::Value,
        context: Arc<ToolContext>,
    ) -> Result<serde_json::Value, ToolError> {
        let result = run_guarded(Self::NAME, Self::execute(context)).await;
        Ok(to_http_value(result))
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
    pub fn create_route<S>(context: Arc<ToolContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let context = context.clone();
            async move { Ok(run_guarded(Self::NAME, Self::execute(context)).await) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::common::result_text;
    use super::*;
    use crate::core::config::Config;
    use crate::domains::storage::memory::MemoryLanguageStore;

    #[tokio::test]
    async fn test_status_success_report() {
        let context = Arc::new(ToolContext::with_store(
            Arc::new(Config::default()),
            Arc::new(MemoryLanguageStore::new()),
        ));
        let result = DatabaseStatusTool::execute(context).await;
        let text = result_text(&result);
        assert!(text.starts_with("Database Connection: SUCCESS"));
        assert!(text.contains("codingLanguage table: EXISTS"));
    }

    #[tokio::test]
    async fn test_status_failure_never_leaks_password() {
        let mut config = Config::default();
        config.database.host = "127.0.0.1".to_string();
        config.database.port = 1;
        config.database.password = Some("hunter2".to_string());
        config.database.connect_timeout_secs = 5;

        let context = Arc::new(ToolContext::new(Arc::new(config)));
        let result = DatabaseStatusTool::execute(context).await;
        let text = result_text(&result);
        assert!(result.is_error.unwrap_or(false));
        assert!(text.starts_with("Error: Database Connection: FAILED"));
        assert!(!text.contains("hunter2"));
    }
}
