//! List every row of the coding-language table.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{error, info};

use super::super::common::{NoParams, error_result, run_guarded, success_result, to_http_value};
use crate::domains::storage::LanguageEntry;
use crate::domains::tools::{ToolContext, ToolError};

/// Returned instead of an empty listing.
pub const NO_ENTRIES_MESSAGE: &str = "No coding languages found in the database.";

pub struct ListLanguagesTool;

impl ListLanguagesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_coding_languages";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List all coding languages from the database, ordered by ID";

    /// Render rows as a header plus one line per entry.
    pub fn format_listing(entries: &[LanguageEntry]) -> String {
        if entries.is_empty() {
            return NO_ENTRIES_MESSAGE.to_string();
        }

        let mut out = String::from("Coding Languages:\n");
        out.push_str(&"-".repeat(50));
        out.push('\n');
        for entry in entries {
            out.push_str(&entry.display_line());
            out.push('\n');
        }
        out
    }

    /// Execute the tool logic: exactly one read-only query.
    pub async fn execute(context: Arc<ToolContext>) -> CallToolResult {
        info!("Tool called: list_coding_languages()");

        match context.store().list().await {
            Ok(entries) => {
                info!("Retrieved {} coding languages", entries.len());
                success_result(Self::format_listing(&entries))
            }
            Err(e) if e.is_configuration() => error_result(format!("Error: {}", e)),
            Err(e) => {
                error!("Database error while listing coding languages: {}", e);
                error_result(format!("Error retrieving coding languages: {}", e))
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
    use super::super::add::{AddLanguageParams, AddLanguageTool};
    use super::*;
    use crate::core::config::Config;
    use crate::domains::storage::memory::MemoryLanguageStore;

    fn memory_context() -> Arc<ToolContext> {
        Arc::new(ToolContext::with_store(
            Arc::new(Config::default()),
            Arc::new(MemoryLanguageStore::new()),
        ))
    }

    #[tokio::test]
    async fn test_empty_table_returns_no_entries_message() {
        let result = ListLanguagesTool::execute(memory_context()).await;
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), NO_ENTRIES_MESSAGE);
    }

    #[tokio::test]
    async fn test_insert_then_list_shows_new_row() {
        let context = memory_context();

        for (name, is_static, creator) in [("Python", false, "system"), ("Java", true, "Oracle")] {
            let params = AddLanguageParams {
                name: name.to_string(),
                is_static,
                creator: creator.to_string(),
            };
            AddLanguageTool::execute(params, context.clone()).await;
        }

        let result = ListLanguagesTool::execute(context).await;
        let text = result_text(&result);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Coding Languages:");
        assert_eq!(lines[1], "-".repeat(50));
        assert_eq!(lines[2], "ID: 1 | Python | Type: Dynamic | Creator: system");
        assert_eq!(lines[3], "ID: 2 | Java | Type: Static | Creator: Oracle");
        assert_eq!(lines.len(), 4);
    }

    #[tokio::test]
    async fn test_list_without_password_is_configuration_error() {
        let context = Arc::new(ToolContext::new(Arc::new(Config::default())));
        let result = ListLanguagesTool::execute(context).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).starts_with("Error: Database password not configured"));
    }

    #[tokio::test]
    async fn test_list_query_failure_is_reported() {
        let context = Arc::new(ToolContext::with_store(
            Arc::new(Config::default()),
            Arc::new(MemoryLanguageStore::failing("permission denied")),
        ));
        let result = ListLanguagesTool::execute(context).await;
        assert_eq!(
            result_text(&result),
            "Error retrieving coding languages: permission denied"
        );
    }
}
