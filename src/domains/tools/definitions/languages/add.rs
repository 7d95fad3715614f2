//! Insert a row into the coding-language table.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{error, info};

use super::super::common::{error_result, parse_arguments, run_guarded, success_result, to_http_value};
use crate::domains::storage::NewLanguage;
use crate::domains::tools::{ToolContext, ToolError};

/// Parameters for adding a coding language.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddLanguageParams {
    /// Name of the programming language (e.g., 'Python', 'JavaScript').
    pub name: String,

    /// Whether the language is statically typed (default: false).
    #[serde(default, alias = "isStatic")]
    pub is_static: bool,

    /// Creator/author of the language entry (default: 'system').
    #[serde(default = "default_creator")]
    pub creator: String,
}

fn default_creator() -> String {
    "system".to_string()
}

impl From<AddLanguageParams> for NewLanguage {
    fn from(params: AddLanguageParams) -> Self {
        Self {
            name: params.name,
            is_static: params.is_static,
            creator: params.creator,
        }
    }
}

pub struct AddLanguageTool;

impl AddLanguageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_coding_language";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add a new coding language to the database. \
         Returns a success message with the created language ID.";

    /// Execute the tool logic: exactly one committed insert.
    pub async fn execute(params: AddLanguageParams, context: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Tool called: add_coding_language({}, {}, {})",
            params.name, params.is_static, params.creator
        );

        let entry = NewLanguage::from(params);
        match context.store().insert(&entry).await {
            Ok(id) => {
                info!(
                    "Successfully added coding language: {} with ID: {}",
                    entry.name, id
                );
                success_result(format!(
                    "Successfully added coding language '{}' with ID: {} (isStatic: {}, creator: {})",
                    entry.name, id, entry.is_static, entry.creator
                ))
            }
            Err(e) if e.is_configuration() => error_result(format!("Error: {}", e)),
            Err(e) => {
                error!("Database error while adding coding language: {}", e);
                error_result(format!("Error adding coding language: {}", e))
            }
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        context: Arc<ToolContext>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: AddLanguageParams = parse_arguments(arguments)?;
        let result = run_guarded(Self::NAME, Self::execute(params, context)).await;
        Ok(to_http_value(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddLanguageParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let context = context.clone();
            async move {
                let params: AddLanguageParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(run_guarded(Self::NAME, Self::execute(params, context)).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::common::result_text;
    use super::*;
    use crate::core::config::Config;
    use crate::domains::storage::memory::MemoryLanguageStore;

    fn memory_context() -> Arc<ToolContext> {
        Arc::new(ToolContext::with_store(
            Arc::new(Config::default()),
            Arc::new(MemoryLanguageStore::new()),
        ))
    }

    #[test]
    fn test_params_defaults() {
        let params: AddLanguageParams = serde_json::from_str(r#"{"name": "Ruby"}"#).unwrap();
        assert!(!params.is_static);
        assert_eq!(params.creator, "system");
    }

    #[test]
    fn test_params_accepts_camel_case_flag() {
        let params: AddLanguageParams =
            serde_json::from_str(r#"{"name": "Java", "isStatic": true, "creator": "Oracle"}"#)
                .unwrap();
        assert!(params.is_static);
        assert_eq!(params.creator, "Oracle");
    }

    #[tokio::test]
    async fn test_add_reports_generated_id() {
        let params = AddLanguageParams {
            name: "Java".to_string(),
            is_static: true,
            creator: "Oracle".to_string(),
        };
        let result = AddLanguageTool::execute(params, memory_context()).await;
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(
            result_text(&result),
            "Successfully added coding language 'Java' with ID: 1 (isStatic: true, creator: Oracle)"
        );
    }

    #[tokio::test]
    async fn test_add_without_password_is_configuration_error() {
        // Default config has no DB_PASSWORD and talks to PostgreSQL.
        let context = Arc::new(ToolContext::new(Arc::new(Config::default())));
        let params = AddLanguageParams {
            name: "Go".to_string(),
            is_static: true,
            creator: "Google".to_string(),
        };
        let result = AddLanguageTool::execute(params, context).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).starts_with("Error: Database password not configured"));
    }

    #[tokio::test]
    async fn test_add_query_failure_is_reported() {
        let context = Arc::new(ToolContext::with_store(
            Arc::new(Config::default()),
            Arc::new(MemoryLanguageStore::failing("relation does not exist")),
        ));
        let params = AddLanguageParams {
            name: "Go".to_string(),
            is_static: true,
            creator: "Google".to_string(),
        };
        let result = AddLanguageTool::execute(params, context).await;
        assert_eq!(
            result_text(&result),
            "Error adding coding language: relation does not exist"
        );
    }

    #[tokio::test]
    async fn test_http_handler_requires_name() {
        let result =
            AddLanguageTool::http_handler(serde_json::json!({ "is_static": true }), memory_context())
                .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
