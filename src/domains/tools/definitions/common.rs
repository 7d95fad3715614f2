//! Helpers shared by the tool definitions.

use std::future::Future;

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::domains::tools::ToolError;

/// Parameters of a tool that takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Create an error result with a formatted message.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    let message = message.into();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Create a success result with text content.
pub fn success_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Deserialize HTTP-supplied arguments into a tool's parameter struct.
///
/// A missing or `null` argument object is treated as `{}`.
pub fn parse_arguments<T: DeserializeOwned>(arguments: serde_json::Value) -> Result<T, ToolError> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::json!({}),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Shape a result the way the HTTP transport returns it.
pub fn to_http_value(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

/// Run a tool body in its own task so a panic becomes an error result
/// instead of tearing down the connection.
pub async fn run_guarded<F>(tool: &'static str, body: F) -> CallToolResult
where
    F: Future<Output = CallToolResult> + Send + 'static,
{
    match tokio::spawn(body).await {
        Ok(result) => result,
        Err(e) => {
            error!("Unexpected failure in {}: {}", tool, e);
            CallToolResult::error(vec![Content::text(format!("Unexpected error: {}", e))])
        }
    }
}

/// First text block of a result.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        city: String,
    }

    #[test]
    fn test_parse_arguments_null_is_empty_object() {
        let params: NoParams = parse_arguments(serde_json::Value::Null).unwrap();
        let _ = params;
    }

    #[test]
    fn test_parse_arguments_missing_field() {
        let result: Result<Sample, _> = parse_arguments(serde_json::json!({}));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_parse_arguments_ok() {
        let params: Sample = parse_arguments(serde_json::json!({ "city": "Oslo" })).unwrap();
        assert_eq!(params.city, "Oslo");
    }

    #[test]
    fn test_http_value_flags_errors() {
        let value = to_http_value(error_result("Error: nope"));
        assert_eq!(value["isError"], serde_json::json!(true));

        let value = to_http_value(success_result("fine"));
        assert_eq!(value["isError"], serde_json::json!(false));
    }

    #[tokio::test]
    async fn test_run_guarded_converts_panics() {
        let result = run_guarded("boom", async { panic!("kaboom") }).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).starts_with("Unexpected error"));
    }
}
