//! Weather lookup tool.
//!
//! Fetches the plain-text report for a city from a wttr.in-compatible
//! endpoint. One GET per call, bounded by the configured timeout, no retry.
//! Every failure is returned as text starting with `Error`.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use reqwest::{StatusCode, Url};
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, instrument};

use super::common::{error_result, parse_arguments, run_guarded, success_result, to_http_value};
use crate::core::config::WeatherConfig;
use crate::domains::tools::{ToolContext, ToolError};

/// Parameters for the weather tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherParams {
    /// City to look up, e.g. "London" or "New York".
    pub city: String,
}

/// Ways a weather lookup can fail.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("city must not be empty")]
    EmptyCity,

    #[error("invalid weather endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("failed to create HTTP client: {0}")]
    Client(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("weather service returned {0}")]
    Status(StatusCode),

    #[error("{0}")]
    Request(String),
}

pub struct WeatherTool;

impl WeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_current_weather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get current weather for a city";

    /// Execute the tool logic.
    pub async fn execute(params: WeatherParams, context: Arc<ToolContext>) -> CallToolResult {
        info!("Tool called: get_current_weather({})", params.city);

        match Self::fetch(&params.city, &context.config().weather).await {
            Ok(report) => success_result(report),
            Err(e) => error_result(format!("Error fetching weather data: {}", e)),
        }
    }

    /// Build `<endpoint>/<city>` with the city percent-encoded as one segment.
    pub fn report_url(endpoint: &str, city: &str) -> Result<Url, WeatherError> {
        let mut url =
            Url::parse(endpoint).map_err(|e| WeatherError::InvalidEndpoint(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| WeatherError::InvalidEndpoint(endpoint.to_string()))?
            .pop_if_empty()
            .push(city);
        Ok(url)
    }

    #[instrument(skip(config), fields(endpoint = %config.endpoint))]
    async fn fetch(city: &str, config: &WeatherConfig) -> Result<String, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        let url = Self::report_url(&config.endpoint, city)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::Client(e.to_string()))?;

        let response = client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                WeatherError::Timeout(config.timeout_secs)
            } else if e.is_connect() {
                WeatherError::Connect(e.to_string())
            } else {
                WeatherError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                WeatherError::Timeout(config.timeout_secs)
            } else {
                WeatherError::Request(e.to_string())
            }
        })?;

        debug!("Weather report received: {} bytes", body.len());
        Ok(body)
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        context: Arc<ToolContext>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: WeatherParams = parse_arguments(arguments)?;
        let result = run_guarded(Self::NAME, Self::execute(params, context)).await;
        Ok(to_http_value(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WeatherParams>(),
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
                let params: WeatherParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(run_guarded(Self::NAME, Self::execute(params, context)).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::result_text;
    use super::*;
    use crate::core::config::Config;
    use axum::{Router, http::StatusCode as AxumStatus, routing::get};

    /// Serve a stand-in weather endpoint on an ephemeral port.
    async fn spawn_endpoint(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn context_for(endpoint: &str, timeout_secs: u64) -> Arc<ToolContext> {
        let mut config = Config::default();
        config.weather = WeatherConfig {
            endpoint: endpoint.to_string(),
            timeout_secs,
        };
        Arc::new(ToolContext::new(Arc::new(config)))
    }

    #[test]
    fn test_report_url_encodes_city() {
        let url = WeatherTool::report_url("https://wttr.in", "New York").unwrap();
        assert_eq!(url.as_str(), "https://wttr.in/New%20York");
    }

    #[test]
    fn test_report_url_keeps_base_path() {
        let url = WeatherTool::report_url("http://localhost:9000/weather/", "Oslo").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/weather/Oslo");
    }

    #[test]
    fn test_report_url_rejects_garbage_endpoint() {
        assert!(matches!(
            WeatherTool::report_url("not a url", "Oslo"),
            Err(WeatherError::InvalidEndpoint(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_city_is_an_error_string() {
        let context = context_for("http://127.0.0.1:1", 1);
        let params = WeatherParams {
            city: "   ".to_string(),
        };
        let result = WeatherTool::execute(params, context).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).starts_with("Error"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error_string() {
        let context = context_for("http://127.0.0.1:1", 2);
        let params = WeatherParams {
            city: "London".to_string(),
        };
        let result = WeatherTool::execute(params, context).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).starts_with("Error fetching weather data"));
    }

    #[tokio::test]
    async fn test_success_returns_body() {
        let app = Router::new().route("/{city}", get(|| async { "Sunny +21°C" }));
        let endpoint = spawn_endpoint(app).await;

        let params = WeatherParams {
            city: "Lisbon".to_string(),
        };
        let result = WeatherTool::execute(params, context_for(&endpoint, 5)).await;
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "Sunny +21°C");
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let app = Router::new().route(
            "/{city}",
            get(|| async { (AxumStatus::SERVICE_UNAVAILABLE, "down") }),
        );
        let endpoint = spawn_endpoint(app).await;

        let params = WeatherParams {
            city: "Lisbon".to_string(),
        };
        let result = WeatherTool::execute(params, context_for(&endpoint, 5)).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("503"));
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let app = Router::new().route(
            "/{city}",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );
        let endpoint = spawn_endpoint(app).await;

        let params = WeatherParams {
            city: "Lisbon".to_string(),
        };
        let result = WeatherTool::execute(params, context_for(&endpoint, 1)).await;
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("timed out"));
    }

    #[tokio::test]
    async fn test_http_handler_missing_city() {
        let result = WeatherTool::http_handler(serde_json::json!({}), context_for("http://x", 1)).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    #[ignore = "requires network access to wttr.in"]
    async fn test_live_lookup() {
        let context = Arc::new(ToolContext::new(Arc::new(Config::default())));
        let params = WeatherParams {
            city: "London".to_string(),
        };
        let result = WeatherTool::execute(params, context).await;
        assert!(!result.is_error.unwrap_or(false));
    }
}
