//! Transport configuration types.

use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_HTTP_PORT: u16 = 8080;

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    Stdio,

    /// HTTP transport: SSE event stream plus JSON-RPC over POST.
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for the synchronous JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Path clients open to receive the event stream.
    #[serde(default = "default_sse_path")]
    pub sse_path: String,

    /// Path clients POST session messages to.
    #[serde(default = "default_message_path")]
    pub message_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_rpc_path() -> String {
    "/mcp".to_string()
}

fn default_sse_path() -> String {
    "/sse".to_string()
}

fn default_message_path() -> String {
    "/messages/".to_string()
}

fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::Stdio
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            sse_path: default_sse_path(),
            message_path: default_message_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the transport through an arbitrary key lookup.
    ///
    /// `MCP_TRANSPORT` wins when set. Otherwise the presence of `PORT`
    /// (the convention of most hosting platforms) selects HTTP, and its
    /// absence selects stdio.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let transport = get("MCP_TRANSPORT").unwrap_or_default().to_lowercase();
        let platform_port = get("PORT");

        match transport.as_str() {
            "stdio" => Self::Stdio,
            "http" | "sse" => Self::Http(HttpConfig::from_lookup(&get, platform_port.is_some())),
            _ if platform_port.is_some() => Self::Http(HttpConfig::from_lookup(&get, true)),
            _ => Self::Stdio,
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            Self::Http(cfg) => format!(
                "HTTP on {}:{} (SSE {}, JSON-RPC {})",
                cfg.host, cfg.port, cfg.sse_path, cfg.rpc_path
            ),
        }
    }

    /// Check if this transport is the standard STDIO mode.
    pub fn is_stdio(&self) -> bool {
        matches!(self, Self::Stdio)
    }
}

impl HttpConfig {
    fn from_lookup<F>(get: &F, public: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match get("PORT").or_else(|| get("MCP_HTTP_PORT")) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid PORT value: {}", raw);
                DEFAULT_HTTP_PORT
            }),
            None => DEFAULT_HTTP_PORT,
        };

        // A platform-assigned PORT is useless on loopback.
        let host = get("MCP_HTTP_HOST").unwrap_or_else(|| {
            if public {
                "0.0.0.0".to_string()
            } else {
                default_host()
            }
        });

        let enable_cors = get("MCP_HTTP_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        Self {
            port,
            host,
            rpc_path: get("MCP_HTTP_PATH").unwrap_or_else(default_rpc_path),
            sse_path: default_sse_path(),
            message_path: default_message_path(),
            enable_cors,
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_no_port_selects_stdio() {
        let config = TransportConfig::from_lookup(lookup(&[]));
        assert!(config.is_stdio());
    }

    #[test]
    fn test_port_selects_http_on_all_interfaces() {
        let config = TransportConfig::from_lookup(lookup(&[("PORT", "9090")]));
        match config {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.port, 9090);
                assert_eq!(cfg.host, "0.0.0.0");
                assert_eq!(cfg.sse_path, "/sse");
            }
            other => panic!("expected HTTP transport, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_port_falls_back_to_default() {
        let config = TransportConfig::from_lookup(lookup(&[("PORT", "abc")]));
        match config {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.port, DEFAULT_HTTP_PORT);
                assert_eq!(cfg.host, "0.0.0.0");
            }
            other => panic!("expected HTTP transport, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_port_selects_stdio() {
        let config = TransportConfig::from_lookup(lookup(&[("PORT", "")]));
        assert!(config.is_stdio());
    }

    #[test]
    fn test_explicit_stdio_overrides_port() {
        let config =
            TransportConfig::from_lookup(lookup(&[("PORT", "9090"), ("MCP_TRANSPORT", "stdio")]));
        assert!(config.is_stdio());
    }

    #[test]
    fn test_explicit_sse_without_port_uses_loopback() {
        let config = TransportConfig::from_lookup(lookup(&[
            ("MCP_TRANSPORT", "SSE"),
            ("MCP_HTTP_PORT", "7000"),
        ]));
        match config {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.address(), "127.0.0.1:7000");
            }
            other => panic!("expected HTTP transport, got {:?}", other),
        }
    }
}
