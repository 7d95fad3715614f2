//! Random secret word tool.

use futures::FutureExt;
use rand::Rng;
use rand::seq::SliceRandom;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use super::common::{NoParams, success_result, to_http_value};
use crate::domains::tools::ToolError;

/// The words a caller can receive, each equally likely.
pub const SECRET_WORDS: [&str; 3] = ["apple", "banana", "cherry"];

pub struct SecretWordTool;

impl SecretWordTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_secret_word";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a random secret word";

    /// Draw one word uniformly from [`SECRET_WORDS`].
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
        SECRET_WORDS.choose(rng).copied().unwrap_or(SECRET_WORDS[0])
    }

    pub fn execute() -> CallToolResult {
        info!("Tool called: get_secret_word()");
        success_result(Self::pick(&mut rand::thread_rng()))
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

#[cfg(test)]
mod tests {
    use super::super::common::result_text;
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_word_is_always_from_the_set() {
        for _ in 0..100 {
            let result = SecretWordTool::execute();
            assert!(SECRET_WORDS.contains(&result_text(&result)));
        }
    }

    #[test]
    fn test_every_word_is_reachable() {
        let mut rng = rand::thread_rng();
        let seen: HashSet<&str> = (0..300).map(|_| SecretWordTool::pick(&mut rng)).collect();
        assert_eq!(seen.len(), SECRET_WORDS.len());
    }
}
