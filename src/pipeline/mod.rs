// src/pipeline/mod.rs
// Boundary shapes and the single-step pipeline wrapping the router.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::services::router::ChatRouter;

/// Graph identifier recorded in the CLI descriptor.
pub const GRAPH_NAME: &str = "chat_graph";

/// Module-qualified entry point recorded in the CLI descriptor.
pub const ENTRY_POINT: &str = "tempo::pipeline::Pipeline";

/// Input shape: exactly one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatRequest {
    pub message: String,
}

/// Output shape: exactly one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Single-step pipeline: request in, routed response out. All branching
/// lives in [`ChatRouter`]; this type only fixes the boundary shapes for
/// the hosting process.
pub struct Pipeline {
    router: ChatRouter,
}

impl Pipeline {
    pub fn new(router: ChatRouter) -> Self {
        Self { router }
    }

    pub async fn run(&self, input: ChatRequest) -> Result<ChatResponse> {
        let response = self.router.route(&input.message).await?;
        Ok(ChatResponse { response })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_is_exactly_one_field() {
        let parsed: ChatRequest = serde_json::from_value(json!({"message": "hi"})).unwrap();
        assert_eq!(parsed.message, "hi");

        let extra = serde_json::from_value::<ChatRequest>(json!({"message": "hi", "extra": 1}));
        assert!(extra.is_err());
    }

    #[test]
    fn response_serializes_single_field() {
        let value = serde_json::to_value(ChatResponse {
            response: "ok".to_string(),
        })
        .unwrap();
        assert_eq!(value, json!({"response": "ok"}));
    }
}
