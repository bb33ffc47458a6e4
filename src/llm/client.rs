// src/llm/client.rs

//! Low-level client for the OpenAI-compatible chat completions API.
//! No wrappers; just reqwest and Rust, as the universe intended.

use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::config::TempoConfig;

/// Failure at the completion boundary. Propagated to the caller as-is:
/// no retry, no fallback reply.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("no content in completion response")]
    MalformedResponse,
}

/// One role-tagged message in a completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Clone)]
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub api_base: String,
    pub model: String,
}

impl OpenAIClient {
    /// Builds the client from config. The request timeout covers each
    /// outbound completion call; a hung upstream surfaces as an error once
    /// it elapses.
    pub fn new(config: &TempoConfig) -> Result<Self> {
        if config.openai_api_key.trim().is_empty() {
            anyhow::bail!("OPENAI_API_KEY is not set");
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key: config.openai_api_key.clone(),
            api_base: config.openai_base_url.clone(),
            model: config.model.clone(),
        })
    }

    /// Universal request builder for the JSON endpoints
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(
                method,
                format!(
                    "{}/{}",
                    self.api_base.trim_end_matches('/'),
                    path.trim_start_matches('/')
                ),
            )
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
    }

    /// One chat completion round trip; returns the first choice's content.
    pub async fn chat_completion(
        &self,
        messages: &[ChatMessage],
        temperature: f64,
        max_tokens: Option<u32>,
    ) -> Result<String, CompletionError> {
        let mut body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": temperature,
        });
        if let Some(cap) = max_tokens {
            body["max_tokens"] = json!(cap);
        }

        let resp = self
            .request(Method::POST, "chat/completions")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status, body });
        }

        let resp_json: Value = resp.json().await?;
        let content = resp_json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(CompletionError::MalformedResponse)?
            .to_string();

        Ok(content)
    }
}
