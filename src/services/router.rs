// src/services/router.rs

use anyhow::Result;
use tracing::{debug, info};

use crate::clock;
use crate::config::TempoConfig;
use crate::llm::client::{ChatMessage, OpenAIClient};

// Cheap pre-classifier check, off unless TEMPO_KEYWORD_FAST_PATH is set.
const TIME_KEYWORDS: [&str; 3] = ["сколько", "время", "time"];

/// Routes one message: time questions are answered from the local clock,
/// everything else is proxied to the model. Exactly one branch runs per call.
pub struct ChatRouter {
    client: OpenAIClient,
    time_prefix: String,
    chat_temperature: f64,
    keyword_fast_path: bool,
}

impl ChatRouter {
    pub fn new(client: OpenAIClient, config: &TempoConfig) -> Self {
        Self {
            client,
            time_prefix: config.time_prefix.clone(),
            chat_temperature: config.chat_temperature,
            keyword_fast_path: config.keyword_fast_path,
        }
    }

    pub async fn route(&self, message: &str) -> Result<String> {
        let text = message.trim();

        if self.is_time_request(text).await? {
            info!("time request answered locally");
            return Ok(format!("{}{}", self.time_prefix, clock::now_utc()));
        }

        // User message only — the classifier instruction never leaks into
        // the chat branch.
        let messages = [ChatMessage::user(text)];
        let reply = self
            .client
            .chat_completion(&messages, self.chat_temperature, None)
            .await?;

        Ok(reply.trim().to_string())
    }

    async fn is_time_request(&self, text: &str) -> Result<bool> {
        if self.keyword_fast_path {
            let low = text.to_lowercase();
            if TIME_KEYWORDS.iter().any(|k| low.contains(k)) {
                debug!("keyword fast path hit");
                return Ok(true);
            }
        }
        self.client.is_time_request(text).await
    }
}
