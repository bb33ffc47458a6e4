// src/llm/intent.rs

use anyhow::Result;
use tracing::debug;

use crate::llm::client::{ChatMessage, OpenAIClient};

// The instruction pins the model to a one-word TRUE/FALSE answer.
const CLASSIFIER_SYSTEM_PROMPT: &str = "Ты классификатор: отвечай только TRUE или FALSE.\nTRUE — если спрашивают текущее время; FALSE — если нет.";

// Enough for a one-word answer, nothing more.
const CLASSIFIER_MAX_TOKENS: u32 = 5;

/// Interprets a classifier reply: time branch iff the trimmed, upper-cased
/// reply starts with `T`. Tolerates a full word ("TRUE", "true") as well as a
/// bare "T"; an empty reply or anything else means "not a time request".
pub fn reply_indicates_time(reply: &str) -> bool {
    reply.trim().to_uppercase().starts_with('T')
}

impl OpenAIClient {
    /// Asks the model whether the message requests the current time.
    /// One zero-temperature completion per call, never cached, never
    /// retried; upstream failures propagate with no default classification.
    pub async fn is_time_request(&self, message: &str) -> Result<bool> {
        let messages = [
            ChatMessage::system(CLASSIFIER_SYSTEM_PROMPT),
            ChatMessage::user(message),
        ];
        let reply = self
            .chat_completion(&messages, 0.0, Some(CLASSIFIER_MAX_TOKENS))
            .await?;

        let is_time = reply_indicates_time(&reply);
        debug!("classifier reply {:?} -> time_request={}", reply, is_time);
        Ok(is_time)
    }
}
