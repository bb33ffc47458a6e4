// src/llm/mod.rs
// LLM module exports and submodule declarations

pub mod client;
pub mod intent;

// Export the main client
pub use client::{ChatMessage, CompletionError, OpenAIClient};
