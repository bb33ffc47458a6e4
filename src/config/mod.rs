// src/config/mod.rs

use std::str::FromStr;

use anyhow::{Context, Result};

/// Process configuration, built once at startup and handed to the components
/// that need it. The OpenAI credential is the only required value; everything
/// else has a default.
#[derive(Debug, Clone)]
pub struct TempoConfig {
    // ── OpenAI Configuration
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub chat_temperature: f64,

    // ── Routing
    pub time_prefix: String,
    pub keyword_fast_path: bool,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Timeouts (in seconds)
    pub request_timeout_secs: u64,

    // ── Logging
    pub log_level: String,
}

// Tolerates values with inline comments and stray whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl TempoConfig {
    /// Loads configuration from the environment, reading a `.env` file first
    /// if one exists. Fails when `OPENAI_API_KEY` is missing or empty.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .context("OPENAI_API_KEY is not set")?;

        Ok(Self {
            openai_api_key,
            openai_base_url: env_var_or("OPENAI_BASE_URL", "https://api.openai.com/v1".to_string()),
            model: env_var_or("TEMPO_MODEL", "gpt-4o-mini".to_string()),
            chat_temperature: env_var_or("TEMPO_CHAT_TEMPERATURE", 0.7),
            time_prefix: env_var_or("TEMPO_TIME_PREFIX", "Текущее время UTC: ".to_string()),
            keyword_fast_path: env_var_or("TEMPO_KEYWORD_FAST_PATH", false),
            host: env_var_or("TEMPO_HOST", "0.0.0.0".to_string()),
            port: env_var_or("TEMPO_PORT", 3000),
            request_timeout_secs: env_var_or("TEMPO_REQUEST_TIMEOUT_SECS", 60),
            log_level: env_var_or("TEMPO_LOG_LEVEL", "info".to_string()),
        })
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> TempoConfig {
    TempoConfig {
        openai_api_key: "test-key".to_string(),
        openai_base_url: "http://127.0.0.1:9".to_string(),
        model: "gpt-4o-mini".to_string(),
        chat_temperature: 0.7,
        time_prefix: "Текущее время UTC: ".to_string(),
        keyword_fast_path: false,
        host: "127.0.0.1".to_string(),
        port: 3000,
        request_timeout_secs: 5,
        log_level: "debug".to_string(),
    }
}
