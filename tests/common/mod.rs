// tests/common/mod.rs
// Scripted OpenAI-compatible mock server shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};

use tempo::config::TempoConfig;

/// Scripted reply for one completion call, consumed in order.
pub enum MockReply {
    Content(&'static str),
    Status(u16),
}

#[derive(Clone)]
pub struct MockState {
    pub requests: Arc<Mutex<Vec<Value>>>,
    replies: Arc<Mutex<Vec<MockReply>>>,
}

pub struct MockOpenAI {
    pub state: MockState,
    pub base_url: String,
}

async fn completions(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.requests.lock().unwrap().push(body);

    let mut replies = state.replies.lock().unwrap();
    if replies.is_empty() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "mock replies exhausted").into_response();
    }

    match replies.remove(0) {
        MockReply::Content(text) => Json(json!({
            "choices": [{ "message": { "role": "assistant", "content": text } }]
        }))
        .into_response(),
        MockReply::Status(code) => StatusCode::from_u16(code).unwrap().into_response(),
    }
}

/// Binds the mock on an ephemeral port and serves it for the rest of the test.
pub async fn spawn_mock(replies: Vec<MockReply>) -> MockOpenAI {
    let state = MockState {
        requests: Arc::new(Mutex::new(Vec::new())),
        replies: Arc::new(Mutex::new(replies)),
    };

    let app = Router::new()
        .route("/chat/completions", post(completions))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockOpenAI {
        state,
        base_url: format!("http://{}", addr),
    }
}

/// Config pointed at the mock; mirrors the runtime defaults otherwise.
pub fn test_config(base_url: String) -> TempoConfig {
    TempoConfig {
        openai_api_key: "test-key".to_string(),
        openai_base_url: base_url,
        model: "gpt-4o-mini".to_string(),
        chat_temperature: 0.7,
        time_prefix: "Текущее время UTC: ".to_string(),
        keyword_fast_path: false,
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 5,
        log_level: "debug".to_string(),
    }
}
