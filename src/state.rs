// src/state.rs

use crate::pipeline::Pipeline;

/// Shared application state for the HTTP surface. Requests share no mutable
/// state; the pipeline itself is read-only once built.
pub struct AppState {
    pub pipeline: Pipeline,
}
