use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::services::session::GameSession;
use crate::services::vocab::Vocab;

/// Application state shared across all handlers. The vocabulary is
/// built once at startup and read-only afterward; sessions are keyed
/// by the id handed out by the new-game endpoint, and the mutex
/// serializes concurrent submissions for the same session.
pub struct AppState {
    pub vocab: Vocab,
    pub success_at: usize,
    pub seed: Option<u64>,
    pub sessions: Mutex<HashMap<String, GameSession>>,
}

#[derive(Deserialize)]
pub struct NewGameQuery {
    pub seed: Option<i64>,
}

#[derive(Deserialize)]
pub struct CheckQuery {
    pub session: Option<String>,
    pub text: Option<String>,
}

#[derive(Deserialize)]
pub struct PeekQuery {
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct NewGameResponse {
    pub session: String,
    pub jumble: String,
    pub target: usize,
}

#[derive(Serialize)]
pub struct CheckResponse {
    pub kind: &'static str,
    pub solved: bool,
    pub matches: Vec<String>,
    pub target: usize,
    pub message: String,
}

#[derive(Serialize)]
pub struct PeekResponse {
    pub matched: bool,
}
