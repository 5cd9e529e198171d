use actix_web::{get, web, HttpResponse, Responder};
use log::{error, info};

use crate::models::{AppState, CheckQuery, CheckResponse, PeekQuery, PeekResponse};
use crate::services::session::{GameSession, Outcome};

// Message text is a presentation concern; the engine only reports kinds.
fn outcome_message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success => "Congratulations, you solved it!".to_string(),
        Outcome::NewMatch(word) => format!("You found a new match: {}", word),
        Outcome::AlreadyFound(word) => format!("You already found {}", word),
        Outcome::NotInVocabulary(word) => format!("{} isn't in the list of words", word),
        Outcome::NotFromJumbleLetters { word, jumble } => {
            format!("\"{}\" can't be made from the letters {}", word, jumble)
        }
    }
}

#[get("/game/check")]
pub async fn check(data: web::Data<AppState>, query: web::Query<CheckQuery>) -> impl Responder {
    let session_id = match &query.session {
        Some(id) => id,
        None => return HttpResponse::BadRequest().body("Missing session id"),
    };
    // An absent candidate is an ordinary miss, not an error
    let text = query.text.as_deref().unwrap_or("");

    let mut sessions = data.sessions.lock().expect("session store lock poisoned");
    let session = match sessions.get_mut(session_id) {
        Some(s) => s,
        None => {
            return HttpResponse::BadRequest()
                .body(format!("Unknown session '{}'", session_id))
        }
    };

    let outcome = match session.submit(&data.vocab, text) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Submission classifier failed for '{}': {}", text, e);
            return HttpResponse::InternalServerError().body(e.to_string());
        }
    };

    info!("Session {}: '{}' -> {}", session_id, text, outcome.kind());

    HttpResponse::Ok().json(CheckResponse {
        kind: outcome.kind(),
        solved: matches!(outcome, Outcome::Success),
        matches: session.matches().to_vec(),
        target: session.target_count(),
        message: outcome_message(&outcome),
    })
}

#[get("/game/peek")]
pub async fn peek(data: web::Data<AppState>, query: web::Query<PeekQuery>) -> impl Responder {
    let text = query.text.as_deref().unwrap_or("");
    let matched = GameSession::peek(&data.vocab, text);
    HttpResponse::Ok().json(PeekResponse { matched })
}
