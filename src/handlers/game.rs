use actix_web::{get, web, HttpResponse, Responder};
use log::{error, info};
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::models::{AppState, NewGameQuery, NewGameResponse};
use crate::services::session::GameSession;

fn fresh_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

#[get("/game/new")]
pub async fn new_game(data: web::Data<AppState>, query: web::Query<NewGameQuery>) -> impl Responder {
    // A non-negative query seed overrides the configured one, so a
    // puzzle can be shared by link; a negative seed forces a
    // non-deterministic scramble.
    let seed = match query.seed {
        Some(s) if s >= 0 => Some(s as u64),
        Some(_) => None,
        None => data.seed,
    };

    let session = match GameSession::start(&data.vocab, data.success_at, seed) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to start game: {}", e);
            return HttpResponse::InternalServerError().body(e.to_string());
        }
    };

    let id = fresh_session_id();
    let response = NewGameResponse {
        session: id.clone(),
        jumble: session.jumble().to_string(),
        target: session.target_count(),
    };

    data.sessions
        .lock()
        .expect("session store lock poisoned")
        .insert(id.clone(), session);
    info!("New game {} (target {} words)", id, response.target);

    HttpResponse::Ok().json(response)
}
