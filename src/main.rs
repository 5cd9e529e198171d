mod errors;
mod handlers;
mod models;
mod services;

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use actix_web::{web, App, HttpServer};
use clap::{Arg, Command};
use log::{info, warn};

use crate::models::AppState;
use crate::services::vocab::Vocab;
use crate::services::word_loader::load_words;

// Function to initialize logging
fn init_logging(log_file: Option<&String>) {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .expect("Failed to open log file");

        env_logger::Builder::new()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
}

/// Parse the configured jumble seed. Zero and up are honored as-is;
/// negative or unparseable values mean "scramble non-deterministically".
fn parse_seed(raw: Option<&String>) -> Option<u64> {
    match raw.map(|s| s.parse::<i64>()) {
        Some(Ok(seed)) if seed >= 0 => Some(seed as u64),
        Some(Ok(seed)) => {
            warn!("Ignoring negative seed {}; jumbles will not be reproducible", seed);
            None
        }
        Some(Err(_)) => {
            warn!("Ignoring unparseable seed; jumbles will not be reproducible");
            None
        }
        None => None,
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let matches = Command::new("vocabd")
        .version("1.0")
        .author("Ron Straight <straightre@gmail.com>")
        .about("Vocabulary jumble game service")
        .arg(
            Arg::new("listen-host")
                .long("listen-host")
                .num_args(1)
                .default_value("0.0.0.0:5000")
                .help("Specify the listen address (e.g., 0.0.0.0:5000)"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .arg(
            Arg::new("vocab-file")
                .long("vocab-file")
                .num_args(1)
                .default_value("./share/vocab.txt")
                .help("File containing the vocabulary, one word per line"),
        )
        .arg(
            Arg::new("success-at-count")
                .long("success-at-count")
                .num_args(1)
                .default_value("3")
                .help("Distinct words a player must find to win (capped by vocabulary size)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .num_args(1)
                .help("Non-negative integer for reproducible jumbles (negative or omitted: random)"),
        )
        .get_matches();

    let listen_host = matches
        .get_one::<String>("listen-host")
        .expect("listen-host argument must always have a default value")
        .clone();
    let log_file = matches.get_one::<String>("log-file");
    let vocab_file = matches.get_one::<String>("vocab-file").unwrap();
    let success_at_str = matches.get_one::<String>("success-at-count").unwrap();

    init_logging(log_file);

    let success_at: usize = success_at_str.parse().map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "success-at-count must be a positive integer",
        )
    })?;
    if success_at == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "success-at-count must be a positive integer",
        ));
    }

    let seed = parse_seed(matches.get_one::<String>("seed"));

    let words = load_words(vocab_file)?;
    let vocab = Vocab::new(words)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    info!(
        "Vocabulary ready: {} words, success at {} (seed: {:?})",
        vocab.len(),
        success_at.min(vocab.len()),
        seed
    );

    let state = AppState {
        vocab,
        success_at,
        seed,
        sessions: Mutex::new(HashMap::new()),
    };
    let shared_state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .service(handlers::game::new_game)
            .service(handlers::validation::check)
            .service(handlers::validation::peek)
    })
    .bind(&listen_host)?
    .run()
    .await
}
