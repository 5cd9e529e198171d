use log::debug;

use crate::errors::GameError;
use crate::services::jumbler;
use crate::services::letter_bag::LetterBag;
use crate::services::vocab::Vocab;

/// How a single submission was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The quota was already met; checked before the candidate is
    /// examined, so any submission past the target reports success.
    Success,
    /// A vocabulary word formed from the jumble, found for the first time.
    NewMatch(String),
    AlreadyFound(String),
    NotInVocabulary(String),
    /// A real vocabulary word whose letters aren't all in the jumble.
    NotFromJumbleLetters { word: String, jumble: String },
}

impl Outcome {
    /// Stable tag for serialization; message text stays with the transport.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::NewMatch(_) => "new_match",
            Outcome::AlreadyFound(_) => "already_found",
            Outcome::NotInVocabulary(_) => "not_in_vocabulary",
            Outcome::NotFromJumbleLetters { .. } => "not_from_jumble",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    InProgress,
    Completed,
}

/// Per-player game state: the jumble being played, the quota, and the
/// words found so far. One instance per session key; the surrounding
/// transport owns storage and serializes access.
pub struct GameSession {
    jumble: String,
    // The jumble never changes within a game, so its bag is built once
    bag: LetterBag,
    target_count: usize,
    matches: Vec<String>,
    state: SessionState,
}

impl GameSession {
    /// Start a fresh game: pick the target count, build a jumble from
    /// the vocabulary, and clear the found-word list. Starting again
    /// for the same player replaces the old session wholesale.
    pub fn start(vocab: &Vocab, success_at: usize, seed: Option<u64>) -> Result<Self, GameError> {
        let target_count = vocab.len().min(success_at);
        if target_count == 0 {
            return Err(GameError::NonPositiveTarget(success_at));
        }

        let jumble = jumbler::jumble(vocab.as_list(), target_count, seed)?;
        let bag = LetterBag::new(&jumble);
        debug!("Started game: target {} words, jumble '{}'", target_count, jumble);

        Ok(GameSession {
            jumble,
            bag,
            target_count,
            matches: Vec::new(),
            state: SessionState::InProgress,
        })
    }

    pub fn jumble(&self) -> &str {
        &self.jumble
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Classify one submission and update the found-word list.
    ///
    /// The quota check runs first: once `target_count` distinct words
    /// have been found, every later submission reports success without
    /// the candidate being looked at. Otherwise the candidate is tested
    /// for vocabulary membership and jumble derivability; the fallthrough
    /// branch is unreachable by construction and reported as an engine
    /// bug if it ever fires.
    pub fn submit(&mut self, vocab: &Vocab, candidate: &str) -> Result<Outcome, GameError> {
        if self.matches.len() >= self.target_count {
            self.state = SessionState::Completed;
            return Ok(Outcome::Success);
        }

        let matched = vocab.has(candidate);
        let in_jumble = self.bag.contains(candidate);
        let already = self.matches.iter().any(|m| m == candidate);

        if matched && in_jumble && !already {
            self.matches.push(candidate.to_string());
            Ok(Outcome::NewMatch(candidate.to_string()))
        } else if already {
            Ok(Outcome::AlreadyFound(candidate.to_string()))
        } else if !matched {
            Ok(Outcome::NotInVocabulary(candidate.to_string()))
        } else if !in_jumble {
            Ok(Outcome::NotFromJumbleLetters {
                word: candidate.to_string(),
                jumble: self.jumble.clone(),
            })
        } else {
            Err(GameError::UnclassifiedSubmission(candidate.to_string()))
        }
    }

    /// Vocabulary-only lookup for live keystroke feedback. Needs no
    /// session data and never touches the found-word list.
    pub fn peek(vocab: &Vocab, candidate: &str) -> bool {
        vocab.has(candidate)
    }
}
