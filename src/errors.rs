use thiserror::Error;

/// Failures surfaced by the game engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The word source produced no usable vocabulary; a jumble cannot
    /// be built from zero words. Fatal at startup.
    #[error("vocabulary is empty; a jumble needs at least one word")]
    EmptyVocabulary,

    /// The configured success threshold collapsed to zero.
    #[error("target word count must be positive (got {0})")]
    NonPositiveTarget(usize),

    /// A jumble was requested for zero words. Callers clamp the count
    /// against the vocabulary size before calling, so this only fires
    /// on a bad argument, never on a small vocabulary.
    #[error("jumble word count must be positive")]
    NonPositiveCount,

    /// The submission classifier fell through every branch. The four
    /// classification predicates are assumed exhaustive; reaching this
    /// is a bug in the engine, never a player error.
    #[error("submission '{0}' could not be classified")]
    UnclassifiedSubmission(String),
}
