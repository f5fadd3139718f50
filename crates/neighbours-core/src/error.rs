use thiserror::Error;

pub type Result<T> = std::result::Result<T, NeighbourError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NeighbourError {
    /// Word absent from the frequency table
    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("candidate set is empty")]
    EmptyCandidateSet,

    #[error("insufficient candidates: {words} word(s) but only {candidates} candidate(s)")]
    InsufficientCandidates { words: usize, candidates: usize },

    /// Lexicon, pronunciation or regularity data could not be loaded.
    /// Fatal for the load attempt; nothing is cached on failure.
    #[error("data source unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("invalid word: {0:?}")]
    InvalidWord(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
