//! Shared value types
//!
//! Everything here is plain data: validated words, overlap scores, neighbour
//! results and lookup outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{NeighbourError, Result};

// ---------------------------------------------------------------------------
// Word
// ---------------------------------------------------------------------------

/// A validated, lowercase query word.
///
/// Identity is the character content. Construction trims surrounding
/// whitespace, lowercases, and rejects empty input or any non-alphabetic
/// character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
            return Err(NeighbourError::InvalidWord(raw.to_string()));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes)
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First character; always present for a parsed word
    pub fn onset(&self) -> Option<char> {
        self.0.chars().next()
    }

    pub fn chars(&self) -> Vec<char> {
        self.0.chars().collect()
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Word {
    type Error = NeighbourError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

// ---------------------------------------------------------------------------
// Overlap
// ---------------------------------------------------------------------------

/// Which overlap measure drives a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapMetric {
    /// Letters shared at the same index
    #[default]
    SamePosition,
    /// Multiset intersection of letters, position ignored
    Total,
}

impl OverlapMetric {
    /// The metric used to break ties on this one
    pub fn other(self) -> Self {
        match self {
            Self::SamePosition => Self::Total,
            Self::Total => Self::SamePosition,
        }
    }
}

impl fmt::Display for OverlapMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SamePosition => f.write_str("same_position"),
            Self::Total => f.write_str("total"),
        }
    }
}

/// Both overlap measures between two words.
///
/// `same_position <= total <= min(len(w1), len(w2))`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlapScore {
    pub total: usize,
    pub same_position: usize,
}

impl OverlapScore {
    pub fn get(&self, metric: OverlapMetric) -> usize {
        match metric {
            OverlapMetric::Total => self.total,
            OverlapMetric::SamePosition => self.same_position,
        }
    }
}

// ---------------------------------------------------------------------------
// Neighbour results and lookups
// ---------------------------------------------------------------------------

/// Neighbour count plus the neighbours in lexicon traversal order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighbourResult {
    pub count: usize,
    pub words: Vec<String>,
}

impl NeighbourResult {
    pub fn from_words(words: Vec<String>) -> Self {
        Self {
            count: words.len(),
            words,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Spelling-to-sound regularity of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regularity {
    Regular,
    Irregular,
    /// Word missing from the regularity table
    Unknown,
}

impl Regularity {
    /// Regularity tables mark regular words with the flag `"1"`
    pub fn from_flag(flag: &str) -> Self {
        if flag == "1" {
            Self::Regular
        } else {
            Self::Irregular
        }
    }

    pub fn is_regular(self) -> bool {
        matches!(self, Self::Regular)
    }
}
