//! Single-Match Selector
//!
//! Picks the candidate with the least overlap against one word: minimum on the
//! primary metric, then minimum on the other metric, then earliest in the
//! candidate slice.

use serde::Serialize;

use crate::error::{NeighbourError, Result};
use crate::overlap::overlap_score;
use crate::types::{OverlapMetric, OverlapScore, Word};

/// Winning candidate with its position in the input slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMatch {
    pub index: usize,
    pub candidate: String,
    pub score: OverlapScore,
}

/// Validates and lowercases `word` and every candidate before scoring, so
/// `BestMatch.candidate` is the normalised form.
pub fn select_best_match<S: AsRef<str>>(
    word: &str,
    candidates: &[S],
    primary: OverlapMetric,
) -> Result<BestMatch> {
    let word = Word::parse(word)?;
    let candidates = parse_words(candidates)?;
    best_among(&word, &candidates, primary)
}

pub(crate) fn parse_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<Word>> {
    words.iter().map(|w| Word::parse(w.as_ref())).collect()
}

/// Selection over already-validated words
pub(crate) fn best_among(
    word: &Word,
    candidates: &[Word],
    primary: OverlapMetric,
) -> Result<BestMatch> {
    let secondary = primary.other();

    let mut best: Option<(usize, OverlapScore)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let score = overlap_score(word.as_str(), candidate.as_str());
        let key = (score.get(primary), score.get(secondary));
        let better = match best {
            None => true,
            // strict comparison keeps the earliest of exact ties
            Some((_, current)) => key < (current.get(primary), current.get(secondary)),
        };
        if better {
            best = Some((index, score));
        }
    }

    let (index, score) = best.ok_or(NeighbourError::EmptyCandidateSet)?;
    Ok(BestMatch {
        index,
        candidate: candidates[index].to_string(),
        score,
    })
}
