//! Multi-Match Assignment Engine
//!
//! One-to-one matching of target words to prime candidates with low total
//! overlap. Each trial shuffles both lists, then walks the words greedily,
//! giving each the best remaining candidate. The trial with the lowest total
//! wins; later trials replace it only on a strictly lower total.
//!
//! This is a bounded heuristic. More iterations lower the expected total but
//! nothing guarantees the optimum.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::config::MatchConfig;
use crate::error::{NeighbourError, Result};
use crate::overlap::overlap;
use crate::selector::{best_among, parse_words};
use crate::types::OverlapMetric;

/// Default trial count
pub const DEFAULT_ITERATIONS: usize = 10;

/// Source of the per-trial orderings
pub trait Shuffler {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Fresh random permutation per call
#[derive(Debug)]
pub struct RngShuffler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngShuffler<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Shuffler for RngShuffler<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Leaves input order untouched; trials become deterministic greedy passes
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchPair {
    pub word: String,
    pub candidate: String,
    pub overlap: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    /// In the caller's word order
    pub pairs: Vec<MatchPair>,
    /// Sum of the primary metric over all pairs
    pub total: usize,
    pub metric: OverlapMetric,
    /// Zero-based trial that produced this assignment
    pub best_trial: usize,
    pub trial_totals: Vec<usize>,
}

impl Assignment {
    pub fn candidate_for(&self, word: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.word == word)
            .map(|p| p.candidate.as_str())
    }

    pub fn as_map(&self) -> HashMap<String, String> {
        self.pairs
            .iter()
            .map(|p| (p.word.clone(), p.candidate.clone()))
            .collect()
    }
}

/// Match every word to a distinct candidate, keeping the best of
/// `iterations` shuffled greedy trials. `iterations == 0` runs one trial.
///
/// All words and candidates are validated and lowercased first, so an
/// `InvalidWord` or `InsufficientCandidates` failure happens before any
/// trial runs. Pairs report the normalised forms.
pub fn assign_minimal_overlap<W, C, S>(
    words: &[W],
    candidates: &[C],
    metric: OverlapMetric,
    iterations: usize,
    shuffler: &mut S,
) -> Result<Assignment>
where
    W: AsRef<str>,
    C: AsRef<str>,
    S: Shuffler,
{
    let words = parse_words(words)?;
    let candidates = parse_words(candidates)?;
    if candidates.len() < words.len() {
        return Err(NeighbourError::InsufficientCandidates {
            words: words.len(),
            candidates: candidates.len(),
        });
    }

    let mut best: Option<(usize, usize, Vec<MatchPair>)> = None;
    let mut trial_totals = Vec::with_capacity(iterations.max(1));

    for trial in 0..iterations.max(1) {
        // word positions, so duplicates and caller order survive the shuffle
        let mut order: Vec<usize> = (0..words.len()).collect();
        shuffler.shuffle(&mut order);
        let mut pool = candidates.clone();
        shuffler.shuffle(&mut pool);

        let mut chosen: Vec<Option<MatchPair>> = vec![None; words.len()];
        let mut total = 0;
        for &position in &order {
            let word = &words[position];
            let best_match = best_among(word, &pool, metric)?;
            pool.remove(best_match.index);
            let cost = overlap(word.as_str(), &best_match.candidate, metric);
            total += cost;
            chosen[position] = Some(MatchPair {
                word: word.to_string(),
                candidate: best_match.candidate,
                overlap: cost,
            });
        }

        debug!(trial, total, "Assignment trial complete");
        trial_totals.push(total);

        let improved = best.as_ref().map_or(true, |(_, t, _)| total < *t);
        if improved {
            best = Some((trial, total, chosen.into_iter().flatten().collect()));
        }
    }

    let (best_trial, total, pairs) = best.unwrap_or_default();
    Ok(Assignment {
        pairs,
        total,
        metric,
        best_trial,
        trial_totals,
    })
}

/// Run the assignment with the metric, iteration count and seed from
/// `config`. Without a seed the shuffles draw on OS entropy.
pub fn assign_with_config<W, C>(
    words: &[W],
    candidates: &[C],
    config: &MatchConfig,
) -> Result<Assignment>
where
    W: AsRef<str>,
    C: AsRef<str>,
{
    config.validate()?;
    let mut shuffler = match config.seed {
        Some(seed) => RngShuffler::seeded(seed),
        None => RngShuffler::from_entropy(),
    };
    assign_minimal_overlap(
        words,
        candidates,
        config.metric,
        config.iterations,
        &mut shuffler,
    )
}
