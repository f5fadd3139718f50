//! Neighbour Engine
//!
//! Orthographic neighbours are same-length words differing from the target at
//! exactly one position. Full neighbour scans are cached per word for the
//! lifetime of the engine; onset neighbours are filtered from the cached scan,
//! so both queries share one caching policy.
//!
//! ```text
//! query ──► cache hit? ──yes──► cloned result
//!               │
//!               no
//!               ▼
//!        lexicon (lazy load) ──► length class scan ──► cache insert
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

use crate::context::LexiconContext;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::types::{NeighbourResult, Regularity, Word};

/// Cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Full lexicon scans performed
    pub scans: u64,
    /// Words currently cached
    pub entries: usize,
}

pub struct NeighbourEngine {
    context: LexiconContext,
    cache: RwLock<HashMap<String, NeighbourResult>>,
    hits: AtomicU64,
    misses: AtomicU64,
    scans: AtomicU64,
}

impl NeighbourEngine {
    pub fn new(context: LexiconContext) -> Self {
        Self {
            context,
            cache: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            scans: AtomicU64::new(0),
        }
    }

    pub fn context(&self) -> &LexiconContext {
        &self.context
    }

    /// All one-letter-different neighbours of `word`, same onset included.
    pub fn find_neighbours(&self, word: &str) -> Result<NeighbourResult> {
        let word = Word::parse(word)?;

        if let Some(hit) = self.cached(word.as_str()) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(word = %word, "Neighbour cache hit");
            return Ok(hit);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let lexicon = self.context.lexicon()?;
        let result = self.scan(lexicon, &word);
        debug!(word = %word, count = result.count, "Neighbour cache miss, scanned lexicon");

        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(word.to_string(), result.clone());
        Ok(result)
    }

    /// Neighbour count only
    pub fn neighbour_count(&self, word: &str) -> Result<usize> {
        Ok(self.find_neighbours(word)?.count)
    }

    /// Neighbours whose first letter differs from the target's
    pub fn onset_neighbours(&self, word: &str) -> Result<NeighbourResult> {
        let target = Word::parse(word)?;
        let onset = target.onset();
        let all = self.find_neighbours(target.as_str())?;
        Ok(NeighbourResult::from_words(
            all.words
                .into_iter()
                .filter(|n| n.chars().next() != onset)
                .collect(),
        ))
    }

    /// Neighbours common to both words, sorted and de-duplicated
    pub fn shared_neighbours(&self, word1: &str, word2: &str) -> Result<NeighbourResult> {
        let first: BTreeSet<String> = self.find_neighbours(word1)?.words.into_iter().collect();
        let second: BTreeSet<String> = self.find_neighbours(word2)?.words.into_iter().collect();
        Ok(NeighbourResult::from_words(
            first.intersection(&second).cloned().collect(),
        ))
    }

    /// Lexicon words ending in `rime`, in traversal order. Any length class.
    pub fn shared_rime_words(&self, rime: &str) -> Result<Vec<String>> {
        let rime = rime.trim();
        if rime.is_empty() {
            return Ok(Vec::new());
        }
        let rime = Word::parse(rime)?;
        Ok(self
            .context
            .lexicon()?
            .entries()
            .iter()
            .filter(|e| e.word.ends_with(rime.as_str()))
            .map(|e| e.word.clone())
            .collect())
    }

    /// Distinct lexicon words formed by swapping one adjacent letter pair
    pub fn transposition_neighbours(&self, word: &str) -> Result<Vec<String>> {
        let word = Word::parse(word)?;
        let lexicon = self.context.lexicon()?;
        let letters = word.chars();

        let mut found = Vec::new();
        for i in 0..letters.len().saturating_sub(1) {
            if letters[i] == letters[i + 1] {
                continue;
            }
            let mut swapped = letters.clone();
            swapped.swap(i, i + 1);
            let swapped: String = swapped.into_iter().collect();
            if lexicon.contains(&swapped) && !found.contains(&swapped) {
                found.push(swapped);
            }
        }
        Ok(found)
    }

    /// For each 1-indexed position, the neighbours differing there, or `None`
    /// when no neighbour differs at that position.
    pub fn neighbour_locations(&self, word: &str) -> Result<BTreeMap<usize, Option<Vec<String>>>> {
        let target = Word::parse(word)?;
        let letters = target.chars();
        let neighbours = self.find_neighbours(target.as_str())?.words;

        let mut locations = BTreeMap::new();
        for (i, letter) in letters.iter().enumerate() {
            let at_position: Vec<String> = neighbours
                .iter()
                .filter(|n| n.chars().nth(i) != Some(*letter))
                .cloned()
                .collect();
            let slot = if at_position.is_empty() {
                None
            } else {
                Some(at_position)
            };
            locations.insert(i + 1, slot);
        }
        Ok(locations)
    }

    pub fn frequency(&self, word: &str) -> Result<f64> {
        self.context.frequency(word)
    }

    pub fn syllable_count(&self, word: &str) -> Result<Option<usize>> {
        self.context.syllable_count(word)
    }

    pub fn regularity(&self, word: &str) -> Result<Regularity> {
        self.context.regularity(word)
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            scans: self.scans.load(Ordering::Relaxed),
            entries: self
                .cache
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .len(),
        }
    }

    /// Drop every cached result. Required after the underlying lexicon changes.
    pub fn reset_cache(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn cached(&self, word: &str) -> Option<NeighbourResult> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(word)
            .cloned()
    }

    fn scan(&self, lexicon: &Lexicon, word: &Word) -> NeighbourResult {
        self.scans.fetch_add(1, Ordering::Relaxed);
        let target = word.chars();
        NeighbourResult::from_words(
            lexicon
                .entries_of_length(target.len())
                .filter(|e| differs_by_one(&target, &e.word))
                .map(|e| e.word.clone())
                .collect(),
        )
    }
}

/// True when `candidate` differs from `target` at exactly one position.
/// Stops comparing once a second difference is seen.
pub fn differs_by_one(target: &[char], candidate: &str) -> bool {
    let mut diffs = 0;
    for (a, b) in target.iter().zip(candidate.chars()) {
        if *a != b {
            diffs += 1;
            if diffs == 2 {
                return false;
            }
        }
    }
    diffs == 1 && candidate.chars().count() == target.len()
}

impl std::fmt::Debug for NeighbourEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeighbourEngine")
            .field("context", &self.context)
            .field("stats", &self.cache_stats())
            .finish()
    }
}
