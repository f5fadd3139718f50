//! Lexicon data model and the provider seam
//!
//! The `LexiconProvider` trait is the only way lexicon, pronunciation and
//! regularity data enter the core. File parsing lives outside this crate;
//! `InMemoryProvider` covers tests and callers that already hold the data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::Result;

/// A single lexicon row. `length` is the character count of `word`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub word: String,
    pub length: usize,
    pub frequency: f64,
}

/// Known words in source order plus a frequency table bucketed by first
/// letter.
///
/// Duplicate rows are kept as separate entries; the frequency table keeps the
/// last value seen for a word.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    /// length -> entry positions, in traversal order
    by_length: HashMap<usize, Vec<usize>>,
    frequencies: HashMap<char, HashMap<String, f64>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for (word, frequency) in rows {
            lexicon.push(word.as_ref(), frequency);
        }
        lexicon
    }

    /// Append a row. The word is lowercased; empty words are ignored.
    pub fn push(&mut self, word: &str, frequency: f64) {
        let word = word.to_lowercase();
        let Some(onset) = word.chars().next() else {
            return;
        };
        let length = word.chars().count();

        self.by_length
            .entry(length)
            .or_default()
            .push(self.entries.len());
        self.frequencies
            .entry(onset)
            .or_default()
            .insert(word.clone(), frequency);
        self.entries.push(LexiconEntry {
            word,
            length,
            frequency,
        });
    }

    /// Keep only words of exactly `length` characters
    pub fn restricted_to_length(self, length: usize) -> Self {
        let mut restricted = Self::new();
        for entry in self.entries.into_iter().filter(|e| e.length == length) {
            restricted.push(&entry.word, entry.frequency);
        }
        restricted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Entries of one length class, in traversal order
    pub fn entries_of_length(&self, length: usize) -> impl Iterator<Item = &LexiconEntry> {
        self.by_length
            .get(&length)
            .into_iter()
            .flatten()
            .map(move |&i| &self.entries[i])
    }

    pub fn frequency(&self, word: &str) -> Option<f64> {
        let onset = word.chars().next()?;
        self.frequencies.get(&onset)?.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.frequency(word).is_some()
    }
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Source of lexicon data.
///
/// Each method is called at most once per `LexiconContext`. Failures should be
/// reported as `NeighbourError::DataSourceUnavailable`.
pub trait LexiconProvider: Send + Sync {
    fn load_lexicon(&self) -> Result<Lexicon>;

    /// word -> syllable count
    fn load_pronunciation(&self) -> Result<HashMap<String, usize>>;

    /// word -> regularity flag (`"1"` = regular)
    fn load_regularity(&self) -> Result<HashMap<String, String>>;
}

/// Provider over data already in memory. Counts lexicon loads so callers can
/// verify load-once behaviour.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    lexicon: Lexicon,
    pronunciation: HashMap<String, usize>,
    regularity: HashMap<String, String>,
    lexicon_loads: AtomicUsize,
}

impl InMemoryProvider {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            ..Default::default()
        }
    }

    pub fn with_pronunciation(mut self, syllables: HashMap<String, usize>) -> Self {
        self.pronunciation = syllables;
        self
    }

    pub fn with_regularity(mut self, flags: HashMap<String, String>) -> Self {
        self.regularity = flags;
        self
    }

    pub fn lexicon_loads(&self) -> usize {
        self.lexicon_loads.load(Ordering::Relaxed)
    }
}

impl LexiconProvider for InMemoryProvider {
    fn load_lexicon(&self) -> Result<Lexicon> {
        self.lexicon_loads.fetch_add(1, Ordering::Relaxed);
        Ok(self.lexicon.clone())
    }

    fn load_pronunciation(&self) -> Result<HashMap<String, usize>> {
        Ok(self.pronunciation.clone())
    }

    fn load_regularity(&self) -> Result<HashMap<String, String>> {
        Ok(self.regularity.clone())
    }
}
