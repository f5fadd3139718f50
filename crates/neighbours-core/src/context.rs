//! Lexicon context
//!
//! Owns the provider and the lazily loaded tables. Each table is loaded at
//! most once per context; a failed load leaves the cell empty so the next call
//! retries against the provider.

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::error::{NeighbourError, Result};
use crate::lexicon::{InMemoryProvider, Lexicon, LexiconProvider};
use crate::types::{Regularity, Word};

pub struct LexiconContext {
    provider: Arc<dyn LexiconProvider>,
    lexicon: OnceCell<Lexicon>,
    syllables: OnceCell<HashMap<String, usize>>,
    regularity: OnceCell<HashMap<String, String>>,
}

impl LexiconContext {
    pub fn new(provider: Arc<dyn LexiconProvider>) -> Self {
        Self {
            provider,
            lexicon: OnceCell::new(),
            syllables: OnceCell::new(),
            regularity: OnceCell::new(),
        }
    }

    /// Context whose lexicon is already loaded. Pronunciation and regularity
    /// tables are empty, so those lookups report unknown.
    pub fn preloaded(lexicon: Lexicon) -> Self {
        Self {
            provider: Arc::new(InMemoryProvider::default()),
            lexicon: OnceCell::with_value(lexicon),
            syllables: OnceCell::new(),
            regularity: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.lexicon.get().is_some()
    }

    pub fn lexicon(&self) -> Result<&Lexicon> {
        self.lexicon.get_or_try_init(|| {
            let lexicon = self.provider.load_lexicon()?;
            info!(entries = lexicon.len(), "Lexicon loaded");
            Ok(lexicon)
        })
    }

    fn syllables(&self) -> Result<&HashMap<String, usize>> {
        self.syllables.get_or_try_init(|| {
            let table = self.provider.load_pronunciation()?;
            info!(entries = table.len(), "Pronunciation table loaded");
            Ok(table)
        })
    }

    fn regularity_table(&self) -> Result<&HashMap<String, String>> {
        self.regularity.get_or_try_init(|| {
            let table = self.provider.load_regularity()?;
            info!(entries = table.len(), "Regularity table loaded");
            Ok(table)
        })
    }

    /// Frequency of a word. Absence is an error, unlike the other lookups.
    pub fn frequency(&self, word: &str) -> Result<f64> {
        let word = Word::parse(word)?;
        self.lexicon()?
            .frequency(word.as_str())
            .ok_or_else(|| NeighbourError::KeyNotFound(word.to_string()))
    }

    /// Syllable count, `None` when the word has no pronunciation entry
    pub fn syllable_count(&self, word: &str) -> Result<Option<usize>> {
        let word = Word::parse(word)?;
        Ok(self.syllables()?.get(word.as_str()).copied())
    }

    pub fn regularity(&self, word: &str) -> Result<Regularity> {
        let word = Word::parse(word)?;
        Ok(self
            .regularity_table()?
            .get(word.as_str())
            .map(|flag| Regularity::from_flag(flag))
            .unwrap_or(Regularity::Unknown))
    }
}

impl std::fmt::Debug for LexiconContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconContext")
            .field("lexicon_loaded", &self.is_loaded())
            .field("syllables_loaded", &self.syllables.get().is_some())
            .field("regularity_loaded", &self.regularity.get().is_some())
            .finish()
    }
}
