//! Orthographic Neighbours and Minimal-Overlap Prime Matching
//!
//! Tools for building psycholinguistic priming stimuli: find the orthographic
//! neighbours of a word (same length, one letter different) and pair target
//! words with prime candidates that share as few letters as possible.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  LexiconProvider (files, in-memory)                             │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │  loaded lazily, once
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  LexiconContext  →  NeighbourEngine (per-word cache)            │
//! └─────────────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  overlap  →  select_best_match  →  assign_minimal_overlap       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use neighbours_core::{
//!     assign_minimal_overlap, IdentityShuffler, Lexicon, LexiconContext, NeighbourEngine,
//!     OverlapMetric,
//! };
//!
//! let lexicon = Lexicon::from_entries([("cat", 1.0), ("cot", 1.0), ("bat", 1.0)]);
//! let engine = NeighbourEngine::new(LexiconContext::preloaded(lexicon));
//! assert_eq!(engine.find_neighbours("cat").unwrap().count, 2);
//!
//! let assignment = assign_minimal_overlap(
//!     &["abcde", "fghij"],
//!     &["bfzzz", "glzzz"],
//!     OverlapMetric::Total,
//!     1,
//!     &mut IdentityShuffler,
//! )
//! .unwrap();
//! assert_eq!(assignment.candidate_for("abcde"), Some("glzzz"));
//! ```

pub mod assignment;
pub mod config;
pub mod context;
pub mod error;
pub mod lexicon;
pub mod neighbours;
pub mod overlap;
pub mod selector;
pub mod types;

pub use assignment::{
    assign_minimal_overlap, assign_with_config, Assignment, IdentityShuffler, MatchPair,
    RngShuffler, Shuffler, DEFAULT_ITERATIONS,
};
pub use config::MatchConfig;
pub use context::LexiconContext;
pub use error::{NeighbourError, Result};
pub use lexicon::{InMemoryProvider, Lexicon, LexiconEntry, LexiconProvider};
pub use neighbours::{CacheStats, NeighbourEngine};
pub use overlap::{overlap, overlap_same_position, overlap_score, overlap_total};
pub use selector::{select_best_match, BestMatch};
pub use types::{NeighbourResult, OverlapMetric, OverlapScore, Regularity, Word};
