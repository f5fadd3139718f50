//! File-backed lexicon data for the neighbours engine
//!
//! Supplies `neighbours_core` with lexicon, pronunciation and regularity
//! tables read from disk, plus the YAML configuration that locates them.
//!
//! # Usage
//!
//! ```ignore
//! use neighbours_lexicon::{engine_from_config, NeighboursConfig};
//!
//! let config = NeighboursConfig::from_file("config/neighbours.yaml")?;
//! let engine = engine_from_config(&config);
//! let result = engine.find_neighbours("mint")?;
//! ```

pub mod config;
pub mod provider;

use neighbours_core::{LexiconContext, NeighbourEngine};
use std::sync::Arc;

pub use config::{
    resolve_config_path, LexiconSourceConfig, NeighboursConfig, CONFIG_ENV_VAR,
    DEFAULT_CONFIG_PATH,
};
pub use provider::{parse_celex, parse_pronunciation, parse_regularity, FileLexiconProvider};

/// Engine over the configured files. Nothing is read until the first query.
pub fn engine_from_config(config: &NeighboursConfig) -> NeighbourEngine {
    let provider = FileLexiconProvider::new(config.lexicon.clone());
    NeighbourEngine::new(LexiconContext::new(Arc::new(provider)))
}
