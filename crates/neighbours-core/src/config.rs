//! Matching configuration
//!
//! Deserialised from the `matching:` block of the workspace YAML config; every
//! field has a default so the block may be omitted.

use serde::{Deserialize, Serialize};

use crate::assignment::DEFAULT_ITERATIONS;
use crate::error::{NeighbourError, Result};
use crate::types::OverlapMetric;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Metric minimised first; the other one breaks ties
    #[serde(default)]
    pub metric: OverlapMetric,
    /// Number of shuffled greedy trials
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Fixed seed for reproducible shuffles
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            metric: OverlapMetric::default(),
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(NeighbourError::InvalidConfig(
                "iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
