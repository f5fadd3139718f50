//! Configuration loading
//!
//! One YAML file names the lexicon data sources and the matching defaults.
//! Relative data paths are resolved against the directory holding the config
//! file, so a config can travel with its data.
//!
//! ```yaml
//! lexicon:
//!   celex_path: data/CELEX.txt
//!   pronunciation_path: data/pron.vcb
//!   regularity_path: data/REG.TXT
//!   restrict_length: 5        # optional
//! matching:
//!   metric: same_position
//!   iterations: 10
//!   seed: 42                  # optional
//! ```

use anyhow::{Context, Result};
use neighbours_core::MatchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default configuration path
pub const DEFAULT_CONFIG_PATH: &str = "config/neighbours.yaml";

/// Environment override for the configuration path
pub const CONFIG_ENV_VAR: &str = "NEIGHBOURS_CONFIG";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NeighboursConfig {
    pub lexicon: LexiconSourceConfig,
    #[serde(default)]
    pub matching: MatchConfig,
}

/// Where the lexicon tables come from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LexiconSourceConfig {
    /// Whitespace-separated word / frequency file
    pub celex_path: PathBuf,
    /// word / hyphen-syllabified pronunciation; lookups report unknown when unset
    #[serde(default)]
    pub pronunciation_path: Option<PathBuf>,
    /// word / regularity flag; lookups report unknown when unset
    #[serde(default)]
    pub regularity_path: Option<PathBuf>,
    /// Keep only words of this length
    #[serde(default)]
    pub restrict_length: Option<usize>,
}

impl LexiconSourceConfig {
    pub fn new(celex_path: impl Into<PathBuf>) -> Self {
        Self {
            celex_path: celex_path.into(),
            pronunciation_path: None,
            regularity_path: None,
            restrict_length: None,
        }
    }

    fn rebase(&mut self, base: &Path) {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        join(&mut self.celex_path);
        if let Some(p) = self.pronunciation_path.as_mut() {
            join(p);
        }
        if let Some(p) = self.regularity_path.as_mut() {
            join(p);
        }
    }
}

impl NeighboursConfig {
    /// Load from a YAML file, resolving relative data paths against the
    /// file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading configuration");

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.lexicon.rebase(base);
        }
        Ok(config)
    }

    /// Parse YAML as-is; paths are left untouched
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: NeighboursConfig = serde_yaml::from_str(content)?;
        config.matching.validate()?;
        Ok(config)
    }
}

/// Config path resolution order:
/// 1. Explicit path (command-line flag)
/// 2. `NEIGHBOURS_CONFIG` environment variable
/// 3. `config/neighbours.yaml`
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
