//! File-backed lexicon provider
//!
//! Reads the three whitespace-separated tables:
//!
//! | file          | column 1 | column 2                                   |
//! |---------------|----------|--------------------------------------------|
//! | CELEX         | word     | total frequency (further columns ignored)  |
//! | pronunciation | word     | hyphen-syllabified pronunciation           |
//! | regularity    | word     | flag, `1` = regular                        |
//!
//! Words are lowercased. Blank lines are skipped; malformed lines are skipped
//! with a warning.

use anyhow::{Context, Result};
use neighbours_core::{Lexicon, LexiconProvider, NeighbourError};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use crate::config::LexiconSourceConfig;

pub struct FileLexiconProvider {
    source: LexiconSourceConfig,
}

impl FileLexiconProvider {
    pub fn new(source: LexiconSourceConfig) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &LexiconSourceConfig {
        &self.source
    }
}

impl LexiconProvider for FileLexiconProvider {
    fn load_lexicon(&self) -> neighbours_core::Result<Lexicon> {
        let content = read_table(&self.source.celex_path).map_err(unavailable)?;
        Ok(parse_celex(&content, self.source.restrict_length))
    }

    fn load_pronunciation(&self) -> neighbours_core::Result<HashMap<String, usize>> {
        match &self.source.pronunciation_path {
            Some(path) => Ok(parse_pronunciation(
                &read_table(path).map_err(unavailable)?,
            )),
            None => Ok(HashMap::new()),
        }
    }

    fn load_regularity(&self) -> neighbours_core::Result<HashMap<String, String>> {
        match &self.source.regularity_path {
            Some(path) => Ok(parse_regularity(&read_table(path).map_err(unavailable)?)),
            None => Ok(HashMap::new()),
        }
    }
}

fn read_table(path: &Path) -> Result<String> {
    info!(path = %path.display(), "Reading lexicon table");
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn unavailable(err: anyhow::Error) -> NeighbourError {
    NeighbourError::DataSourceUnavailable(format!("{:#}", err))
}

/// First two columns of a data line, `None` for blank lines
fn columns(line: &str) -> Option<(&str, Option<&str>)> {
    let mut fields = line.split_whitespace();
    let first = fields.next()?;
    Some((first, fields.next()))
}

pub fn parse_celex(content: &str, restrict_length: Option<usize>) -> Lexicon {
    let mut lexicon = Lexicon::new();
    for (line_no, line) in content.lines().enumerate() {
        let Some((word, frequency)) = columns(line) else {
            continue;
        };
        let Some(frequency) = frequency.and_then(|f| f.parse::<f64>().ok()) else {
            warn!(line = line_no + 1, word, "Skipping line without a numeric frequency");
            continue;
        };
        if let Some(length) = restrict_length {
            if word.chars().count() != length {
                continue;
            }
        }
        lexicon.push(word, frequency);
    }
    lexicon
}

pub fn parse_pronunciation(content: &str) -> HashMap<String, usize> {
    let mut syllables = HashMap::new();
    for (line_no, line) in content.lines().enumerate() {
        match columns(line) {
            None => continue,
            Some((word, Some(pron))) => {
                syllables.insert(word.to_lowercase(), pron.split('-').count());
            }
            Some((word, None)) => {
                warn!(line = line_no + 1, word, "Skipping line without a pronunciation");
            }
        }
    }
    syllables
}

pub fn parse_regularity(content: &str) -> HashMap<String, String> {
    let mut flags = HashMap::new();
    for (line_no, line) in content.lines().enumerate() {
        match columns(line) {
            None => continue,
            Some((word, Some(flag))) => {
                flags.insert(word.to_lowercase(), flag.to_string());
            }
            Some((word, None)) => {
                warn!(line = line_no + 1, word, "Skipping line without a regularity flag");
            }
        }
    }
    flags
}
