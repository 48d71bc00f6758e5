use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FragmenterError, Result};

/// Tunables for one fragmenter. Every field has a default, so a config file
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FragmenterConfig {
    /// Largest value a two-digit year may take in a date.
    pub two_digit_year_max: u32,
    /// Fewest digits a phone number may have.
    pub min_phone_digits: usize,
    /// Extend numbers over a following measure word.
    pub measure_words: bool,
    /// Extra measure words, one per line, added to the built-in list.
    pub measure_words_path: Option<PathBuf>,
}

impl Default for FragmenterConfig {
    fn default() -> Self {
        FragmenterConfig {
            two_digit_year_max: 29,
            min_phone_digits: 3,
            measure_words: true,
            measure_words_path: None,
        }
    }
}

impl FragmenterConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(FragmenterError::io(path))?;
        serde_json::from_str(&text).map_err(|source| FragmenterError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
