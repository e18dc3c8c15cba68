//! Case-insensitive word set backing the repair passes.
//!
//! The dictionary is a plain newline-delimited word list, loaded once and
//! immutable afterwards, so a single instance can be shared across any number
//! of corrections.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// A case-insensitive set of known words.
///
/// One entry is always dropped at construction: `"th"`. Word lists commonly
/// carry it, and a word wrapped before a trailing "th" ("heal- th") would
/// never re-merge if "th" counted as a word of its own.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Builds a dictionary from an iterator of words.
    ///
    /// Words are trimmed and lowercased; empty entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        words.remove("th");
        Self { words }
    }

    /// Loads a newline-delimited word list from `path`.
    ///
    /// Fails fast on a missing or unreadable file, and on a file that yields
    /// no words at all — the repair passes must never run with an empty
    /// dictionary.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::DictionaryUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_words(content.lines());
        if dictionary.is_empty() {
            return Err(Error::DictionaryEmpty(path.to_path_buf()));
        }
        Ok(dictionary)
    }

    /// Checks membership, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
