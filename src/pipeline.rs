//! The correction pipeline: an ordered list of pure string stages.
//!
//! Stage order is load-bearing. Line breaks must be collapsed before endnote
//! detection (those patterns assume single-line text), soft hyphens must be
//! gone before the other hyphen rules run, and word repair works on fully
//! normalized punctuation so that token boundaries reflect the cleaned text.

use std::path::Path;

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::{endnote, normalize, repair, titlecase};

/// A dictionary paired with the pipeline, for repeated corrections.
///
/// The dictionary is loaded once and never mutated afterwards, so a single
/// `Corrector` is safe to share across threads.
#[derive(Debug, Clone)]
pub struct Corrector {
    dictionary: Dictionary,
}

impl Corrector {
    /// Creates a corrector over an already-built dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// Loads the word list at `path` and creates a corrector from it.
    pub fn from_dict_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Dictionary::load(path)?))
    }

    /// The dictionary backing the repair passes.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Runs the full pipeline over `text`.
    pub fn correct(&self, text: &str) -> String {
        correct(text, &self.dictionary)
    }
}

/// Runs the full correction pipeline over `text`.
///
/// Every stage is total: where its pattern finds nothing it is a no-op, and
/// the pipeline as a whole is idempotent on already-clean prose. An empty
/// input produces an empty output.
pub fn correct(text: &str, dictionary: &Dictionary) -> String {
    let stages: &[&dyn Fn(&str) -> String] = &[
        &titlecase::normalize_first_line,
        &normalize::collapse_line_breaks,
        &normalize::strip_soft_hyphens,
        &normalize::tighten_em_dashes,
        &normalize::close_hyphen_gap,
        &normalize::tighten_parens,
        &endnote::bracket_bare_numbers,
        &endnote::tighten_marker_spacing,
        &endnote::convert_leading_list_marker,
        &|s: &str| repair::repair_words(s, dictionary),
        &punctuation_slot,
        &normalize::tighten_single_quotes,
        &normalize::tighten_double_quotes,
        &normalize::drop_stray_period_space,
    ];

    let mut out = text.to_string();
    for stage in stages {
        out = stage(&out);
    }
    out
}

/// Reserved position for further punctuation rules between word repair and
/// quote tightening. Currently passes the text through unchanged.
fn punctuation_slot(text: &str) -> String {
    text.to_string()
}
