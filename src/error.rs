//! Error types for unpaste library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for unpaste operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for unpaste library.
///
/// The correction pipeline itself is total and never fails; errors can only
/// arise while acquiring the dictionary.
#[derive(Error, Debug)]
pub enum Error {
    /// The word-list file could not be read.
    #[error("dictionary unavailable at {path}: {source}")]
    DictionaryUnavailable { path: PathBuf, source: io::Error },

    /// The word-list file was readable but contained no words. Running the
    /// repair passes against an empty dictionary would flag every word as
    /// misspelled, so this is rejected up front.
    #[error("dictionary at {0} contains no words")]
    DictionaryEmpty(PathBuf),
}
