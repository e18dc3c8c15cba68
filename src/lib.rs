//! unpaste - repair text pasted out of PDF viewers.
//!
//! Text copied from a PDF arrives with the artifacts of the page layout
//! baked in: hard line breaks mid-sentence, words hyphenated or simply cut
//! across wraps, footnote numbers glued to the preceding word, stray spaces
//! around quotes and parentheses. `unpaste` runs such text through a fixed
//! pipeline of correction stages and returns continuous, readable prose.
//!
//! # Example
//!
//! ```
//! use unpaste::{Corrector, Dictionary};
//!
//! let dictionary = Dictionary::from_words(["an", "example", "text"]);
//! let corrector = Corrector::new(dictionary);
//!
//! assert_eq!(corrector.correct("an exam-\nple text"), "an example text");
//! ```
//!
//! The dictionary-guided passes (merging split words, re-splitting fused
//! ones) only act where the dictionary vouches for the result, so coverage
//! matters: supply a real word list. [`Dictionary::load`] reads a
//! newline-delimited file and rejects one that yields no words;
//! [`Dictionary::from_words`] is meant for tests and embedded lists.

pub mod casing;
pub mod dictionary;
pub mod endnote;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod repair;
pub mod titlecase;

pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use pipeline::{correct, Corrector};
