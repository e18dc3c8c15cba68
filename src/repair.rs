//! Dictionary-guided repair of split and fused words.
//!
//! Two extraction artifacts are handled here:
//!
//! - **Split words**: a word broken across a line wrap, with or without a
//!   hyphen ("exam- ple", "exam ple"). The merge pass joins adjacent
//!   fragments when the joined form is a dictionary word.
//! - **Fused words**: two words collapsed into one where kerning after an
//!   "f" swallowed the space ("ofthe"). The split pass re-inserts the space
//!   when both halves are dictionary words.
//!
//! The text is tokenized into alternating word / non-word runs that
//! partition the input exactly, so re-concatenating the tokens always
//! reproduces the text modulo the edits made.

use regex::Regex;
use std::sync::LazyLock;

use crate::casing::Casing;
use crate::dictionary::Dictionary;

/// A maximal run of word characters, or a maximal run of everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    text: String,
    is_word: bool,
}

static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+|\W+").unwrap());

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn tokenize(text: &str) -> Vec<Token> {
    RE_TOKEN
        .find_iter(text)
        .map(|m| Token {
            text: m.as_str().to_string(),
            is_word: m.as_str().chars().next().is_some_and(is_word_char),
        })
        .collect()
}

/// Runs the merge pass and then the split pass over `text`.
pub fn repair_words(text: &str, dictionary: &Dictionary) -> String {
    let mut tokens = tokenize(text);
    merge_split_words(&mut tokens, dictionary);
    split_fused_words(&mut tokens, dictionary);
    tokens.into_iter().map(|t| t.text).collect()
}

/// Separators a wrapped word may have been split across once the line break
/// itself has been collapsed to a space.
const MERGE_SEPARATORS: [&str; 3] = [" ", "- ", "\u{00AD} "];

/// Joins adjacent word fragments `A sep B` into one token when the dictionary
/// vouches for the joined form.
///
/// After a merge the scan stays on the merged token rather than moving past
/// it, so a word wrapped more than once re-merges fragment by fragment.
fn merge_split_words(tokens: &mut Vec<Token>, dictionary: &Dictionary) {
    let mut i = 0;
    while i + 2 < tokens.len() {
        let preceding = if i > 0 { tokens[i - 1].text.as_str() } else { "" };
        if should_merge(
            preceding,
            &tokens[i],
            &tokens[i + 1],
            &tokens[i + 2],
            dictionary,
        ) {
            let merged = format!("{}{}", tokens[i].text, tokens[i + 2].text);
            tokens[i] = Token {
                text: merged,
                is_word: true,
            };
            tokens.drain(i + 1..i + 3);
        } else {
            i += 1;
        }
    }
}

fn should_merge(
    preceding: &str,
    a: &Token,
    separator: &Token,
    b: &Token,
    dictionary: &Dictionary,
) -> bool {
    if !a.is_word || !b.is_word {
        return false;
    }
    // the "t" in "don't" and the "s" in "dog's" are not word fragments
    if preceding == "'" || preceding == "\u{2019}" {
        return false;
    }

    let gap_merge = MERGE_SEPARATORS.contains(&separator.text.as_str())
        && (!dictionary.contains(&a.text) || !dictionary.contains(&b.text));
    // a bare hyphen merges only when the trailing part is not a word of its
    // own, so genuine compounds like "well-known" survive
    let hyphen_merge = separator.text == "-" && !dictionary.contains(&b.text);
    if !gap_merge && !hyphen_merge {
        return false;
    }

    // two independently capitalized words are likely both proper nouns
    if Casing::of(&a.text) != Casing::Upper && Casing::of(&b.text) != Casing::Lower {
        return false;
    }

    dictionary.contains(&format!("{}{}", a.text, b.text))
}

/// Re-splits words fused by f-kerning.
///
/// Any word token absent from the dictionary is tried at each position after
/// an "f", leftmost first; the first position where both halves are
/// dictionary words wins.
fn split_fused_words(tokens: &mut [Token], dictionary: &Dictionary) {
    for token in tokens.iter_mut() {
        if !token.is_word || dictionary.contains(&token.text) {
            continue;
        }
        if let Some((left, right)) = find_kern_split(&token.text, dictionary) {
            token.text = format!("{left} {right}");
        }
    }
}

/// Finds the leftmost split after an "f" where both halves are dictionary
/// words. The first character is never a split point, so the left half keeps
/// at least two characters.
fn find_kern_split<'a>(word: &'a str, dictionary: &Dictionary) -> Option<(&'a str, &'a str)> {
    for (idx, _) in word.char_indices().skip(1).filter(|&(_, c)| c == 'f') {
        // "f" is ASCII, so idx + 1 is a character boundary
        let (left, right) = word.split_at(idx + 1);
        if dictionary.contains(left) && dictionary.contains(right) {
            return Some((left, right));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().copied())
    }

    #[test]
    fn test_tokens_partition_the_input() {
        let text = "one, two\u{2014}three 42!";
        let rebuilt: String = tokenize(text).into_iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_merge_across_space() {
        let d = dict(&["example", "a"]);
        assert_eq!(repair_words("exam ple", &d), "example");
    }

    #[test]
    fn test_merge_across_hyphen_space() {
        let d = dict(&["example"]);
        assert_eq!(repair_words("exam- ple", &d), "example");
    }

    #[test]
    fn test_merge_across_bare_hyphen() {
        let d = dict(&["example"]);
        assert_eq!(repair_words("exam-ple", &d), "example");
    }

    #[test]
    fn test_bare_hyphen_compound_survives() {
        // both halves are words, so the hyphen is a real compound
        let d = dict(&["well", "known", "wellknown"]);
        assert_eq!(repair_words("well-known", &d), "well-known");
    }

    #[test]
    fn test_known_words_do_not_merge_across_space() {
        let d = dict(&["out", "side", "outside"]);
        assert_eq!(repair_words("out side", &d), "out side");
    }

    #[test]
    fn test_contraction_guard() {
        // the apostrophe before "t" blocks treating it as a fragment
        let d = dict(&["don", "targue", "argue"]);
        assert_eq!(repair_words("don't argue", &d), "don't argue");
        assert_eq!(repair_words("don\u{2019}t argue", &d), "don\u{2019}t argue");
    }

    #[test]
    fn test_casing_guard_blocks_two_proper_nouns() {
        let d = dict(&["marlowe"]);
        assert_eq!(repair_words("Mar Lowe", &d), "Mar Lowe");
    }

    #[test]
    fn test_casing_guard_allows_capitalized_first_fragment() {
        let d = dict(&["example"]);
        assert_eq!(repair_words("Exam ple", &d), "Example");
    }

    #[test]
    fn test_all_caps_fragments_merge() {
        let d = dict(&["example"]);
        assert_eq!(repair_words("EXAM PLE", &d), "EXAMPLE");
    }

    #[test]
    fn test_triple_fragment_remerges() {
        // the merged token stays under the cursor and absorbs the next piece
        let d = dict(&["exam", "examp", "example"]);
        assert_eq!(repair_words("exam p le", &d), "example");
    }

    #[test]
    fn test_split_fused_word() {
        let d = dict(&["of", "the"]);
        assert_eq!(repair_words("ofthe", &d), "of the");
    }

    #[test]
    fn test_split_takes_leftmost_valid_position() {
        // "off ab" would also be valid, but the split after the first "f" wins
        let d = dict(&["of", "fab", "off", "ab"]);
        assert_eq!(repair_words("offab", &d), "of fab");
    }

    #[test]
    fn test_split_skips_invalid_positions() {
        let d = dict(&["off", "ten"]);
        assert_eq!(repair_words("offten", &d), "off ten");
    }

    #[test]
    fn test_dictionary_word_is_never_split() {
        let d = dict(&["effort", "ef", "fort"]);
        assert_eq!(repair_words("effort", &d), "effort");
    }

    #[test]
    fn test_unsplittable_word_is_left_alone() {
        let d = dict(&["of"]);
        assert_eq!(repair_words("ofzzz", &d), "ofzzz");
    }

    #[test]
    fn test_first_character_is_not_a_split_point() {
        // an "f" at the start would leave a one-character left half
        let d = dict(&["f", "ace"]);
        assert_eq!(repair_words("face", &d), "face");
    }

    #[test]
    fn test_punctuation_is_preserved_verbatim() {
        let d = dict(&["example"]);
        assert_eq!(repair_words("(exam ple), done.", &d), "(example), done.");
    }
}
