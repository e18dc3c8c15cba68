//! First-line title-case normalization.
//!
//! Headings pasted from a PDF frequently arrive as a shouting first line
//! ("THE BOOK OF EXAMPLES"). When the first line looks like such a headline
//! it is rewritten in title case; anything with a lowercase letter in it is
//! left strictly alone.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Words kept lowercase in titles, matched against the exact all-caps token.
const NO_CAP_WORDS: [&str; 12] = [
    "A", "THE", "IN", "FOR", "AND", "OF", "WITH", "TO", "THAT", "ON", "AS", "IS",
];

static RE_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n?|\n").unwrap());

/// Accepts only lines built from digits, uppercase letters, spaces, and a
/// fixed set of punctuation, dashes (including en/em dashes), curly quotes,
/// ampersands, and question marks. This is what rejects ordinary prose.
static RE_HEADLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[0-9A-Z .,:'"\u{2013}\u{2014}\u{2018}-\u{201F}&?-]{2,}$"#).unwrap()
});

/// A token consisting solely of roman-numeral letters, optionally wrapped in
/// non-letters, is treated as a numeral and left in place.
static RE_SLOPPY_ROMAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\W*[IVXLCDM]+\W*$").unwrap());

/// Word tokens: a word-start character (letters, digits, apostrophes) plus
/// the remaining word characters.
static RE_TITLE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\w'\u{2019}])(\w*)").unwrap());

static RE_FIRST_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\W*)(\w)").unwrap());

/// A subtitle boundary: a colon or quote, optional whitespace, then the
/// letter to re-capitalize.
static RE_AFTER_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([:"'])(\s*)(\w)"#).unwrap());

/// Rewrites an all-caps first line in title case; the rest of the text is
/// passed through untouched.
///
/// Roman-numeral tokens keep their casing, the words in [`NO_CAP_WORDS`] are
/// lowered entirely, and everything else keeps its first letter. A final
/// pass restores the capital at the start of the line and after subtitle
/// boundaries, where a lowered function word may have landed.
pub fn normalize_first_line(text: &str) -> String {
    let (first_line, line_break, rest) = match RE_NEWLINE.find(text) {
        Some(m) => (&text[..m.start()], m.as_str(), &text[m.end()..]),
        None => (text, "", ""),
    };

    if !RE_HEADLINE.is_match(first_line) {
        return text.to_string();
    }

    let line = RE_TITLE_WORD.replace_all(first_line, |caps: &Captures| {
        let token = &caps[0];
        if RE_SLOPPY_ROMAN.is_match(token) {
            token.to_string()
        } else if NO_CAP_WORDS.contains(&token) {
            token.to_lowercase()
        } else {
            format!("{}{}", &caps[1], caps[2].to_lowercase())
        }
    });

    let line = RE_FIRST_LETTER.replace(&line, |caps: &Captures| {
        format!("{}{}", &caps[1], caps[2].to_uppercase())
    });

    let line = RE_AFTER_BOUNDARY.replace_all(&line, |caps: &Captures| {
        format!("{}{}{}", &caps[1], &caps[2], caps[3].to_uppercase())
    });

    format!("{line}{line_break}{rest}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_caps_first_line() {
        assert_eq!(
            normalize_first_line("THE BOOK OF EXAMPLES"),
            "The Book of Examples"
        );
    }

    #[test]
    fn test_rest_of_text_is_untouched() {
        assert_eq!(
            normalize_first_line("A STUDY IN SCARLET\nThe REST stays AS IS."),
            "A Study in Scarlet\nThe REST stays AS IS."
        );
    }

    #[test]
    fn test_roman_numerals_are_preserved() {
        assert_eq!(
            normalize_first_line("III. INTRODUCTION"),
            "III. Introduction"
        );
    }

    #[test]
    fn test_subtitle_recapitalized_after_colon() {
        assert_eq!(
            normalize_first_line("HISTORY: THE EARLY YEARS"),
            "History: The Early Years"
        );
    }

    #[test]
    fn test_leading_no_cap_word_is_recapitalized() {
        assert_eq!(
            normalize_first_line("OF MICE AND MEN"),
            "Of Mice and Men"
        );
    }

    #[test]
    fn test_mixed_case_line_is_rejected() {
        let text = "Normal sentence here\nSECOND LINE";
        assert_eq!(normalize_first_line(text), text);
    }

    #[test]
    fn test_single_character_line_is_rejected() {
        assert_eq!(normalize_first_line("A"), "A");
    }

    #[test]
    fn test_crlf_break_is_preserved() {
        assert_eq!(
            normalize_first_line("FIRST LINE\r\nrest"),
            "First Line\r\nrest"
        );
    }
}
