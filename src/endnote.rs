//! Detection and bracketing of bare endnote numbers.
//!
//! Text copied out of a PDF renders footnote markers as plain digits glued to
//! the preceding word ("claim,22 and"). These stages rewrite such digits to a
//! bracketed marker form ("claim,[22] and") while leaving years, decimals,
//! ratios, and abbreviated citations alone.

use regex::Regex;
use std::sync::LazyLock;

// Marker detection scans maximal digit runs and validates each candidate
// against anchored patterns over the text on either side. The context rules
// are of varying widths, so they live in these side patterns rather than in
// look-arounds on the match itself.

static RE_DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Accepting context, anchored at the end of the text before the digits:
/// a comma not itself after a digit, a letter or semicolon, or closing
/// punctuation / a closing quote with an optional trailing space.
static RE_NOTE_CONTEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:(?:^|[^0-9]),|[A-Za-z;]|[\])!.?"'\u{2019}\u{201D}] ?)$"#).unwrap()
});

/// Rejecting context: a citation abbreviation ("p. 22", "vol. 3", "XIV. 2")
/// or a digit-and-period prefix (the "3." in "3.14") right before the digits.
static RE_NOTE_GUARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\b(?:pp?|vol|no|cf|ca|vv?|chap|[IVXLCDM]+)\.? ?|[0-9]\.)$").unwrap()
});

/// Rejecting trailer: `.digit`, `:digit`, a word character, or a colon after
/// the digits (decimals, verse references, ratios).
static RE_NOTE_TRAILER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[.:][0-9]|\w|:)").unwrap());

/// Brackets bare endnote numbers: "claim,22 and" -> "claim,[22] and".
///
/// A run of 1-3 digits is taken for a marker when it directly follows prose
/// punctuation and none of the guards fire. Markers are assumed to be at
/// most three digits, which keeps four-digit years out ("(Title, 2010)").
pub fn bracket_bare_numbers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in RE_DIGIT_RUN.find_iter(text) {
        let head = &text[..m.start()];
        let tail = &text[m.end()..];
        let is_marker = m.as_str().len() <= 3
            && RE_NOTE_CONTEXT.is_match(head)
            && !RE_NOTE_GUARD.is_match(head)
            && !RE_NOTE_TRAILER.is_match(tail);
        if is_marker {
            out.push_str(&text[last..m.start()]);
            out.push('[');
            out.push_str(m.as_str());
            out.push(']');
            last = m.end();
        }
    }
    out.push_str(&text[last..]);
    out
}

static RE_MARKER_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([."'\u{2019}\u{201D}]) (\[\d+\])"#).unwrap());

/// Removes the single space between sentence-final punctuation and a
/// bracketed marker, keeping "word.[3]" rather than "word. [3]".
pub fn tighten_marker_spacing(text: &str) -> String {
    RE_MARKER_GAP.replace_all(text, "${1}${2}").to_string()
}

static RE_LEADING_LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\. ").unwrap());

/// Converts an enumerated-list marker at the start of the text ("12. ") into
/// an endnote marker ("[12] ") — the form a footnote section's own numbering
/// takes when pasted as ordinary text.
pub fn convert_leading_list_marker(text: &str) -> String {
    RE_LEADING_LIST_MARKER.replace(text, "[$1] ").to_string()
}
