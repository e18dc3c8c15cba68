//! Whitespace and punctuation normalization stages.
//!
//! Each function is a pure `&str -> String` transformation built around one
//! compiled pattern. All of them are no-ops on text that is already clean,
//! so re-running a stage never changes its own output.
//!
//! Several rules need look-behind/look-ahead (`fancy_regex`); the rest use
//! plain `regex`.

use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use std::sync::LazyLock;

// ============================================================================
// Line breaks and soft hyphens
// ============================================================================

static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\r?\n\s*").unwrap());

/// Collapses every line break, together with any whitespace run touching it,
/// to a single space, then trims the ends.
///
/// Later stages assume single-line text; this must run before endnote
/// detection and hyphen handling.
pub fn collapse_line_breaks(text: &str) -> String {
    RE_LINE_BREAK.replace_all(text, " ").trim().to_string()
}

static RE_SOFT_HYPHEN: LazyLock<Regex> = LazyLock::new(|| Regex::new("\u{00AD} ?").unwrap());

/// Removes soft hyphens (U+00AD), each with an optional trailing space.
///
/// Soft hyphens are invisible hyphenation hints; once the line wrap is gone
/// they carry no information and would otherwise be mistaken for real
/// hyphens by the stages below.
pub fn strip_soft_hyphens(text: &str) -> String {
    RE_SOFT_HYPHEN.replace_all(text, "").to_string()
}

// ============================================================================
// Dashes and hyphens
// ============================================================================

static RE_EM_DASH: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<=\w) ?\u{2014} ?|-- ?").unwrap());

/// Normalizes em-dashes to the bare, unspaced form.
///
/// An em-dash following a word character loses its surrounding spaces;
/// a double hyphen (with optional trailing space) becomes an em-dash.
pub fn tighten_em_dashes(text: &str) -> String {
    RE_EM_DASH.replace_all(text, "\u{2014}").to_string()
}

static RE_HYPHEN_GAP: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<!-)- ").unwrap());

/// Removes the space after a single hyphen, re-joining words that were
/// hyphenated across a line wrap ("exam- ple" -> "exam-ple").
///
/// A hyphen preceded by another hyphen is left alone; that case was an
/// em-dash and is handled by [`tighten_em_dashes`].
pub fn close_hyphen_gap(text: &str) -> String {
    RE_HYPHEN_GAP.replace_all(text, "-").to_string()
}

// ============================================================================
// Parentheses and quotes
// ============================================================================

static RE_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\( *([^()]*[^() ]) *\)").unwrap());

/// Removes the stray spaces just inside parentheses: "( text )" -> "(text)".
pub fn tighten_parens(text: &str) -> String {
    RE_PAREN.replace_all(text, "($1)").to_string()
}

static RE_SPACE_BEFORE_RIGHT_SQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" \u{2019}").unwrap());
static RE_SPACE_AFTER_LEFT_SQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{2018} ").unwrap());

/// Removes the space before a right single curly quote and after a left one.
pub fn tighten_single_quotes(text: &str) -> String {
    let text = RE_SPACE_BEFORE_RIGHT_SQUOTE.replace_all(text, "\u{2019}");
    RE_SPACE_AFTER_LEFT_SQUOTE
        .replace_all(&text, "\u{2018}")
        .to_string()
}

static RE_SPACE_BEFORE_RIGHT_DQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" \u{201D}").unwrap());
static RE_SPACE_AFTER_LEFT_DQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{201C} ").unwrap());

/// Removes the space before a right double curly quote and after a left one.
pub fn tighten_double_quotes(text: &str) -> String {
    let text = RE_SPACE_BEFORE_RIGHT_DQUOTE.replace_all(text, "\u{201D}");
    RE_SPACE_AFTER_LEFT_DQUOTE
        .replace_all(&text, "\u{201C}")
        .to_string()
}

// ============================================================================
// Stray periods
// ============================================================================

static RE_STRAY_PERIOD_SPACE: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<![.!?]) \.(?! ?\.)").unwrap());

/// Removes a spurious space before a sentence-final period.
///
/// The period must not follow other sentence-ending punctuation and must not
/// begin an ellipsis, so "word !." and "word . . ." are preserved.
pub fn drop_stray_period_space(text: &str) -> String {
    RE_STRAY_PERIOD_SPACE.replace_all(text, ".").to_string()
}
