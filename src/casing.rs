//! Letter-casing classification.

/// The casing shape of a string: which of the two letter cases it contains.
///
/// `Mixed` means both cases are present, `None` means the string has no
/// letters at all (digits, punctuation, empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    None,
    Lower,
    Upper,
    Mixed,
}

impl Casing {
    /// Classifies `s` by the presence of lowercase and uppercase letters.
    pub fn of(s: &str) -> Self {
        let has_lower = s.chars().any(char::is_lowercase);
        let has_upper = s.chars().any(char::is_uppercase);
        match (has_lower, has_upper) {
            (false, false) => Casing::None,
            (true, false) => Casing::Lower,
            (false, true) => Casing::Upper,
            (true, true) => Casing::Mixed,
        }
    }
}
