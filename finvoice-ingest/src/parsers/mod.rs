pub mod general;
pub mod strict;

pub use general::parse_general;
pub use strict::parse_strict;

/// Amount and description pulled out of one statement, before categorization
#[derive(Debug, Clone, PartialEq)]
pub struct Extracted {
    pub description: String,
    pub amount: Option<f64>,
}

/// Parse a whole token as a non-negative decimal numeral.
///
/// Accepts ASCII digits with at most one '.', e.g. "300", "12.5", "300.", ".5".
/// Values too large for a finite `f64` are rejected.
pub(crate) fn numeral(token: &str) -> Option<f64> {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for c in token.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }
    token.parse().ok().filter(|v: &f64| v.is_finite())
}

/// Lower-case and split on whitespace.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|t| t.to_string())
        .collect()
}
