//! General statement parser: first numeral anywhere is the amount.
//!
//! Examples (after lower-casing):
//!   "add dinner 300"            -> ("dinner", 300)
//!   "spent 250 on lunch today"  -> ("spent on lunch today", 250)
//!   "paid ₹1200 for rent"       -> ("paid ₹ for rent", 1200)

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::{numeral, tokenize, Extracted};

/// Numerals embedded in a larger token, e.g. "$12.50," or "rs.300"
static EMBEDDED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]+(?:\.[0-9]+)?\b").expect("embedded number pattern compiles")
});

/// Extract amount and description from free text.
///
/// 1. The first whole token that is a numeral becomes the amount and is dropped.
/// 2. Without one, the first numeral embedded in any token is cut out of it.
/// 3. The first "add" token is dropped.
pub fn parse_general(text: &str) -> Extracted {
    let mut tokens = tokenize(text);
    let mut amount = None;

    if let Some(pos) = tokens.iter().position(|t| numeral(t).is_some()) {
        amount = numeral(&tokens[pos]);
        tokens.remove(pos);
    } else if let Some((pos, value, rest)) = find_embedded(&tokens) {
        debug!("Using embedded numeral {} from '{}'", value, tokens[pos]);
        amount = Some(value);
        if rest.is_empty() {
            tokens.remove(pos);
        } else {
            tokens[pos] = rest;
        }
    }

    if let Some(pos) = tokens.iter().position(|t| t == "add") {
        tokens.remove(pos);
    }

    Extracted {
        description: tokens.join(" ").trim().to_string(),
        amount,
    }
}

/// First token containing a numeral: (index, value, token with the numeral cut out)
fn find_embedded(tokens: &[String]) -> Option<(usize, f64, String)> {
    tokens.iter().enumerate().find_map(|(i, tok)| {
        let m = EMBEDDED_NUMBER.find(tok)?;
        let value = m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let rest = format!("{}{}", &tok[..m.start()], &tok[m.end()..]);
        Some((i, value, rest))
    })
}
