//! Strict "add <description> <amount>" parser.
//!
//! The description is exactly the token after "add"; anything past the
//! amount is ignored. When the third token isn't a numeral, the first numeral
//! token anywhere in the text is the amount. Text not shaped like that goes
//! through the general parser instead.

use tracing::debug;

use super::{numeral, parse_general, tokenize, Extracted};

pub fn parse_strict(text: &str) -> Extracted {
    let tokens = tokenize(text);

    if tokens.len() < 3 || tokens[0] != "add" {
        debug!("'{}' is not 'add <description> <amount>', using general parser", text);
        return parse_general(text);
    }

    let amount = numeral(&tokens[2]).or_else(|| tokens.iter().find_map(|t| numeral(t)));
    Extracted {
        description: tokens[1].clone(),
        amount,
    }
}
