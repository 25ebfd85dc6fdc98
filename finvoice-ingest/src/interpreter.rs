//! Expense interpreter: extraction by strategy, then categorization.

use finvoice_core::{CategoryTable, ParsedExpense};
use tracing::debug;

use crate::parsers::{parse_general, parse_strict};
use crate::types::ParseStrategy;

/// Parse one expense statement into a categorized record. Never fails.
pub fn parse_expense_text(
    text: &str,
    strategy: ParseStrategy,
    table: &CategoryTable,
) -> ParsedExpense {
    let extracted = match strategy {
        ParseStrategy::General => parse_general(text),
        ParseStrategy::Strict => parse_strict(text),
    };
    let category = table.categorize(&extracted.description).to_string();

    debug!(
        "Parsed '{}' ({}): description='{}' amount={:?} category={}",
        text, strategy, extracted.description, extracted.amount, category
    );

    ParsedExpense {
        description: extracted.description,
        amount: extracted.amount,
        category,
    }
}
