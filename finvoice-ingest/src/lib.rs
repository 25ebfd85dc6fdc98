//! finvoice-ingest: turns free-text (and voice-transcribed) expense statements into records.

pub mod interpreter;
pub mod parsers;
pub mod types;

pub use interpreter::parse_expense_text;
pub use parsers::Extracted;
pub use types::ParseStrategy;
