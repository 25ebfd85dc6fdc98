//! finvoice-core: shared types, the category table and injectable randomness

pub mod categories;
pub mod error;
pub mod finance;
pub mod random;

pub use categories::{categorize, CategoryRule, CategoryTable, FALLBACK_CATEGORY};
pub use error::{Error, Result};
pub use finance::{
    AssetClass, CategoryInsight, Expense, MarketSentiment, ParsedExpense, PredictionResult,
    RiskLevel, SpendingAdvice,
};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
