//! finvoice-finance: return predictor, spending advisor and expense CSV reader

pub mod advice;
pub mod expenses_csv;
pub mod predictor;

pub use advice::{advise, category_insights, category_totals};
pub use expenses_csv::{parse_expenses_csv, parse_expenses_reader};
pub use predictor::{
    predict_commodity, predict_equity, predict_return, AssetModel, Predictor, SeriesStats,
};
