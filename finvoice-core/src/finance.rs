//! Record types produced by the expense interpreter, return predictor and advisor

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// An expense statement turned into a structured record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedExpense {
    /// Free-text remainder after the amount and "add" are removed (may be empty)
    pub description: String,
    /// Non-negative amount found in the text, if any
    pub amount: Option<f64>,
    /// Always one of the category table's names
    pub category: String,
}

/// An already-recorded expense, as fed to the spending advisor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
}

impl Expense {
    pub fn new(description: impl Into<String>, amount: f64, category: Option<&str>) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.map(str::to_string),
        }
    }
}

/// Investment type a prediction is requested for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AssetClass {
    #[serde(rename = "equity")]
    Equity,
    #[serde(rename = "commodity")]
    Commodity,
}

impl AssetClass {
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::Equity => "equity",
            AssetClass::Commodity => "commodity",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AssetClass {
    type Err = Error;

    /// Accepts "equity"/"stocks"/"stock" and "commodity"/"gold", any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equity" | "stocks" | "stock" => Ok(AssetClass::Equity),
            "commodity" | "gold" => Ok(AssetClass::Commodity),
            other => Err(Error::invalid_input(format!(
                "invalid investment type '{other}'; use 'equity' or 'commodity'"
            ))),
        }
    }
}

/// Qualitative risk tier derived from the predicted return
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Tier for an equity return: Low below 8%, Medium below 15%, else High
    pub fn from_equity_return(predicted_return: f64) -> Self {
        if predicted_return < 0.08 {
            RiskLevel::Low
        } else if predicted_return < 0.15 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Market mood label reported alongside a prediction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MarketSentiment {
    Bullish,
    Bearish,
    Neutral,
    Stable,
}

impl MarketSentiment {
    pub fn from_multiplier(sentiment: f64) -> Self {
        if sentiment > 1.1 {
            MarketSentiment::Bullish
        } else if sentiment < 0.9 {
            MarketSentiment::Bearish
        } else {
            MarketSentiment::Neutral
        }
    }
}

/// Return estimate for a lump-sum investment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub input_amount: f64,
    /// Annualized fraction, e.g. 0.12 for 12%
    pub predicted_return: f64,
    pub predicted_value: f64,
    pub confidence: f64,
    /// Echo of the requested timeframe label
    pub timeframe: String,
    pub risk_level: RiskLevel,
    pub market_sentiment: MarketSentiment,
    pub recommendation: String,
}

/// Spending share of one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryInsight {
    pub category: String,
    pub amount: f64,
    /// Rounded share of total spending, 0-100
    pub percentage: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpendingAdvice {
    pub advice: String,
    pub category_insights: Vec<CategoryInsight>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_class_aliases() {
        assert_eq!("equity".parse::<AssetClass>().unwrap(), AssetClass::Equity);
        assert_eq!("Stocks".parse::<AssetClass>().unwrap(), AssetClass::Equity);
        assert_eq!(" GOLD ".parse::<AssetClass>().unwrap(), AssetClass::Commodity);
        assert_eq!("commodity".parse::<AssetClass>().unwrap(), AssetClass::Commodity);
    }

    #[test]
    fn test_asset_class_rejects_unknown() {
        let err = "bonds".parse::<AssetClass>().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref m) if m.contains("bonds")));
    }

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_equity_return(0.05), RiskLevel::Low);
        assert_eq!(RiskLevel::from_equity_return(0.08), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_equity_return(0.1499), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_equity_return(0.15), RiskLevel::High);
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(MarketSentiment::from_multiplier(1.15), MarketSentiment::Bullish);
        assert_eq!(MarketSentiment::from_multiplier(1.1), MarketSentiment::Neutral);
        assert_eq!(MarketSentiment::from_multiplier(0.9), MarketSentiment::Neutral);
        assert_eq!(MarketSentiment::from_multiplier(0.85), MarketSentiment::Bearish);
    }

    #[test]
    fn test_parsed_expense_wire_shape() {
        let parsed = ParsedExpense {
            description: String::new(),
            amount: None,
            category: "misc".to_string(),
        };
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["description"], "");
        assert!(json["amount"].is_null());
        assert_eq!(json["category"], "misc");
    }

    #[test]
    fn test_prediction_result_camel_case() {
        let result = PredictionResult {
            input_amount: 100.0,
            predicted_return: 0.1,
            predicted_value: 110.0,
            confidence: 0.9,
            timeframe: "1 year".to_string(),
            risk_level: RiskLevel::Medium,
            market_sentiment: MarketSentiment::Neutral,
            recommendation: "Buy - Good growth potential".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["inputAmount"], 100.0);
        assert_eq!(json["riskLevel"], "Medium");
        assert_eq!(json["marketSentiment"], "Neutral");
    }
}
