//! Heuristic return predictor for lump-sum equity and commodity investments.
//!
//! Each asset is a fixed monthly price series plus a handful of constants.
//! The series gives a mean monthly change and its volatility; the mean is
//! annualized, perturbed by a random sentiment multiplier and clamped into
//! the asset's return bounds.

use finvoice_core::{
    AssetClass, Error, MarketSentiment, PredictionResult, RandomSource, Result, RiskLevel,
};
use tracing::debug;

/// Monthly stock-index closes (NIFTY 50 proxy)
pub const EQUITY_SERIES: [f64; 10] = [
    15000.0, 15200.0, 14800.0, 15500.0, 15800.0, 16200.0, 15900.0, 16500.0, 16800.0, 17200.0,
];

/// Monthly gold price per gram
pub const COMMODITY_SERIES: [f64; 10] = [
    4500.0, 4550.0, 4600.0, 4650.0, 4700.0, 4750.0, 4800.0, 4850.0, 4900.0, 4950.0,
];

const MONTHS_PER_YEAR: f64 = 12.0;

/// Mean and population standard deviation of period-over-period changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub avg_return: f64,
    pub volatility: f64,
}

impl SeriesStats {
    /// Zero for series shorter than two points.
    pub fn from_series(series: &[f64]) -> Self {
        let changes: Vec<f64> = series
            .windows(2)
            .map(|w| (w[1] - w[0]) / w[0])
            .collect();
        if changes.is_empty() {
            return Self {
                avg_return: 0.0,
                volatility: 0.0,
            };
        }

        let n = changes.len() as f64;
        let avg_return = changes.iter().sum::<f64>() / n;
        let variance = changes
            .iter()
            .map(|c| (c - avg_return).powi(2))
            .sum::<f64>()
            / n;

        Self {
            avg_return,
            volatility: variance.sqrt(),
        }
    }
}

/// Series and constants for one asset class
#[derive(Debug, Clone, PartialEq)]
pub struct AssetModel {
    pub asset: AssetClass,
    pub series: Vec<f64>,
    /// Range the sentiment multiplier is drawn from
    pub sentiment_range: (f64, f64),
    /// Clamp applied to the annualized return
    pub return_bounds: (f64, f64),
    pub confidence_floor: f64,
    /// Confidence lost per unit of volatility
    pub volatility_weight: f64,
}

impl AssetModel {
    pub fn equity() -> Self {
        Self {
            asset: AssetClass::Equity,
            series: EQUITY_SERIES.to_vec(),
            sentiment_range: (0.8, 1.2),
            return_bounds: (0.05, 0.25),
            confidence_floor: 0.6,
            volatility_weight: 2.0,
        }
    }

    pub fn commodity() -> Self {
        Self {
            asset: AssetClass::Commodity,
            series: COMMODITY_SERIES.to_vec(),
            sentiment_range: (0.9, 1.1),
            return_bounds: (0.02, 0.15),
            confidence_floor: 0.7,
            volatility_weight: 1.5,
        }
    }

    pub fn for_asset(asset: AssetClass) -> Self {
        match asset {
            AssetClass::Equity => Self::equity(),
            AssetClass::Commodity => Self::commodity(),
        }
    }

    /// Replace the price series. Needs two or more finite, positive points.
    pub fn with_series(mut self, series: Vec<f64>) -> Result<Self> {
        if series.len() < 2 {
            return Err(Error::invalid_input("price series needs at least two points"));
        }
        if let Some(bad) = series.iter().find(|p| !p.is_finite() || **p <= 0.0) {
            return Err(Error::invalid_input(format!(
                "price series values must be positive, got {bad}"
            )));
        }
        self.series = series;
        Ok(self)
    }

    pub fn with_return_bounds(mut self, low: f64, high: f64) -> Result<Self> {
        if !(low <= high) {
            return Err(Error::invalid_input(format!(
                "return bounds out of order: {low} > {high}"
            )));
        }
        self.return_bounds = (low, high);
        Ok(self)
    }

    pub fn stats(&self) -> SeriesStats {
        SeriesStats::from_series(&self.series)
    }

    pub fn predict(
        &self,
        amount: f64,
        timeframe: &str,
        rng: &dyn RandomSource,
    ) -> PredictionResult {
        let stats = self.stats();
        let (s_low, s_high) = self.sentiment_range;
        let sentiment = rng.uniform(s_low, s_high);

        let base_return = stats.avg_return * MONTHS_PER_YEAR * sentiment;
        let (r_low, r_high) = self.return_bounds;
        let predicted_return = base_return.max(r_low).min(r_high);
        let predicted_value = amount * (1.0 + predicted_return);

        let confidence = (1.0 - stats.volatility * self.volatility_weight)
            .max(self.confidence_floor)
            .min(1.0);

        debug!(
            "{} model: avg_return={:.5} volatility={:.5} sentiment={:.3} base={:.4} -> {:.4}",
            self.asset, stats.avg_return, stats.volatility, sentiment, base_return, predicted_return
        );

        PredictionResult {
            input_amount: amount,
            predicted_return,
            predicted_value,
            confidence,
            timeframe: timeframe.to_string(),
            risk_level: risk_level(self.asset, predicted_return),
            market_sentiment: market_sentiment(self.asset, sentiment),
            recommendation: recommendation(self.asset, predicted_return, confidence).to_string(),
        }
    }
}

fn risk_level(asset: AssetClass, predicted_return: f64) -> RiskLevel {
    match asset {
        AssetClass::Equity => RiskLevel::from_equity_return(predicted_return),
        AssetClass::Commodity => RiskLevel::Low,
    }
}

fn market_sentiment(asset: AssetClass, sentiment: f64) -> MarketSentiment {
    match asset {
        AssetClass::Equity => MarketSentiment::from_multiplier(sentiment),
        AssetClass::Commodity => MarketSentiment::Stable,
    }
}

/// Recommendation tier for a return/confidence pair
pub fn recommendation(asset: AssetClass, predicted_return: f64, confidence: f64) -> &'static str {
    match asset {
        AssetClass::Equity => {
            if predicted_return >= 0.15 && confidence >= 0.7 {
                "Strong Buy - High growth potential with good confidence"
            } else if predicted_return >= 0.10 && confidence >= 0.6 {
                "Buy - Good growth potential"
            } else if predicted_return >= 0.05 {
                "Hold - Moderate growth expected"
            } else {
                "Consider alternatives - Low growth potential"
            }
        }
        AssetClass::Commodity => {
            if predicted_return >= 0.10 && confidence >= 0.8 {
                "Strong Buy - Excellent hedge with good returns"
            } else if predicted_return >= 0.05 && confidence >= 0.7 {
                "Buy - Good hedge against inflation"
            } else {
                "Hold - Stable but low returns"
            }
        }
    }
}

/// Models for both asset classes
#[derive(Debug, Clone, PartialEq)]
pub struct Predictor {
    pub equity: AssetModel,
    pub commodity: AssetModel,
}

impl Default for Predictor {
    fn default() -> Self {
        Self {
            equity: AssetModel::equity(),
            commodity: AssetModel::commodity(),
        }
    }
}

impl Predictor {
    pub fn model(&self, asset: AssetClass) -> &AssetModel {
        match asset {
            AssetClass::Equity => &self.equity,
            AssetClass::Commodity => &self.commodity,
        }
    }

    /// Predict for an asset label; unknown labels fail before any computation.
    pub fn predict(
        &self,
        amount: f64,
        asset_label: &str,
        timeframe: &str,
        rng: &dyn RandomSource,
    ) -> Result<PredictionResult> {
        let asset: AssetClass = asset_label.parse()?;
        Ok(self.model(asset).predict(amount, timeframe, rng))
    }
}

pub fn predict_equity(amount: f64, timeframe: &str, rng: &dyn RandomSource) -> PredictionResult {
    AssetModel::equity().predict(amount, timeframe, rng)
}

pub fn predict_commodity(amount: f64, timeframe: &str, rng: &dyn RandomSource) -> PredictionResult {
    AssetModel::commodity().predict(amount, timeframe, rng)
}

/// Predict with the built-in models.
pub fn predict_return(
    amount: f64,
    asset_label: &str,
    timeframe: &str,
    rng: &dyn RandomSource,
) -> Result<PredictionResult> {
    Predictor::default().predict(amount, asset_label, timeframe, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use finvoice_core::{FixedRandom, ThreadRandom};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_series_stats_equity() {
        let stats = SeriesStats::from_series(&EQUITY_SERIES);
        assert!(close(stats.avg_return, 0.015577), "avg {}", stats.avg_return);
        assert!(close(stats.volatility, 0.022616), "vol {}", stats.volatility);
    }

    #[test]
    fn test_series_stats_short_series() {
        let stats = SeriesStats::from_series(&[100.0]);
        assert_eq!(stats.avg_return, 0.0);
        assert_eq!(stats.volatility, 0.0);
    }

    #[test]
    fn test_equity_neutral_sentiment() {
        let result = predict_equity(50000.0, "1 year", &FixedRandom::new(1.0));
        assert!(close(result.predicted_return, 0.186925), "got {}", result.predicted_return);
        assert_eq!(result.predicted_value, 50000.0 * (1.0 + result.predicted_return));
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.market_sentiment, MarketSentiment::Neutral);
        assert!(result.recommendation.starts_with("Strong Buy"));
        assert_eq!(result.timeframe, "1 year");
        assert_eq!(result.input_amount, 50000.0);
    }

    #[test]
    fn test_equity_bearish_sentiment() {
        let result = predict_equity(50000.0, "1 year", &FixedRandom::new(0.8));
        assert!(close(result.predicted_return, 0.149540), "got {}", result.predicted_return);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.market_sentiment, MarketSentiment::Bearish);
        assert_eq!(result.recommendation, "Buy - Good growth potential");
    }

    #[test]
    fn test_equity_bullish_sentiment() {
        let result = predict_equity(1000.0, "6 months", &FixedRandom::new(1.2));
        assert_eq!(result.market_sentiment, MarketSentiment::Bullish);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(close(result.confidence, 1.0 - 0.022616 * 2.0));
    }

    #[test]
    fn test_equity_flat_series_clamps_to_floor() {
        let model = AssetModel::equity()
            .with_series(vec![100.0, 100.0, 100.0])
            .unwrap();
        let result = model.predict(1000.0, "1 year", &FixedRandom::new(1.0));
        assert_eq!(result.predicted_return, 0.05);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.recommendation, "Hold - Moderate growth expected");
    }

    #[test]
    fn test_equity_ceiling_clamp() {
        let model = AssetModel::equity()
            .with_series(vec![100.0, 150.0, 225.0])
            .unwrap();
        let result = model.predict(1000.0, "1 year", &FixedRandom::new(1.2));
        assert_eq!(result.predicted_return, 0.25);
        assert_eq!(result.predicted_value, 1250.0);
    }

    #[test]
    fn test_equity_volatile_series_hits_confidence_floor() {
        let model = AssetModel::equity()
            .with_series(vec![100.0, 200.0, 100.0, 200.0])
            .unwrap();
        let result = model.predict(1000.0, "1 year", &FixedRandom::new(1.0));
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_equity_consider_alternatives_with_wider_bounds() {
        let model = AssetModel::equity()
            .with_series(vec![100.0, 99.0, 98.0])
            .unwrap()
            .with_return_bounds(-0.5, 0.25)
            .unwrap();
        let result = model.predict(1000.0, "1 year", &FixedRandom::new(1.0));
        assert!(result.predicted_return < 0.0);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.recommendation, "Consider alternatives - Low growth potential");
    }

    #[test]
    fn test_commodity_defaults() {
        let result = predict_commodity(10000.0, "1 year", &FixedRandom::new(1.0));
        assert!(close(result.predicted_return, 0.127756), "got {}", result.predicted_return);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.market_sentiment, MarketSentiment::Stable);
        assert_eq!(result.recommendation, "Strong Buy - Excellent hedge with good returns");
        assert!(result.confidence > 0.99 && result.confidence <= 1.0);
    }

    #[test]
    fn test_commodity_lower_tiers() {
        let buy = AssetModel::commodity()
            .with_series(vec![200.0, 201.0, 202.005])
            .unwrap()
            .predict(100.0, "1 year", &FixedRandom::new(1.0));
        assert_eq!(buy.recommendation, "Buy - Good hedge against inflation");

        let hold = AssetModel::commodity()
            .with_series(vec![200.0, 200.0])
            .unwrap()
            .predict(100.0, "1 year", &FixedRandom::new(1.0));
        assert_eq!(hold.predicted_return, 0.02);
        assert_eq!(hold.recommendation, "Hold - Stable but low returns");
    }

    #[test]
    fn test_predict_return_dispatch() {
        let rng = FixedRandom::new(1.0);
        let equity = predict_return(100.0, "equity", "1 year", &rng).unwrap();
        let stocks = predict_return(100.0, "stocks", "1 year", &rng).unwrap();
        assert_eq!(equity, stocks);
        let gold = predict_return(100.0, "Gold", "1 year", &rng).unwrap();
        assert_eq!(gold.market_sentiment, MarketSentiment::Stable);
    }

    #[test]
    fn test_predict_return_rejects_unknown_asset() {
        for amount in [0.0, -5.0, 1e9] {
            let err = predict_return(amount, "bonds", "1 year", &ThreadRandom).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)));
        }
    }

    #[test]
    fn test_with_series_validation() {
        assert!(AssetModel::equity().with_series(vec![1.0]).is_err());
        assert!(AssetModel::equity().with_series(vec![1.0, 0.0]).is_err());
        assert!(AssetModel::equity().with_series(vec![1.0, f64::NAN]).is_err());
        assert!(AssetModel::equity().with_return_bounds(0.3, 0.1).is_err());
    }
}
