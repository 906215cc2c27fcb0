//! Trend analytics over a forecast.
//!
//! Day-over-day classification of predicted impressions plus the summary
//! values shown next to the forecast table (peak, trough, daily averages).

use chrono::NaiveDate;
use model::{FORECAST_DAYS, ForecastDay, ForecastResult};
use serde::{Deserialize, Serialize};

/// Percent change above which a day counts as rising (and below the negated
/// value as falling).
pub const TREND_THRESHOLD_PERCENT: f64 = 2.0;

/// Classification of one forecast day relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// First forecast day, nothing to compare against
    Baseline,
    Rising,
    Falling,
    Stable,
    /// Previous day predicted zero impressions, percent change has no value
    Undefined,
}

impl TrendDirection {
    /// Classifies a percent change against [`TREND_THRESHOLD_PERCENT`].
    pub fn classify(percent_change: f64) -> Self {
        if percent_change > TREND_THRESHOLD_PERCENT {
            TrendDirection::Rising
        } else if percent_change < -TREND_THRESHOLD_PERCENT {
            TrendDirection::Falling
        } else {
            TrendDirection::Stable
        }
    }
}

/// Derived trend row of the forecast table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    /// Zero-based forecast day
    pub day: usize,
    pub date: NaiveDate,
    pub predicted_impressions: f64,
    /// `None` for the baseline day and for undefined changes
    pub percent_change: Option<f64>,
    pub direction: TrendDirection,
}

impl TrendEntry {
    /// Short badge text, e.g. `↗ +3.0%` or `➡ Stable`.
    pub fn label(&self) -> String {
        match (self.direction, self.percent_change) {
            (TrendDirection::Baseline, _) => "🎯 Baseline".to_string(),
            (TrendDirection::Rising, Some(change)) => format!("↗ +{:.1}%", change),
            (TrendDirection::Falling, Some(change)) => format!("↘ {:.1}%", change),
            (TrendDirection::Stable, _) => "➡ Stable".to_string(),
            _ => "n/a".to_string(),
        }
    }
}

/// Computes one [`TrendEntry`] per forecast day, index-aligned with the input.
pub fn compute(forecast_detail: &[ForecastDay]) -> Vec<TrendEntry> {
    forecast_detail
        .iter()
        .enumerate()
        .map(|(index, day)| {
            let (percent_change, direction) = if index == 0 {
                (None, TrendDirection::Baseline)
            } else {
                let previous = forecast_detail[index - 1].predicted_impressions;
                match percent_change(previous, day.predicted_impressions) {
                    Some(change) => (Some(change), TrendDirection::classify(change)),
                    None => (None, TrendDirection::Undefined),
                }
            };

            TrendEntry {
                day: index,
                date: day.date,
                predicted_impressions: day.predicted_impressions,
                percent_change,
                direction,
            }
        })
        .collect()
}

/// `(current - previous) / previous * 100`, or `None` when `previous` is zero.
pub fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

/// Highest daily value of the historical series.
pub fn peak(past_days: &[u64]) -> Option<u64> {
    past_days.iter().copied().max()
}

/// Lowest daily value of the historical series.
pub fn trough(past_days: &[u64]) -> Option<u64> {
    past_days.iter().copied().min()
}

/// Average predicted impressions per forecast day, rounded to the nearest integer.
pub fn daily_average(total_predicted: f64) -> f64 {
    (total_predicted / FORECAST_DAYS as f64).round()
}

/// Values of the dashboard summary cards for one forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub billboard_id: String,
    pub historical_average_daily: f64,
    pub total_predicted: f64,
    /// Average confidence as a whole percent
    pub average_confidence_percent: u32,
    pub predicted_daily_average: f64,
    pub peak: Option<u64>,
    pub trough: Option<u64>,
    /// First three historical values
    pub past_head: Vec<u64>,
    /// Last three historical values
    pub past_tail: Vec<u64>,
}

/// Builds the summary cards of a forecast.
pub fn summarize(forecast: &ForecastResult) -> ForecastSummary {
    let past = &forecast.past_days;
    let tail_start = past.len().saturating_sub(3);

    ForecastSummary {
        billboard_id: forecast.billboard_id.clone(),
        historical_average_daily: forecast.historical_summary.average_daily,
        total_predicted: forecast.prediction_summary.total_predicted,
        average_confidence_percent: (forecast.prediction_summary.average_confidence * 100.0)
            .round() as u32,
        predicted_daily_average: daily_average(forecast.prediction_summary.total_predicted),
        peak: peak(past),
        trough: trough(past),
        past_head: past.iter().take(3).copied().collect(),
        past_tail: past[tail_start..].to_vec(),
    }
}
