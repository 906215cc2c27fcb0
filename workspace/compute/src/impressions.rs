//! Deterministic impression model used by the reference backend.
//!
//! Produces a per-billboard daily impression history and a short forecast on
//! top of it. The shape of the output matches the prediction endpoint
//! contract; the numbers are stable for a given billboard and day, which
//! keeps the backend reproducible in tests.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use common::{DailyImpressions, ForecastDayDto, HistoricalSummaryDto, PredictionData};
use tracing::instrument;

use crate::error::{ComputeError, Result};

/// Factor applied to Saturday and Sunday volumes.
const WEEKEND_FACTOR: f64 = 0.8;

/// Confidence of the first forecast day; every later day loses
/// [`CONFIDENCE_DECAY`] down to [`CONFIDENCE_FLOOR`].
const CONFIDENCE_START: f64 = 0.95;
const CONFIDENCE_DECAY: f64 = 0.03;
const CONFIDENCE_FLOOR: f64 = 0.75;

/// Volume profile of a billboard, selected by `id % 3`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Profile {
    base_low: u64,
    base_high: u64,
    variation_low: f64,
    variation_high: f64,
}

impl Profile {
    fn for_billboard(billboard_id: i64) -> Self {
        match billboard_id.rem_euclid(3) {
            0 => Profile {
                base_low: 1500,
                base_high: 2000,
                variation_low: 0.8,
                variation_high: 1.3,
            },
            1 => Profile {
                base_low: 1200,
                base_high: 1600,
                variation_low: 0.7,
                variation_high: 1.2,
            },
            _ => Profile {
                base_low: 1000,
                base_high: 1400,
                variation_low: 0.6,
                variation_high: 1.1,
            },
        }
    }

    fn base(&self, billboard_id: i64) -> f64 {
        let span = self.base_high - self.base_low + 1;
        (self.base_low + (billboard_id.unsigned_abs() * 37) % span) as f64
    }

    fn variation(&self, billboard_id: i64, day: usize) -> f64 {
        let low = self.variation_low;
        low + (self.variation_high - low) * wave(billboard_id, day)
    }
}

/// Smooth pseudo-variation in [0, 1], fixed per billboard and day.
fn wave(billboard_id: i64, day: usize) -> f64 {
    0.5 + 0.5 * (billboard_id as f64 * 0.7 + day as f64 * 1.3).sin()
}

fn weekday_factor(date: NaiveDate) -> f64 {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => WEEKEND_FACTOR,
        _ => 1.0,
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Impression generator anchored on a fixed "today".
#[derive(Debug, Clone)]
pub struct ImpressionModel {
    today: NaiveDate,
}

impl ImpressionModel {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Daily impressions for the `days` days before today, oldest first.
    #[instrument(skip(self))]
    pub fn history(&self, billboard_id: i64, days: usize) -> Result<Vec<DailyImpressions>> {
        let start = self
            .today
            .checked_sub_days(Days::new(days as u64))
            .ok_or_else(|| ComputeError::Date(format!("{} days before {}", days, self.today)))?;

        let profile = Profile::for_billboard(billboard_id);
        let base = profile.base(billboard_id);

        let history = (0..days)
            .map(|i| {
                let date = start + Days::new(i as u64);
                let impressions =
                    base * weekday_factor(date) * profile.variation(billboard_id, i);
                DailyImpressions {
                    date,
                    impressions: impressions as u64,
                    day_of_week: date.format("%A").to_string(),
                }
            })
            .collect();

        Ok(history)
    }

    /// Forecast of `days` days starting tomorrow.
    ///
    /// The base level is the last-week average scaled by the week-over-week
    /// trend; histories shorter than a week use their plain average.
    #[instrument(skip(self, history), fields(history_len = history.len()))]
    pub fn forecast(
        &self,
        history: &[DailyImpressions],
        days: usize,
    ) -> Result<Vec<ForecastDayDto>> {
        if history.is_empty() {
            return Err(ComputeError::ForecastComputation(
                "cannot forecast from an empty history".to_string(),
            ));
        }

        let base_prediction = if history.len() < 7 {
            average(history)
        } else {
            let recent = average(&history[history.len() - 7..]);
            let trend_factor = if history.len() >= 14 {
                let previous = average(&history[history.len() - 14..history.len() - 7]);
                if previous > 0.0 { recent / previous } else { 1.0 }
            } else {
                1.0
            };
            recent * trend_factor
        };
        tracing::debug!(base_prediction, "Computed forecast base level");

        let first_day = self
            .today
            .succ_opt()
            .ok_or_else(|| ComputeError::Date(format!("no day after {}", self.today)))?;

        let forecast = (0..days)
            .map(|i| {
                let date = first_day + Days::new(i as u64);
                let confidence =
                    (CONFIDENCE_START - i as f64 * CONFIDENCE_DECAY).max(CONFIDENCE_FLOOR);
                ForecastDayDto {
                    day: Some(format!("Day {}", i + 1)),
                    date,
                    day_of_week: date.format("%A").to_string(),
                    predicted_impressions: (base_prediction * weekday_factor(date)).floor(),
                    confidence: round_to_cents(confidence),
                }
            })
            .collect();

        Ok(forecast)
    }
}

fn average(days: &[DailyImpressions]) -> f64 {
    let total: u64 = days.iter().map(|d| d.impressions).sum();
    total as f64 / days.len() as f64
}

/// Summary block of the historical series.
pub fn historical_summary(history: &[DailyImpressions]) -> HistoricalSummaryDto {
    let total: u64 = history.iter().map(|d| d.impressions).sum();
    let average_daily = if history.is_empty() {
        0
    } else {
        total / history.len() as u64
    };

    HistoricalSummaryDto {
        total_impressions: Some(total),
        average_daily: average_daily as f64,
        days_recorded: history.len() as u64,
    }
}

/// Prediction block with its totals.
pub fn prediction_data(forecast: Vec<ForecastDayDto>) -> PredictionData {
    let total_predicted: f64 = forecast.iter().map(|d| d.predicted_impressions).sum();
    let average_confidence = if forecast.is_empty() {
        0.0
    } else {
        forecast.iter().map(|d| d.confidence).sum::<f64>() / forecast.len() as f64
    };

    PredictionData {
        forecast,
        total_predicted,
        average_confidence: round_to_cents(average_confidence),
    }
}
