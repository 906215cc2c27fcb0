use chrono::NaiveDate;
use common::{ForecastDayDto, PredictionResponse};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Number of historical days every prediction carries.
pub const PAST_DAYS: usize = 60;

/// Number of forecast days every prediction carries.
pub const FORECAST_DAYS: usize = 7;

/// One day of the impression forecast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub predicted_impressions: f64,
    /// Model confidence in [0, 1].
    pub confidence: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSummary {
    pub average_daily: f64,
    pub days_recorded: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    pub total_predicted: f64,
    pub average_confidence: f64,
}

/// Validated prediction for one billboard.
///
/// Built from a [`PredictionResponse`]; construction fails instead of
/// producing a partially formed forecast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub billboard_id: String,
    /// Historical daily impressions, oldest first. Always [`PAST_DAYS`] long.
    pub past_days: Vec<u64>,
    /// Always [`FORECAST_DAYS`] long.
    pub predicted_days: Vec<f64>,
    /// Index-aligned with `predicted_days`, consecutive dates.
    pub forecast_detail: Vec<ForecastDay>,
    pub historical_summary: HistoricalSummary,
    pub prediction_summary: PredictionSummary,
}

impl ForecastResult {
    /// Checks every structural invariant of a forecast.
    pub fn validate(&self) -> Result<()> {
        if self.billboard_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("billboard_id"));
        }

        check_length("past_60_days", self.past_days.len(), PAST_DAYS)?;
        check_length("predicted_7_days", self.predicted_days.len(), FORECAST_DAYS)?;
        check_length("forecast", self.forecast_detail.len(), self.predicted_days.len())?;

        for value in &self.predicted_days {
            check_non_negative("predicted_7_days", *value)?;
        }

        for (index, day) in self.forecast_detail.iter().enumerate() {
            check_non_negative(
                &format!("forecast[{}].predicted_impressions", index),
                day.predicted_impressions,
            )?;
            check_unit_interval(&format!("forecast[{}].confidence", index), day.confidence)?;

            if index > 0 {
                let previous = self.forecast_detail[index - 1].date;
                if previous.succ_opt() != Some(day.date) {
                    return Err(ValidationError::NonConsecutiveDates {
                        index,
                        previous,
                        date: day.date,
                    });
                }
            }
        }

        check_non_negative("average_daily", self.historical_summary.average_daily)?;
        check_non_negative("total_predicted", self.prediction_summary.total_predicted)?;
        check_unit_interval("average_confidence", self.prediction_summary.average_confidence)?;

        Ok(())
    }

    /// Like [`TryFrom`], additionally requiring the response to echo the
    /// billboard code it was requested for.
    pub fn from_response_for(expected_billboard_id: &str, response: PredictionResponse) -> Result<Self> {
        if response.billboard_id != expected_billboard_id {
            return Err(ValidationError::BillboardMismatch {
                expected: expected_billboard_id.to_string(),
                actual: response.billboard_id,
            });
        }
        Self::try_from(response)
    }
}

impl From<ForecastDayDto> for ForecastDay {
    fn from(dto: ForecastDayDto) -> Self {
        ForecastDay {
            date: dto.date,
            day_of_week: dto.day_of_week,
            predicted_impressions: dto.predicted_impressions,
            confidence: dto.confidence,
        }
    }
}

impl TryFrom<PredictionResponse> for ForecastResult {
    type Error = ValidationError;

    fn try_from(response: PredictionResponse) -> Result<Self> {
        let detailed = response.detailed_data;
        let result = ForecastResult {
            billboard_id: response.billboard_id,
            past_days: response.past_60_days,
            predicted_days: response.predicted_7_days,
            forecast_detail: detailed
                .prediction
                .forecast
                .into_iter()
                .map(ForecastDay::from)
                .collect(),
            historical_summary: HistoricalSummary {
                average_daily: detailed.historical_data.summary.average_daily,
                days_recorded: detailed.historical_data.summary.days_recorded,
            },
            prediction_summary: PredictionSummary {
                total_predicted: detailed.prediction.total_predicted,
                average_confidence: detailed.prediction.average_confidence,
            },
        };
        result.validate()?;
        Ok(result)
    }
}

fn check_length(field: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(ValidationError::SeriesLength {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

fn check_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn check_unit_interval(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
