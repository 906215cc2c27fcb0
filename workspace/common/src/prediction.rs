use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::BillboardDto;

/// Success envelope of `GET /api/predict/{billboard_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionResponse {
    pub success: bool,
    /// Billboard code the prediction was computed for
    pub billboard_id: String,
    /// Full record of the billboard, echoed by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billboard: Option<BillboardDto>,
    /// Historical daily impressions, oldest first
    pub past_60_days: Vec<u64>,
    /// Predicted daily impressions for the next seven days
    pub predicted_7_days: Vec<f64>,
    pub detailed_data: DetailedData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DetailedData {
    pub historical_data: HistoricalData,
    pub prediction: PredictionData,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HistoricalData {
    /// Per-day breakdown of the historical series
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<DailyImpressions>,
    pub summary: HistoricalSummaryDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DailyImpressions {
    pub date: NaiveDate,
    pub impressions: u64,
    pub day_of_week: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HistoricalSummaryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_impressions: Option<u64>,
    pub average_daily: f64,
    pub days_recorded: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionData {
    pub forecast: Vec<ForecastDayDto>,
    pub total_predicted: f64,
    pub average_confidence: f64,
}

/// One forecast day.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastDayDto {
    /// Label such as "Day 1"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    pub date: NaiveDate,
    pub day_of_week: String,
    pub predicted_impressions: f64,
    /// Confidence in [0, 1]
    pub confidence: f64,
}
