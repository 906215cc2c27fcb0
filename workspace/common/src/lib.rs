//! Common transport-layer types shared between the reference backend and the
//! dashboard client. These structs mirror the JSON payloads of
//! `/api/billboards` and `/api/predict/{billboard_id}` so both sides agree on
//! field names without duplicating shapes.

mod billboard;
mod prediction;

pub use billboard::{BillboardDto, BillboardListResponse, TrafficLevel};
pub use prediction::{
    DailyImpressions, DetailedData, ForecastDayDto, HistoricalData, HistoricalSummaryDto,
    PredictionData, PredictionResponse,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Path of the billboard listing endpoint.
pub const BILLBOARDS_ENDPOINT: &str = "/api/billboards";

/// Path prefix of the per-asset prediction endpoint.
pub const PREDICT_ENDPOINT: &str = "/api/predict";

/// Failure envelope returned by the backend (`success` is always false).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Success flag
    pub success: bool,
    /// Human-readable failure cause
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
