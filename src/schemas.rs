use std::sync::Arc;

use chrono::NaiveDate;
use common::{
    BillboardDto, BillboardListResponse, DailyImpressions, DetailedData, ErrorResponse,
    ForecastDayDto, HistoricalData, HistoricalSummaryDto, PredictionData, PredictionResponse,
    TrafficLevel,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Billboard catalogue, validated at startup
    pub billboards: Arc<Vec<BillboardDto>>,
    /// Fixed "today" for the impression model; `None` follows the clock
    pub today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(billboards: Vec<BillboardDto>) -> Self {
        Self {
            billboards: Arc::new(billboards),
            today: None,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of billboards in the catalogue
    pub billboards: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::billboards::get_billboards,
        crate::handlers::predictions::get_prediction,
    ),
    components(
        schemas(
            BillboardDto,
            BillboardListResponse,
            TrafficLevel,
            PredictionResponse,
            DetailedData,
            HistoricalData,
            DailyImpressions,
            HistoricalSummaryDto,
            PredictionData,
            ForecastDayDto,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "billboards", description = "Billboard catalogue endpoints"),
        (name = "predictions", description = "Impression forecast endpoints"),
    ),
    info(
        title = "Billboard Dashboard API",
        description = "Billboard catalogue and 7-day impression forecasts",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
