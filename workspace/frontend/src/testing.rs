//! In-memory backend and fixtures shared by the unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use common::{
    DetailedData, ForecastDayDto, HistoricalData, HistoricalSummaryDto, PredictionData,
    PredictionResponse, TrafficLevel,
};
use model::{BillboardRecord, ForecastResult, PAST_DAYS};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::api_client::{BillboardApi, parse_prediction};
use crate::error::FetchError;

pub fn record(id: i64, code: &str, region: &str) -> BillboardRecord {
    BillboardRecord {
        id,
        billboard_id: code.to_string(),
        region: region.to_string(),
        latitude: 6.9,
        longitude: 79.85,
        traffic_level: TrafficLevel::High,
        size: "8x16".to_string(),
        kind: "Static".to_string(),
        monthly_rate: Decimal::new(180_000, 0),
    }
}

pub fn fleet() -> Vec<BillboardRecord> {
    vec![
        record(1, "B001", "Colombo 1 (Fort)"),
        record(2, "B002", "Colombo 2 (Slave Island)"),
        record(3, "B003", "Colombo 3 (Kollupitiya)"),
        record(12, "B012", "Nugegoda"),
    ]
}

/// Prediction envelope with `forecast_days` forecast entries.
pub fn prediction_json(billboard_id: &str, forecast_days: usize) -> Value {
    let start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let forecast: Vec<ForecastDayDto> = (0..forecast_days)
        .map(|i| {
            let date = start + Days::new(i as u64);
            ForecastDayDto {
                day: Some(format!("Day {}", i + 1)),
                date,
                day_of_week: date.format("%A").to_string(),
                predicted_impressions: 1000.0 + 10.0 * i as f64,
                confidence: 0.95 - 0.03 * i as f64,
            }
        })
        .collect();
    let total_predicted = forecast.iter().map(|d| d.predicted_impressions).sum();

    let response = PredictionResponse {
        success: true,
        billboard_id: billboard_id.to_string(),
        billboard: None,
        past_60_days: (0..PAST_DAYS as u64).map(|i| 1200 + i).collect(),
        predicted_7_days: forecast.iter().map(|d| d.predicted_impressions).collect(),
        detailed_data: DetailedData {
            historical_data: HistoricalData {
                data: vec![],
                summary: HistoricalSummaryDto {
                    total_impressions: None,
                    average_daily: 1229.0,
                    days_recorded: PAST_DAYS as u64,
                },
            },
            prediction: PredictionData {
                forecast,
                total_predicted,
                average_confidence: 0.86,
            },
        },
        message: None,
    };

    serde_json::to_value(response).unwrap()
}

pub fn forecast(billboard_id: &str) -> ForecastResult {
    parse_prediction(billboard_id, prediction_json(billboard_id, 7)).unwrap()
}

/// Backend answering from queued results, in order.
#[derive(Default)]
pub struct FakeApi {
    billboards: Mutex<VecDeque<Result<Vec<BillboardRecord>, FetchError>>>,
    predictions: Mutex<HashMap<String, VecDeque<Result<ForecastResult, FetchError>>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn push_billboards(&self, result: Result<Vec<BillboardRecord>, FetchError>) {
        self.billboards.lock().unwrap().push_back(result);
    }

    pub fn push_prediction(&self, billboard_id: &str, result: Result<ForecastResult, FetchError>) {
        self.predictions
            .lock()
            .unwrap()
            .entry(billboard_id.to_string())
            .or_default()
            .push_back(result);
    }

    /// Requested paths, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BillboardApi for FakeApi {
    async fn list_billboards(&self) -> Result<Vec<BillboardRecord>, FetchError> {
        self.calls.lock().unwrap().push("/api/billboards".to_string());
        self.billboards
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("connection refused".to_string())))
    }

    async fn fetch_prediction(&self, billboard_id: &str) -> Result<ForecastResult, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("/api/predict/{}", billboard_id));
        self.predictions
            .lock()
            .unwrap()
            .get_mut(billboard_id)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(FetchError::Http {
                    status: 404,
                    reason: "Billboard not found".to_string(),
                })
            })
    }
}
