use async_trait::async_trait;
use common::{BILLBOARDS_ENDPOINT, BillboardDto, ErrorResponse, PREDICT_ENDPOINT, PredictionResponse};
use model::{BillboardRecord, ForecastResult, collection_from_dtos};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::FetchError;
use crate::settings::ClientSettings;

/// Message used when a failed billboard listing carries none.
pub const DEFAULT_BILLBOARDS_MESSAGE: &str = "Invalid data format received from server";

/// Message used when a failed prediction carries none.
pub const DEFAULT_PREDICTION_MESSAGE: &str = "Failed to get prediction data";

/// Read access to the billboard backend.
///
/// The dashboard components only talk to the backend through this trait, so
/// tests can drive them with an in-memory implementation.
#[async_trait]
pub trait BillboardApi: Send + Sync {
    /// `GET /api/billboards`, validated into domain records.
    async fn list_billboards(&self) -> Result<Vec<BillboardRecord>, FetchError>;

    /// `GET /api/predict/{billboard_id}`, validated into a forecast.
    async fn fetch_prediction(&self, billboard_id: &str) -> Result<ForecastResult, FetchError>;
}

/// HTTP implementation of [`BillboardApi`].
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    settings: ClientSettings,
}

impl HttpApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        log::debug!("API client created for {}", settings.api_base_url());
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, FetchError> {
        let raw = self.settings.api_url(endpoint);
        Url::parse(&raw).map_err(|e| FetchError::Transport(format!("Invalid URL {}: {}", raw, e)))
    }

    /// Common GET request handler
    async fn get_json(&self, url: Url) -> Result<Value, FetchError> {
        log::debug!("GET request to: {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            let error = FetchError::Transport(e.to_string());
            log::error!("GET {} - {}", url, error);
            error
        })?;

        let status = response.status();
        if !status.is_success() {
            // The backend explains most failures in an error envelope
            let reason = match response.json::<ErrorResponse>().await {
                Ok(body) => body.message,
                Err(_) => status.canonical_reason().unwrap_or("Unknown").to_string(),
            };
            let error = FetchError::Http {
                status: status.as_u16(),
                reason,
            };
            log::error!("GET {} - {}", url, error);
            return Err(error);
        }

        log::trace!("GET {} - Response received, parsing JSON", url);
        let body = response.json::<Value>().await.map_err(|e| {
            let error = FetchError::MalformedResponse(format!("Failed to parse response: {}", e));
            log::error!("GET {} - {}", url, error);
            error
        })?;

        log::info!("GET {} - Success", url);
        Ok(body)
    }
}

#[async_trait]
impl BillboardApi for HttpApiClient {
    async fn list_billboards(&self) -> Result<Vec<BillboardRecord>, FetchError> {
        let url = self.endpoint_url(BILLBOARDS_ENDPOINT)?;
        let body = self.get_json(url).await?;
        parse_billboards(body)
    }

    async fn fetch_prediction(&self, billboard_id: &str) -> Result<ForecastResult, FetchError> {
        let mut url = self.endpoint_url(PREDICT_ENDPOINT)?;
        let base = url.to_string();
        url.path_segments_mut()
            .map_err(|_| FetchError::Transport(format!("Base URL cannot hold a path: {}", base)))?
            .push(billboard_id);

        let body = self.get_json(url).await?;
        parse_prediction(billboard_id, body)
    }
}

/// Checks the `success` flag of an envelope, turning `success: false` into
/// [`FetchError::Application`].
fn check_success(body: &Value, default_message: &str) -> Result<(), FetchError> {
    match body.get("success").and_then(Value::as_bool) {
        Some(true) => Ok(()),
        Some(false) => {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(default_message);
            Err(FetchError::Application(message.to_string()))
        }
        None => Err(FetchError::MalformedResponse(
            "response has no boolean `success` flag".to_string(),
        )),
    }
}

/// Parses the body of `GET /api/billboards`.
pub fn parse_billboards(body: Value) -> Result<Vec<BillboardRecord>, FetchError> {
    check_success(&body, DEFAULT_BILLBOARDS_MESSAGE)?;

    let data = match body.get("data") {
        Some(data @ Value::Array(_)) => data.clone(),
        _ => {
            return Err(FetchError::MalformedResponse(
                "`data` is not an array".to_string(),
            ));
        }
    };

    let dtos: Vec<BillboardDto> = serde_json::from_value(data)
        .map_err(|e| FetchError::MalformedResponse(format!("billboard record: {}", e)))?;

    let records = collection_from_dtos(dtos)?;
    log::trace!("Parsed {} billboard records", records.len());
    Ok(records)
}

/// Parses the body of `GET /api/predict/{billboard_id}` for the requested code.
pub fn parse_prediction(requested: &str, body: Value) -> Result<ForecastResult, FetchError> {
    check_success(&body, DEFAULT_PREDICTION_MESSAGE)?;

    let response: PredictionResponse = serde_json::from_value(body)
        .map_err(|e| FetchError::MalformedResponse(format!("prediction: {}", e)))?;

    let forecast = ForecastResult::from_response_for(requested, response)?;
    log::trace!("Parsed forecast for {}", forecast.billboard_id);
    Ok(forecast)
}
