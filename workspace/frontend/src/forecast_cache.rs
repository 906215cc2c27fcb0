use model::ForecastResult;

use crate::api_client::BillboardApi;
use crate::error::FetchError;
use crate::request::{RequestId, RequestSequence};
use crate::status::FetchStatus;

/// Tag of an issued forecast fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    pub id: RequestId,
    pub billboard_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    Stored,
    Failed,
    Stale,
}

/// Single-slot forecast cache.
///
/// Holds at most the latest successfully fetched forecast. A failed fetch
/// empties the slot, so a forecast never outlives the request that replaced
/// it.
#[derive(Debug, Clone, Default)]
pub struct ForecastCache {
    entry: Option<ForecastResult>,
    status: FetchStatus,
    sequence: RequestSequence,
}

impl ForecastCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached forecast for `billboard_id`, if it is the one held.
    pub fn get(&self, billboard_id: &str) -> Option<&ForecastResult> {
        self.entry
            .as_ref()
            .filter(|forecast| forecast.billboard_id == billboard_id)
    }

    pub fn latest(&self) -> Option<&ForecastResult> {
        self.entry.as_ref()
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.status.error()
    }

    pub fn begin_fetch(&mut self, billboard_id: &str) -> ForecastRequest {
        let request = ForecastRequest {
            id: self.sequence.issue(),
            billboard_id: billboard_id.to_string(),
        };
        self.status = FetchStatus::Loading;
        log::debug!(
            "Forecast fetch {} issued for {}",
            request.id.value(),
            request.billboard_id
        );
        request
    }

    pub fn complete(
        &mut self,
        request: &ForecastRequest,
        result: Result<ForecastResult, FetchError>,
    ) -> CacheOutcome {
        if !self.sequence.is_latest(request.id) {
            log::debug!("Discarding stale forecast for {}", request.billboard_id);
            return CacheOutcome::Stale;
        }

        match result {
            Ok(forecast) => {
                log::info!("Forecast loaded for {}", forecast.billboard_id);
                self.entry = Some(forecast);
                self.status = FetchStatus::Idle;
                CacheOutcome::Stored
            }
            Err(err) => {
                log::error!("Error fetching forecast for {}: {}", request.billboard_id, err);
                self.entry = None;
                self.status = FetchStatus::Failed(err);
                CacheOutcome::Failed
            }
        }
    }

    /// Issues, awaits and completes one fetch.
    pub async fn fetch(
        &mut self,
        api: &dyn BillboardApi,
        billboard_id: &str,
    ) -> Result<ForecastResult, FetchError> {
        let request = self.begin_fetch(billboard_id);
        let result = api.fetch_prediction(billboard_id).await;
        self.complete(&request, result.clone());
        result
    }

    /// Drops the cached forecast and invalidates any fetch in flight.
    pub fn clear(&mut self) {
        self.sequence.issue();
        self.entry = None;
        self.status = FetchStatus::Idle;
    }
}
