use model::{BillboardRecord, ForecastResult};

use crate::api_client::BillboardApi;
use crate::error::FetchError;
use crate::forecast_cache::{ForecastCache, ForecastRequest};

/// Selection state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionState {
    #[default]
    Idle,
    /// Forecast requested, waiting for `ticket`
    Selecting {
        billboard: BillboardRecord,
        ticket: SelectionTicket,
    },
    Ready {
        billboard: BillboardRecord,
    },
    Failed {
        billboard: BillboardRecord,
        error: FetchError,
    },
}

/// Tag of the forecast fetch belonging to one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    pub generation: u64,
    pub billboard_id: String,
    request: ForecastRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Applied,
    Failed,
    /// Ticket does not belong to the current selection
    Discarded,
}

/// Tracks the selected billboard and its forecast.
///
/// A forecast is committed only when its ticket matches the current
/// selection, so a late response for an earlier marker can never be shown
/// next to a newer one.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
    generation: u64,
    cache: ForecastCache,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected(&self) -> Option<&BillboardRecord> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::Selecting { billboard, .. }
            | SelectionState::Ready { billboard }
            | SelectionState::Failed { billboard, .. } => Some(billboard),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SelectionState::Selecting { .. })
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.state {
            SelectionState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Operator text for a failed forecast fetch, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error()
            .map(|err| format!("Failed to load prediction: {}. Please try again.", err))
    }

    /// Forecast of the selected billboard, only once it is ready.
    pub fn forecast(&self) -> Option<&ForecastResult> {
        match &self.state {
            SelectionState::Ready { billboard } => self.cache.get(&billboard.billboard_id),
            _ => None,
        }
    }

    pub fn cache(&self) -> &ForecastCache {
        &self.cache
    }

    /// Selects `billboard`, dropping the previous forecast or error at once.
    pub fn select(&mut self, billboard: BillboardRecord) -> SelectionTicket {
        self.generation += 1;
        self.cache.clear();
        let request = self.cache.begin_fetch(&billboard.billboard_id);

        let ticket = SelectionTicket {
            generation: self.generation,
            billboard_id: billboard.billboard_id.clone(),
            request,
        };
        log::debug!(
            "Selected {} (generation {})",
            ticket.billboard_id,
            ticket.generation
        );

        self.state = SelectionState::Selecting {
            billboard,
            ticket: ticket.clone(),
        };
        ticket
    }

    pub fn complete(
        &mut self,
        ticket: &SelectionTicket,
        result: Result<ForecastResult, FetchError>,
    ) -> SelectionOutcome {
        let billboard = match &self.state {
            SelectionState::Selecting {
                billboard,
                ticket: current,
            } if current == ticket => billboard.clone(),
            _ => {
                log::debug!(
                    "Discarding forecast for {} (generation {})",
                    ticket.billboard_id,
                    ticket.generation
                );
                return SelectionOutcome::Discarded;
            }
        };

        self.cache.complete(&ticket.request, result);
        match self.cache.error() {
            Some(error) => {
                self.state = SelectionState::Failed {
                    billboard,
                    error: error.clone(),
                };
                SelectionOutcome::Failed
            }
            None => {
                self.state = SelectionState::Ready { billboard };
                SelectionOutcome::Applied
            }
        }
    }

    /// Re-requests the forecast of the current selection.
    pub fn retry(&mut self) -> Option<SelectionTicket> {
        let billboard = self.selected()?.clone();
        Some(self.select(billboard))
    }

    pub fn deselect(&mut self) {
        self.generation += 1;
        self.cache.clear();
        self.state = SelectionState::Idle;
    }

    /// Selects `billboard` and awaits its forecast.
    pub async fn select_and_load(
        &mut self,
        api: &dyn BillboardApi,
        billboard: BillboardRecord,
    ) -> SelectionOutcome {
        let ticket = self.select(billboard);
        let result = api.fetch_prediction(&ticket.billboard_id).await;
        self.complete(&ticket, result)
    }
}
