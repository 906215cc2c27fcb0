//! Message-driven facade over the client components.
//!
//! [`Dashboard::update`] applies a [`Msg`] synchronously and may return an
//! [`Effect`] describing the request to run next. [`Dashboard::perform`] runs
//! that request and turns its result back into a message, which keeps the
//! state transitions testable without any network.

use compute::trend::{self, ForecastSummary, TrendEntry};
use model::{BillboardRecord, ForecastResult};

use crate::api_client::BillboardApi;
use crate::asset_store::AssetStore;
use crate::error::FetchError;
use crate::request::RequestId;
use crate::selection::{SelectionController, SelectionTicket};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Refresh,
    BillboardsLoaded(RequestId, Result<Vec<BillboardRecord>, FetchError>),
    QueryChanged(String),
    /// Select the billboard with this `id`
    Select(i64),
    ForecastLoaded(SelectionTicket, Result<ForecastResult, FetchError>),
    Deselect,
    RetryForecast,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchBillboards(RequestId),
    FetchForecast(SelectionTicket),
}

/// Values derived from the ready forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastInsights {
    pub trends: Vec<TrendEntry>,
    pub summary: ForecastSummary,
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    store: AssetStore,
    query: String,
    filtered: Vec<BillboardRecord>,
    selection: SelectionController,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Billboards matching the current query, in collection order.
    pub fn visible(&self) -> &[BillboardRecord] {
        &self.filtered
    }

    pub fn total_count(&self) -> usize {
        self.store.current().len()
    }

    pub fn visible_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading() || self.selection.is_loading()
    }

    pub fn insights(&self) -> Option<ForecastInsights> {
        let forecast = self.selection.forecast()?;
        Some(ForecastInsights {
            trends: trend::compute(&forecast.forecast_detail),
            summary: trend::summarize(forecast),
        })
    }

    fn refilter(&mut self) {
        self.filtered = compute::search::apply(self.store.current(), &self.query);
    }

    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Refresh => Some(Effect::FetchBillboards(self.store.begin_refresh())),
            Msg::BillboardsLoaded(id, result) => {
                self.store.complete_refresh(id, result);
                self.refilter();
                None
            }
            Msg::QueryChanged(query) => {
                self.query = query;
                self.refilter();
                None
            }
            Msg::Select(id) => match self.store.find(id) {
                Some(billboard) => {
                    let billboard = billboard.clone();
                    Some(Effect::FetchForecast(self.selection.select(billboard)))
                }
                None => {
                    log::warn!("Ignoring selection of unknown billboard {}", id);
                    None
                }
            },
            Msg::ForecastLoaded(ticket, result) => {
                self.selection.complete(&ticket, result);
                None
            }
            Msg::Deselect => {
                self.selection.deselect();
                None
            }
            Msg::RetryForecast => self.selection.retry().map(Effect::FetchForecast),
        }
    }

    /// Runs `effect` against `api` and returns the completion message.
    pub async fn perform(api: &dyn BillboardApi, effect: Effect) -> Msg {
        match effect {
            Effect::FetchBillboards(id) => Msg::BillboardsLoaded(id, api.list_billboards().await),
            Effect::FetchForecast(ticket) => {
                let result = api.fetch_prediction(&ticket.billboard_id).await;
                Msg::ForecastLoaded(ticket, result)
            }
        }
    }

    /// Applies `msg` and runs every resulting effect to completion.
    pub async fn dispatch(&mut self, api: &dyn BillboardApi, msg: Msg) {
        let mut next = self.update(msg);
        while let Some(effect) = next {
            let completion = Self::perform(api, effect).await;
            next = self.update(completion);
        }
    }
}
