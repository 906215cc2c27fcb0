//! Client-side data layer of the billboard dashboard.
//!
//! Owns the billboard collection, the search view, the selection and its
//! forecast, and talks to the backend through [`BillboardApi`].

pub mod api_client;
pub mod asset_store;
pub mod dashboard;
pub mod error;
pub mod forecast_cache;
pub mod request;
pub mod selection;
pub mod settings;
pub mod status;

#[cfg(test)]
mod testing;

pub use api_client::{BillboardApi, HttpApiClient};
pub use asset_store::{AssetStore, RefreshOutcome};
pub use dashboard::{Dashboard, Effect, ForecastInsights, Msg};
pub use error::{FetchError, FetchErrorKind};
pub use forecast_cache::ForecastCache;
pub use selection::{SelectionController, SelectionOutcome, SelectionState, SelectionTicket};
pub use settings::ClientSettings;
pub use status::FetchStatus;
