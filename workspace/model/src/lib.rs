pub mod entities;
pub mod error;

pub use entities::billboard::{BillboardRecord, collection_from_dtos};
pub use entities::forecast::{
    FORECAST_DAYS, ForecastDay, ForecastResult, HistoricalSummary, PAST_DAYS, PredictionSummary,
};
pub use error::ValidationError;
