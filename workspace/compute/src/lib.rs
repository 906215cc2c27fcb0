pub mod error;
pub mod impressions;
pub mod search;
pub mod trend;

use chrono::{NaiveDate, Utc};
use impressions::ImpressionModel;

/// Returns the impression model used by the reference backend.
///
/// This function uses the provided date as "today" or the current date if none is provided.
/// History ends the day before `today`, the forecast starts the day after it.
pub fn default_impression_model(today: Option<NaiveDate>) -> ImpressionModel {
    let today = today.unwrap_or_else(|| Utc::now().date_naive());
    ImpressionModel::new(today)
}
