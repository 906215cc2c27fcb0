use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a payload coming from the backend cannot become a domain value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty
    #[error("Field `{0}` must not be empty")]
    EmptyField(&'static str),

    /// Latitude or longitude is not a finite WGS84 coordinate
    #[error("Billboard {billboard_id} has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        billboard_id: String,
        latitude: f64,
        longitude: f64,
    },

    /// Monthly rate below zero
    #[error("Billboard {billboard_id} has a negative monthly rate")]
    NegativeRate { billboard_id: String },

    /// Two records share the same server id
    #[error("Duplicate billboard id {0} in collection")]
    DuplicateId(i64),

    /// A series does not have the length fixed by the contract
    #[error("Field `{field}` has {actual} entries, expected {expected}")]
    SeriesLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A numeric value outside its allowed range
    #[error("Field `{field}` has out-of-range value {value}")]
    OutOfRange { field: String, value: f64 },

    /// Forecast days are not consecutive calendar days
    #[error("Forecast day {index} is dated {date}, expected the day after {previous}")]
    NonConsecutiveDates {
        index: usize,
        previous: NaiveDate,
        date: NaiveDate,
    },

    /// The response belongs to a different billboard than requested
    #[error("Prediction is for billboard {actual}, requested {expected}")]
    BillboardMismatch { expected: String, actual: String },
}

/// Type alias for Result with ValidationError
pub type Result<T> = std::result::Result<T, ValidationError>;
