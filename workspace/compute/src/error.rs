use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// Forecast requested from an empty history
    #[error("Forecast computation error: {0}")]
    ForecastComputation(String),

    /// Date arithmetic left the supported calendar range
    #[error("Date error: {0}")]
    Date(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
