use thiserror::Error;

/// Failures raised by a control variable. All of them are local to the
/// variable; callers either validate first or accept the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CvarError {
    #[error("{name}: value {value} is out of bounds [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{name}: min {min} cannot be greater than max {max}")]
    InvalidBounds { name: String, min: f64, max: f64 },

    #[error("{name}: min {min} must be less than max {max}")]
    EmptyWrapRange { name: String, min: f64, max: f64 },

    #[error("{name}: initial value {value} must be between {min} and {max}")]
    InitialOutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{name}: step must be a positive number, got {step}")]
    NonPositiveStep { name: String, step: f64 },

    #[error("{name}: factor must be greater than 1, got {factor}")]
    FactorTooSmall { name: String, factor: f64 },

    #[error("{name}: value {value} is not a finite number")]
    NonFinite { name: String, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("unknown place: {0}")]
    UnknownPlace(String),

    #[error(transparent)]
    Cvar(#[from] CvarError),
}
