use thiserror::Error;

/// Errors raised while turning form input into a volume.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("wrong shape selected: '{0}'")]
    InvalidShape(String),

    #[error("unknown unit system: '{0}'")]
    InvalidUnitSystem(String),

    #[error("{field} is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("volume is out of range for radius {radius} and height {height:?}")]
    VolumeOutOfRange { radius: f64, height: Option<f64> },

    #[error("{0} is required for this shape")]
    MissingField(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalcError {
    /// True for the error the page reports with a blocking notification.
    pub fn is_invalid_shape(&self) -> bool {
        matches!(self, CalcError::InvalidShape(_))
    }
}
