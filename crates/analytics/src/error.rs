use core_types::CoreError;
use thiserror::Error;

/// The only two ways a request can fail. Synthesis itself is infallible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("invalid {field} parameter: '{value}'")]
    Validation { field: &'static str, value: String },

    #[error("sector not found: {0}")]
    NotFound(String),
}

impl From<CoreError> for AnalyticsError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput { field, value } => AnalyticsError::Validation { field, value },
        }
    }
}
