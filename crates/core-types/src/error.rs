use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid {field} parameter: '{value}'")]
    InvalidInput { field: &'static str, value: String },
}
