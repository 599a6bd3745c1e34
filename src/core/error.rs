//! Failures of the extraction and recommendation core

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The upstream payload does not have the `rates -> date -> currency -> value` shape.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("No observations available to evaluate")]
    EmptyHistory,

    #[error("Observations mix currencies: expected {expected}, found {found}")]
    MixedCurrencies { expected: String, found: String },

    #[error("Invalid currency code: '{0}'")]
    InvalidCurrency(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
