use thiserror::Error;

/// Why the bank register could not be loaded. Validation never surfaces these;
/// they only reach callers that use a [`crate::RegisterSource`] directly.
#[derive(Debug, Error)]
pub enum RegisterFetchError {
    #[error("Error making HTTP request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected HTTP status code {0}")]
    UnexpectedStatus(u16),

    #[error("The bank register is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
