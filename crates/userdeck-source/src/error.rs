use thiserror::Error;

/// The single failure kind of a user fetch.
///
/// Variants only carry the cause for display; callers handle them alike.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
