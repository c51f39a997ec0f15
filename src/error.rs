use thiserror::Error;

/// Custom error types for the felt-report application
#[derive(Error, Debug)]
pub enum AppError {
    /// Error when the API responds with an unsuccessful status code
    #[error("API request failed: {0}")]
    ApiRequestFailed(String),

    /// Wrapper for reqwest errors (transport failures, timeouts, bad URLs)
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
