use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Invalid contact record: {0}")]
    InvalidRecord(String),

    #[error("Endpoint rejected submission: {status} - {message}")]
    EndpointError { status: u16, message: String },
}
