use thiserror::Error;

/// Everything that can go wrong while talking to the market-data API.
#[derive(Debug, Error)]
pub enum MarketError {
    /// Transport-level failure from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body was not the JSON we expected.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-2xx answer from the server.
    #[error("Unexpected response status: {status} at {url}")]
    Status { status: u16, url: String },

    /// Cookie or crumb acquisition failed.
    #[error("Auth error: {0}")]
    Auth(String),

    /// The response decoded but did not carry what it should have.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The looked-up symbol has no quote record or no market price.
    #[error("invalid ticker: {0}")]
    InvalidTicker(String),

    /// An absolute history period with start at or after end.
    #[error("invalid date range: start must be before end")]
    InvalidDates,
}
