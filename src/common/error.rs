//! error taxonomy of the fixture tool
//! - nothing is retried: every variant propagates and aborts the current command

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    /// device answered with a non-success http status
    #[error("device error: status {status}, url: {url}")]
    Device { status: String, url: String },

    /// device unreachable, or the request / response body could not be handled
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// the limit status response does not carry a usable pin field
    #[error("limit signal error: {0}")]
    Signal(String),

    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// bad configuration or bad command arguments
    #[error("config error: {0}")]
    Config(String),
}
