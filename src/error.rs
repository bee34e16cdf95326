use thiserror::Error;

/// Errors raised while decoding settings or market-data payloads.
///
/// Indicator computation itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A `[timestamp, value]` entry of a market-chart payload is malformed.
    #[error("malformed {field} entry at index {index}: {reason}")]
    MalformedPoint {
        field: &'static str,
        index: usize,
        reason: &'static str,
    },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, Error>;
