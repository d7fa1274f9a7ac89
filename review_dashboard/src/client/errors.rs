use thiserror::Error;

use crate::config::ConfigError;
use crate::models::panel::PanelKind;

/// Underlying cause of a failed panel fetch.
#[derive(Debug, Error)]
pub enum FetchErrorKind {
    /// The request could not be sent or the transport failed mid-flight.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service error: {0}")]
    Api(String),

    /// The body did not decode into the expected record shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A panel fetch that produced no usable records.
///
/// Transport failures, non-success statuses, and malformed bodies all
/// collapse into this one outcome. The pipeline for the named panel aborts;
/// the other panels are unaffected.
#[derive(Debug, Error)]
#[error("fetch failed for `{endpoint}`: {kind}")]
pub struct FetchError {
    /// Panel whose resource was being fetched.
    pub endpoint: PanelKind,
    /// Underlying cause.
    pub kind: FetchErrorKind,
}

impl FetchError {
    pub fn new(endpoint: PanelKind, kind: impl Into<FetchErrorKind>) -> Self {
        Self {
            endpoint,
            kind: kind.into(),
        }
    }
}

/// Errors constructing an HTTP metrics client.
#[derive(Debug, Error)]
pub enum ClientInitError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// The client configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
