use thiserror::Error;

use crate::client::errors::{ClientInitError, FetchError};
use crate::config::ConfigError;
use crate::dashboard::RenderError;

/// The unified error type for the `review_dashboard` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A panel fetch failed (transport, status, or decode).
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The HTTP client could not be constructed.
    #[error(transparent)]
    ClientInit(#[from] ClientInitError),

    /// The rendering surface rejected a panel.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// An error related to configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
