//! Error types for the pyeveryday-core library

use thiserror::Error;

/// Main error type for landing page operations
#[derive(Error, Debug)]
pub enum LandingError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Service worker registration failed: {0}")]
    ServiceWorker(String),

    #[error("Browser bridge error: {0}")]
    Bridge(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for landing page operations
pub type Result<T> = std::result::Result<T, LandingError>;

impl PartialEq for LandingError {
    fn eq(&self, other: &Self) -> bool {
        match self {
            LandingError::Configuration(msg) => {
                matches!(other, LandingError::Configuration(o) if msg == o)
            }
            LandingError::ServiceWorker(msg) => {
                matches!(other, LandingError::ServiceWorker(o) if msg == o)
            }
            LandingError::Bridge(msg) => {
                matches!(other, LandingError::Bridge(o) if msg == o)
            }
            LandingError::Json(err) => {
                matches!(other, LandingError::Json(e) if err.to_string() == e.to_string())
            }
        }
    }
}
