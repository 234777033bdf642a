use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur while extracting users
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Source returned HTTP {status} for {url} {location}")]
    Status {
        status: u16,
        url: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        SourceError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        SourceError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn status(status: u16, url: &str) -> Self {
        SourceError::Status {
            status,
            url: url.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for SourceError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SourceError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for SourceError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        SourceError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, SourceError>;
