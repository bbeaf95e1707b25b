//! Error types for the location store and route planner.

use std::io;

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Input rejected before any mutation happened.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("location name is empty")]
    EmptyName,

    #[error("location position is missing")]
    MissingPosition,

    #[error("coordinate out of range: lat {lat}, lng {lng}")]
    CoordinateOutOfRange { lat: f64, lng: f64 },
}

/// Failure of the underlying persistence slot.
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("blob I/O failed for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    /// The blob exists but its bytes are not text.
    #[error("blob for key {key:?} is not valid UTF-8: {source}")]
    NotUtf8 {
        key: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid blob key {0:?}")]
    InvalidKey(String),
}

/// Errors returned by [`crate::store::LocationStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no location with id {id:?}")]
    NotFound { id: String },

    /// The persisted blob exists but is not a list of locations.
    ///
    /// Returned as a warning next to an empty collection, never as a failure.
    #[error("stored locations are corrupt: {reason}")]
    CorruptData { reason: String },

    #[error(transparent)]
    Blob(#[from] BlobError),

    #[error("failed to serialize locations: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The origin provider could not produce a usable position.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OriginError {
    #[error("origin access denied")]
    Denied,

    #[error("origin unavailable: {0}")]
    Unavailable(String),

    #[error("origin provider returned an invalid coordinate")]
    Invalid(#[from] ValidationError),
}

impl From<reqwest::Error> for OriginError {
    fn from(err: reqwest::Error) -> Self {
        OriginError::Unavailable(err.to_string())
    }
}
