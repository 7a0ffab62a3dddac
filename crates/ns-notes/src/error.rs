use std::panic::Location;

use error_location::ErrorLocation;
use ns_core::CoreError;
use ns_remote::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("{source} {location}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("remote store failure: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("malformed document in {collection}: {message} {location}")]
    Malformed {
        collection: String,
        message: String,
        location: ErrorLocation,
    },
}

impl NotesError {
    /// Creates a Malformed error at caller location.
    #[track_caller]
    pub fn malformed(collection: &str, message: impl Into<String>) -> Self {
        Self::Malformed {
            collection: collection.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether this failure came from the remote store.
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store { .. })
    }
}

impl From<CoreError> for NotesError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for NotesError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;
