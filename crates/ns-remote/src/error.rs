use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Coded failure from the auth gateway.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("email is already registered")]
    EmailInUse,

    #[error("email address is malformed")]
    InvalidEmail,

    #[error("email or password is incorrect")]
    BadCredential,

    #[error("password does not meet the strength requirement")]
    WeakSecret,

    #[error("too many attempts")]
    RateLimited,

    #[error("auth gateway error: {0}")]
    Other(String),
}

impl AuthError {
    /// User-facing text for this error code.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmailInUse => "This email is already registered. Please login.",
            Self::InvalidEmail => "Invalid email format.",
            Self::BadCredential => "Incorrect email or password.",
            Self::WeakSecret => "Password should be at least 6 characters.",
            Self::RateLimited => "Too many failed attempts. Try again later.",
            Self::Other(_) => "Something went wrong!",
        }
    }
}

pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Failure from the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document store error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },

    #[error("document not found: {collection}/{id} {location}")]
    NotFound {
        collection: String,
        id: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Creates a Backend error at caller location.
    #[track_caller]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates a NotFound error at caller location.
    #[track_caller]
    pub fn not_found(collection: &str, id: &str) -> Self {
        Self::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
