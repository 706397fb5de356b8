//! Unified error handling.
//!
//! Components report typed errors (`CartError`, `ApiError`, ...); front-ends
//! work with the unified [`PosError`], which sorts every failure into one of
//! four categories with an HTTP-like status:
//!
//! - validation: bad input, report inline and keep the interaction open
//! - unauthorized: login failure, surface the message and let the user retry
//! - not found: redirect to a safe default
//! - system: log it; the storage layer has already reset any corrupted state

use thiserror::Error;

use crate::cart::CartError;
use crate::checkout::CheckoutError;
use crate::settings::SettingsError;
use crate::storage::StorageError;
use crate::transport::ApiError;

/// How a failure should be handled by the acting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Unauthorized,
    NotFound,
    System,
}

/// Application-level error type for the POS engine.
#[derive(Debug, Error)]
pub enum PosError {
    /// Cart mutation rejected.
    #[error("cart error: {0}")]
    Cart(#[from] CartError),

    /// Checkout flow rejected or failed.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Mock API error.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Settings operation rejected or failed.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Persistence failure.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Bad input from the front-end.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// No active session where one is required.
    #[error("not logged in: {0}")]
    Unauthorized(String),

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PosError {
    /// How the front-end should surface this failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Cart(err) => match err {
                CartError::LineNotFound(_) => ErrorKind::NotFound,
                CartError::InvalidDimension { .. } | CartError::InvalidQuantity => {
                    ErrorKind::Validation
                }
            },
            Self::Checkout(err) => match err {
                CheckoutError::EmptyCart | CheckoutError::InsufficientCash { .. } => {
                    ErrorKind::Validation
                }
                CheckoutError::Api(api) => api_kind(api),
                CheckoutError::Storage(_) => ErrorKind::System,
            },
            Self::Api(err) => api_kind(err),
            Self::Settings(err) => match err {
                SettingsError::StaffNotFound(_) => ErrorKind::NotFound,
                SettingsError::Storage(_) => ErrorKind::System,
                SettingsError::MissingStaffFields
                | SettingsError::PasswordMismatch
                | SettingsError::PasswordTooShort => ErrorKind::Validation,
            },
            Self::Storage(_) | Self::Internal(_) => ErrorKind::System,
            Self::BadRequest(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
        }
    }

    /// HTTP-like status code for the failure.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self.kind() {
            ErrorKind::Validation => 422,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::System => 500,
        }
    }
}

const fn api_kind(err: &ApiError) -> ErrorKind {
    match err {
        ApiError::Unauthorized(_) => ErrorKind::Unauthorized,
        ApiError::RouteNotFound(_) => ErrorKind::NotFound,
        ApiError::BadRequest(_) => ErrorKind::Validation,
        ApiError::InvalidResponse(_) => ErrorKind::System,
    }
}

/// Result type alias for `PosError`.
pub type Result<T> = std::result::Result<T, PosError>;
