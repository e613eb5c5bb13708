// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::store::StoreError;

/// Failure causes for a platform geolocation request.
///
/// Every cause is recoverable at the UI level: the screens render the
/// message and let the user retry explicitly. None of them should ever
/// take the application down.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Geolocation is not supported on this device")]
    Unsupported,

    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Timed out waiting for a position fix")]
    Timeout,

    #[error("Platform error: {0}")]
    Platform(String),
}

impl From<StoreError> for LocationError {
    fn from(err: StoreError) -> Self {
        // A broken storage backend looks the same to callers as a
        // platform without local storage.
        tracing::warn!(error = %err, "Storage failure during location handling");
        LocationError::Unsupported
    }
}

/// Application error type aggregating the per-concern errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, AppError>;
