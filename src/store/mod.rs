// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable key-value storage.
//!
//! Everything the app persists goes through one small injected
//! interface, so the UI shell can plug in whatever the platform offers
//! and tests can substitute an in-memory fake. Values are opaque
//! strings addressed by fixed keys; last writer wins. There is no
//! locking across keys: this is single-user, single-device state that
//! is never shared across processes.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Storage keys as constants.
pub mod keys {
    /// Last persisted position fix (`{"lat", "lng", "timestamp"}` JSON).
    pub const LAST_KNOWN_FIX: &str = "lastKnownLocation";
    /// `"true"` once the user has granted geolocation access.
    pub const PERMISSION_GRANTED: &str = "locationPermissionGranted";
    /// Saved user profile JSON.
    pub const USER_PROFILE: &str = "userProfile";
    /// `"true"` from signup until first-run onboarding has completed.
    pub const FIRST_TIME_USER: &str = "isFirstTimeUser";
    /// Track-me settings JSON.
    pub const TRACKING_SETTINGS: &str = "trackingSettings";
    /// Hex HMAC digest of the track-me MPIN.
    pub const TRACKING_MPIN_DIGEST: &str = "trackingMpinDigest";
}

/// Errors from storage operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Stored value could not be encoded: {0}")]
    Encoding(String),
}

/// Injected durable key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value at `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` at `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value at `key`. Absent keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
