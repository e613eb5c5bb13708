// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Device location acquisition and caching.
//!
//! Wraps the platform geolocator with:
//! - A timeout race (the platform may never call back)
//! - A persisted last-known fix with a freshness window
//! - The persisted permission flag read on later launches

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::config::LocationConfig;
use crate::error::LocationError;
use crate::models::{LocationFix, StoredFix};
use crate::platform::Geolocator;
use crate::store::{keys, KeyValueStore, StoreError};

/// Options for a single fix request.
#[derive(Debug, Clone)]
pub struct FixOptions {
    /// Ask the platform for high-accuracy positioning.
    pub high_accuracy: bool,
    /// How long to wait for the platform before giving up.
    pub timeout: Duration,
    /// How long a cached fix counts as current.
    pub max_cache_age: Duration,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_millis(10_000),
            max_cache_age: Duration::from_millis(300_000),
        }
    }
}

impl From<&LocationConfig> for FixOptions {
    fn from(config: &LocationConfig) -> Self {
        Self {
            high_accuracy: config.high_accuracy,
            timeout: Duration::from_millis(config.timeout_ms),
            max_cache_age: Duration::from_millis(config.max_cache_age_ms),
        }
    }
}

/// Acquires and caches the device's position.
#[derive(Clone)]
pub struct LocationSession {
    geolocator: Arc<dyn Geolocator>,
    store: Arc<dyn KeyValueStore>,
}

impl LocationSession {
    pub fn new(geolocator: Arc<dyn Geolocator>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { geolocator, store }
    }

    /// Request a fresh position fix from the platform.
    ///
    /// Races the platform against `options.timeout`. On success the fix
    /// and the permission flag are persisted before returning. On any
    /// failure the previously cached fix is left untouched; the caller
    /// decides whether to prompt again, there is no automatic retry.
    ///
    /// Overlapping requests are allowed: the last one to complete
    /// overwrites the cache. A caller that goes away mid-request simply
    /// drops the future; the cache keeps whatever was last written.
    pub async fn request_current_fix(
        &self,
        options: &FixOptions,
    ) -> Result<LocationFix, LocationError> {
        let request = self.geolocator.current_position(options.high_accuracy);
        let position = match tokio::time::timeout(options.timeout, request).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(
                    timeout_ms = options.timeout.as_millis() as u64,
                    "Position request timed out"
                );
                return Err(LocationError::Timeout);
            }
        };

        let fix = LocationFix::at(position.latitude, position.longitude);
        let encoded = serde_json::to_string(&StoredFix::from(&fix))
            .map_err(|e| StoreError::Encoding(e.to_string()))?;
        self.store.set(keys::LAST_KNOWN_FIX, &encoded)?;
        // A successful fix implies the user granted access; remember it
        // so later launches can auto-request.
        self.store.set(keys::PERMISSION_GRANTED, "true")?;

        tracing::info!(
            latitude = fix.latitude,
            longitude = fix.longitude,
            "Position fix acquired"
        );
        Ok(fix)
    }

    /// The last persisted fix, if it is still within `max_age`.
    ///
    /// Corrupt or unreadable stored state degrades to `None`; callers
    /// re-request as if no fix existed.
    pub fn cached_fix(&self, max_age: Duration) -> Option<LocationFix> {
        let raw = match self.store.get(keys::LAST_KNOWN_FIX) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read cached fix");
                return None;
            }
        };

        let stored: StoredFix = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(error = %err, "Discarding unreadable cached fix");
                return None;
            }
        };

        let fix = stored.into_fix()?;
        if fix.is_fresh(max_age, Utc::now()) {
            Some(fix)
        } else {
            tracing::debug!(captured_at = %fix.captured_at, "Cached fix aged out");
            None
        }
    }

    /// Whether the user has ever granted geolocation access.
    pub fn has_permission_history(&self) -> bool {
        match self.store.get(keys::PERMISSION_GRANTED) {
            Ok(flag) => flag.as_deref() == Some("true"),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read permission flag");
                false
            }
        }
    }

    /// The cached fix if fresh, otherwise a new platform request.
    ///
    /// The launch path: screens call this when permission history
    /// exists and render whatever comes back.
    pub async fn current_or_request(
        &self,
        options: &FixOptions,
    ) -> Result<LocationFix, LocationError> {
        if let Some(fix) = self.cached_fix(options.max_cache_age) {
            return Ok(fix);
        }
        self.request_current_fix(options).await
    }
}
