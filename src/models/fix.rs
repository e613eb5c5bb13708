// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Position fix model and its persisted form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time_utils;

/// Address label attached to fixes.
///
/// Address resolution is best-effort only; without a real reverse
/// geocoder every fix carries this placeholder.
pub const CURRENT_LOCATION_LABEL: &str = "Current Location";

/// A captured device position.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Best-effort human-readable label. Not authoritative.
    pub address: String,
    /// When the platform reported this position.
    pub captured_at: DateTime<Utc>,
}

impl LocationFix {
    /// A fix captured now, with the placeholder address label.
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            address: CURRENT_LOCATION_LABEL.to_string(),
            captured_at: Utc::now(),
        }
    }

    /// Whether this fix still counts as "current" at `now`.
    ///
    /// A fix exactly at the window boundary is stale.
    pub fn is_fresh(&self, max_age: std::time::Duration, now: DateTime<Utc>) -> bool {
        match chrono::Duration::from_std(max_age) {
            Ok(window) => now.signed_duration_since(self.captured_at) < window,
            Err(_) => false,
        }
    }
}

/// Persisted wire form of the last known fix.
///
/// This is the record the app has always written to local storage:
/// coordinates plus an epoch-milliseconds capture timestamp. The
/// address label is not persisted; a reloaded fix regains the
/// placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredFix {
    pub lat: f64,
    pub lng: f64,
    pub timestamp: i64,
}

impl From<&LocationFix> for StoredFix {
    fn from(fix: &LocationFix) -> Self {
        Self {
            lat: fix.latitude,
            lng: fix.longitude,
            timestamp: time_utils::to_epoch_millis(fix.captured_at),
        }
    }
}

impl StoredFix {
    /// Rehydrate into a [`LocationFix`].
    ///
    /// Returns `None` when the stored timestamp is out of range.
    pub fn into_fix(self) -> Option<LocationFix> {
        let captured_at = time_utils::from_epoch_millis(self.timestamp)?;
        Some(LocationFix {
            latitude: self.lat,
            longitude: self.lng,
            address: CURRENT_LOCATION_LABEL.to_string(),
            captured_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::time::Duration as StdDuration;

    const FIVE_MINUTES: StdDuration = StdDuration::from_millis(300_000);

    fn fix_aged(minutes: i64, now: DateTime<Utc>) -> LocationFix {
        LocationFix {
            latitude: 12.9716,
            longitude: 77.5946,
            address: CURRENT_LOCATION_LABEL.to_string(),
            captured_at: now - Duration::minutes(minutes),
        }
    }

    #[test]
    fn test_four_minute_old_fix_is_fresh() {
        let now = Utc::now();
        assert!(fix_aged(4, now).is_fresh(FIVE_MINUTES, now));
    }

    #[test]
    fn test_six_minute_old_fix_is_stale() {
        let now = Utc::now();
        assert!(!fix_aged(6, now).is_fresh(FIVE_MINUTES, now));
    }

    #[test]
    fn test_fix_at_exact_window_boundary_is_stale() {
        let now = Utc::now();
        assert!(!fix_aged(5, now).is_fresh(FIVE_MINUTES, now));
    }

    #[test]
    fn test_stored_fix_roundtrip_loses_only_the_label() {
        let fix = LocationFix::at(48.8584, 2.2945);
        let restored = StoredFix::from(&fix).into_fix().unwrap();

        assert_eq!(restored.latitude, fix.latitude);
        assert_eq!(restored.longitude, fix.longitude);
        assert_eq!(
            restored.captured_at.timestamp_millis(),
            fix.captured_at.timestamp_millis()
        );
        assert_eq!(restored.address, CURRENT_LOCATION_LABEL);
    }

    #[test]
    fn test_stored_fix_wire_field_names() {
        let fix = LocationFix::at(1.5, 2.5);
        let encoded = serde_json::to_string(&StoredFix::from(&fix)).unwrap();
        assert!(encoded.contains("\"lat\""));
        assert!(encoded.contains("\"lng\""));
        assert!(encoded.contains("\"timestamp\""));
    }
}
