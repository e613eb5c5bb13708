// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Platform geolocation seam.
//!
//! The real positioning capability lives in the UI shell (browser or
//! mobile runtime). The core consumes it through the [`Geolocator`]
//! trait, so sessions can be driven by any platform and tests by a
//! scripted mock. A shell running somewhere without positioning at all
//! injects an implementation that fails with
//! [`LocationError::Unsupported`].

use futures_util::future::BoxFuture;

use crate::error::LocationError;

/// A raw coordinate pair as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// One-shot platform position request.
///
/// Implementations report the device position or a [`LocationError`]
/// cause. Timeouts are enforced by the caller, not the implementation:
/// a platform that never answers is simply abandoned.
pub trait Geolocator: Send + Sync {
    /// Request the current device position.
    fn current_position(
        &self,
        high_accuracy: bool,
    ) -> BoxFuture<'_, Result<RawPosition, LocationError>>;
}

/// A geolocator pinned to fixed coordinates.
///
/// Stand-in for demo builds and shells without positioning
/// hardware-in-the-loop.
#[derive(Debug, Clone)]
pub struct StaticGeolocator {
    position: RawPosition,
}

impl StaticGeolocator {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            position: RawPosition {
                latitude,
                longitude,
            },
        }
    }
}

impl Geolocator for StaticGeolocator {
    fn current_position(
        &self,
        _high_accuracy: bool,
    ) -> BoxFuture<'_, Result<RawPosition, LocationError>> {
        let position = self.position;
        Box::pin(async move { Ok(position) })
    }
}
