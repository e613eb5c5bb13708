// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test helpers: a scripted geolocator and store builders.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use safedial_core::error::LocationError;
use safedial_core::platform::{Geolocator, RawPosition};
use safedial_core::services::LocationSession;
use safedial_core::store::MemoryStore;

/// Scripted geolocator for driving the location session in tests.
pub struct MockGeolocator {
    outcome: Result<RawPosition, LocationError>,
    delay: Option<Duration>,
    hang: bool,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockGeolocator {
    /// Always reports the given coordinates.
    pub fn fixed(latitude: f64, longitude: f64) -> Self {
        Self {
            outcome: Ok(RawPosition {
                latitude,
                longitude,
            }),
            delay: None,
            hang: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Reports the coordinates after a delay.
    pub fn delayed(latitude: f64, longitude: f64, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::fixed(latitude, longitude)
        }
    }

    /// Always fails with the given cause.
    pub fn failing(error: LocationError) -> Self {
        Self {
            outcome: Err(error),
            delay: None,
            hang: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Never responds (the platform goes silent).
    pub fn silent() -> Self {
        Self {
            hang: true,
            ..Self::fixed(0.0, 0.0)
        }
    }

    /// How many position requests were issued.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Geolocator for MockGeolocator {
    fn current_position(
        &self,
        _high_accuracy: bool,
    ) -> BoxFuture<'_, Result<RawPosition, LocationError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self.outcome.clone();
        let delay = self.delay;
        let hang = self.hang;
        Box::pin(async move {
            if hang {
                std::future::pending::<()>().await;
            }
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            outcome
        })
    }
}

/// Fresh in-memory store.
#[allow(dead_code)]
pub fn test_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Session over the given mock and store.
#[allow(dead_code)]
pub fn test_session(geolocator: Arc<MockGeolocator>, store: Arc<MemoryStore>) -> LocationSession {
    LocationSession::new(geolocator, store)
}
