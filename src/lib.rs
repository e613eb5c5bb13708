// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! SafeDial: emergency services companion core.
//!
//! This crate provides everything behind the SafeDial screens: device
//! location capture and caching, the SOS alert lifecycle, the
//! emergency-service directory, and profile and track-me storage. The
//! UI shell owns navigation and rendering and calls into [`AppState`].

pub mod config;
pub mod error;
pub mod models;
pub mod platform;
pub mod services;
pub mod store;
pub mod time_utils;

use std::sync::Arc;

use config::Config;
use platform::Geolocator;
use services::{DirectoryService, LocationSession, ProfileService, SosService, TrackingService};
use store::KeyValueStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub location: LocationSession,
    pub sos: SosService,
    pub directory: DirectoryService,
    pub profile: ProfileService,
    pub tracking: TrackingService,
}

impl AppState {
    /// Wire up the services around an injected store and geolocator.
    ///
    /// Falls back to the built-in directory when no custom directory
    /// file is configured or the configured one cannot be loaded.
    pub fn new(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        geolocator: Arc<dyn Geolocator>,
    ) -> Self {
        let directory = match &config.directory_path {
            Some(path) => DirectoryService::load_from_file(path).unwrap_or_else(|err| {
                tracing::warn!(
                    error = %err,
                    path = %path.display(),
                    "Falling back to built-in directory"
                );
                DirectoryService::with_default_directory()
            }),
            None => DirectoryService::with_default_directory(),
        };

        Self {
            location: LocationSession::new(geolocator, store.clone()),
            sos: SosService::new(),
            directory,
            profile: ProfileService::new(store.clone()),
            tracking: TrackingService::new(store.clone(), config.pin_digest_key.clone()),
            store,
            config,
        }
    }
}

/// Initialize structured JSON logging.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("safedial_core=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
