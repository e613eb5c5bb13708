// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Track-me settings and MPIN protection.
//!
//! The MPIN guards the stop action so a tracking session cannot be
//! silently ended by someone else holding the phone. Only an
//! HMAC-SHA256 digest of the PIN is stored.

use std::sync::Arc;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{AppError, Result};
use crate::models::TrackingSettings;
use crate::store::{keys, KeyValueStore};

// Type alias for HMAC-SHA256
type HmacSha256 = Hmac<Sha256>;

/// Manages track-me settings and the MPIN digest.
#[derive(Clone)]
pub struct TrackingService {
    store: Arc<dyn KeyValueStore>,
    digest_key: Vec<u8>,
}

impl TrackingService {
    pub fn new(store: Arc<dyn KeyValueStore>, digest_key: Vec<u8>) -> Self {
        Self { store, digest_key }
    }

    /// Current settings; defaults when nothing is saved yet.
    pub fn settings(&self) -> TrackingSettings {
        match self.store.get(keys::TRACKING_SETTINGS) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Discarding unreadable tracking settings");
                TrackingSettings::default()
            }),
            Ok(None) => TrackingSettings::default(),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read tracking settings");
                TrackingSettings::default()
            }
        }
    }

    /// Persist settings as entered on the track-me screen.
    pub fn save_settings(&self, settings: &TrackingSettings) -> Result<()> {
        let encoded = serde_json::to_string(settings)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Settings encoding failed: {}", e)))?;
        self.store.set(keys::TRACKING_SETTINGS, &encoded)?;
        Ok(())
    }

    /// Enroll an MPIN (4-6 digits). Replaces any previous one.
    pub fn set_mpin(&self, pin: &str) -> Result<()> {
        if !is_valid_pin(pin) {
            return Err(AppError::Validation("MPIN must be 4-6 digits".to_string()));
        }

        let digest = self.digest(pin)?;
        self.store.set(keys::TRACKING_MPIN_DIGEST, &digest)?;
        tracing::info!("MPIN enrolled");
        Ok(())
    }

    /// Check a PIN against the enrolled digest.
    ///
    /// `false` when no MPIN has been enrolled.
    pub fn verify_mpin(&self, pin: &str) -> Result<bool> {
        let stored = match self.store.get(keys::TRACKING_MPIN_DIGEST)? {
            Some(stored) => stored,
            None => return Ok(false),
        };
        Ok(self.digest(pin)? == stored)
    }

    /// Start a tracking session.
    pub fn start(&self) -> Result<TrackingSettings> {
        let mut settings = self.settings();
        settings.is_active = true;
        self.save_settings(&settings)?;
        tracing::info!("Tracking started");
        Ok(settings)
    }

    /// Stop the tracking session.
    ///
    /// When MPIN protection is enabled, a correct PIN is required.
    pub fn stop(&self, pin: Option<&str>) -> Result<TrackingSettings> {
        let mut settings = self.settings();
        if settings.mpin_enabled {
            let pin = pin
                .ok_or_else(|| AppError::Validation("MPIN required to stop tracking".to_string()))?;
            if !self.verify_mpin(pin)? {
                return Err(AppError::Validation("Incorrect MPIN".to_string()));
            }
        }

        settings.is_active = false;
        self.save_settings(&settings)?;
        tracing::info!("Tracking stopped");
        Ok(settings)
    }

    fn digest(&self, pin: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(&self.digest_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HMAC init failed: {}", e)))?;
        mac.update(pin.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

/// MPINs are 4-6 ASCII digits.
fn is_valid_pin(pin: &str) -> bool {
    (4..=6).contains(&pin.len()) && pin.chars().all(|c| c.is_ascii_digit())
}
