// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile persistence.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::UserProfile;
use crate::store::{keys, KeyValueStore};

/// Stores and validates the user profile.
#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The saved profile, if any.
    ///
    /// Unreadable stored JSON is treated as absent; the signup screen
    /// runs again rather than the app refusing to start.
    pub fn load(&self) -> Result<Option<UserProfile>> {
        match self.store.get(keys::USER_PROFILE)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(profile) => Ok(Some(profile)),
                Err(err) => {
                    tracing::warn!(error = %err, "Discarding unreadable stored profile");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Validate and persist the profile.
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        profile
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let encoded = serde_json::to_string(profile)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Profile encoding failed: {}", e)))?;
        self.store.set(keys::USER_PROFILE, &encoded)?;

        tracing::info!("Profile saved");
        Ok(())
    }

    /// Encode raw image bytes as the data URL stored on the profile.
    pub fn encode_profile_image(mime_type: &str, bytes: &[u8]) -> String {
        format!("data:{};base64,{}", mime_type, BASE64.encode(bytes))
    }

    /// Record that signup just completed and onboarding should run.
    pub fn mark_first_time_user(&self) -> Result<()> {
        self.store.set(keys::FIRST_TIME_USER, "true")?;
        Ok(())
    }

    /// Whether first-run onboarding has not happened yet.
    pub fn is_first_time_user(&self) -> bool {
        matches!(
            self.store.get(keys::FIRST_TIME_USER),
            Ok(Some(ref flag)) if flag == "true"
        )
    }

    /// Clear the onboarding flag once the tour has been shown.
    pub fn complete_onboarding(&self) -> Result<()> {
        self.store.remove(keys::FIRST_TIME_USER)?;
        Ok(())
    }
}
