// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile model for storage and the profile screens.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

/// Saved user profile.
///
/// Field names match the JSON stored under the `userProfile` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "client/src/lib/generated/")
)]
pub struct UserProfile {
    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: String,
    #[validate(custom(function = validate_phone))]
    pub phone_number: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub state: String,
    #[validate(length(max = 500, message = "About text is limited to 500 characters"))]
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub special_need: bool,
    /// Base64 data URL, when a photo has been set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Accept international formats like "+91 98765 43210": an optional
/// leading `+`, 7-15 digits, spaces and dashes as separators.
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();
    let rest = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits = rest.chars().filter(|c| c.is_ascii_digit()).count();
    let separators_only = rest
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-');

    if separators_only && (7..=15).contains(&digits) {
        Ok(())
    } else {
        Err(ValidationError::new("phone_number"))
    }
}
