// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Track-me settings model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Track-me configuration and state.
///
/// Field names match the JSON stored under the `trackingSettings` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "client/src/lib/generated/")
)]
pub struct TrackingSettings {
    /// Optional second contact to notify.
    #[serde(default)]
    pub alternate_number: String,
    /// Require the MPIN to stop tracking.
    #[serde(default)]
    pub mpin_enabled: bool,
    /// Whether a tracking session is currently running.
    #[serde(default)]
    pub is_active: bool,
}
