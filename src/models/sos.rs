// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SOS alert record and its lifecycle.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

use crate::models::LocationFix;
use crate::time_utils;

/// Status of an SOS episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SosStatus {
    Active,
    Resolved,
}

impl SosStatus {
    /// Badge text the screens display.
    pub fn label(&self) -> &'static str {
        match self {
            SosStatus::Active => "ACTIVE",
            SosStatus::Resolved => "RESOLVED",
        }
    }
}

/// One emergency-alert episode.
///
/// Records live in memory only: a resolved record is discarded, never
/// persisted. The bound fix is a snapshot of whatever was current when
/// it was attached; the record does not own location acquisition.
#[derive(Debug, Clone)]
pub struct SosRecord {
    pub id: String,
    pub status: SosStatus,
    pub created_at: DateTime<Utc>,
    pub message: Option<String>,
    pub fix: Option<LocationFix>,
}

impl SosRecord {
    /// Open a new active record with a generated ID and no bound fix.
    pub fn open() -> Self {
        Self {
            id: generate_sos_id(),
            status: SosStatus::Active,
            created_at: Utc::now(),
            message: None,
            fix: None,
        }
    }

    /// Bind a newer fix. Last write wins, no history is kept, and a
    /// resolved record ignores the update.
    pub fn attach_fix(&mut self, fix: LocationFix) {
        if self.status == SosStatus::Active {
            self.fix = Some(fix);
        }
    }

    /// Mark the episode resolved. Idempotent; there is no way back to
    /// active.
    pub fn resolve(&mut self) {
        self.status = SosStatus::Resolved;
    }

    pub fn is_active(&self) -> bool {
        self.status == SosStatus::Active
    }

    /// Short text for the platform share sheet.
    ///
    /// Never fails; a record without a bound fix degrades to a
    /// location-unavailable note.
    pub fn shareable_summary(&self) -> String {
        let status_text = match self.status {
            SosStatus::Active => "Emergency alert active",
            SosStatus::Resolved => "Emergency alert resolved",
        };
        let location = self
            .fix
            .as_ref()
            .map(|fix| fix.address.clone())
            .unwrap_or_else(|| "Location unavailable".to_string());
        format!(
            "{} ({}, {}). Location: {}",
            status_text,
            self.id,
            time_utils::format_utc_rfc3339(self.created_at),
            location
        )
    }
}

/// Generate an alert ID in the `SOS-<year>-<3 digits>` form.
fn generate_sos_id() -> String {
    let serial: u32 = rand::thread_rng().gen_range(0..1000);
    format!("SOS-{}-{:03}", Utc::now().year(), serial)
}
