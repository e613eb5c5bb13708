// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SOS episode management.
//!
//! The screens create one SOS record when the flow is entered, feed it
//! location updates while it is active, and discard it once the user
//! confirms they are safe. The service guarantees there is never more
//! than one active episode at a time.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crate::models::{LocationFix, SosRecord};
use crate::services::LocationSession;

/// Manages the single active SOS episode.
#[derive(Default)]
pub struct SosService {
    active: Mutex<Option<SosRecord>>,
}

impl SosService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the SOS flow.
    ///
    /// Returns a snapshot of the already-active record when one exists
    /// (re-entering the screen must not raise a second alert), or opens
    /// a fresh one.
    pub fn open(&self) -> SosRecord {
        let mut active = self.lock();
        match active.as_ref() {
            Some(record) => record.clone(),
            None => {
                let record = SosRecord::open();
                tracing::info!(id = %record.id, "SOS alert raised");
                *active = Some(record.clone());
                record
            }
        }
    }

    /// Snapshot of the active record, if any.
    pub fn active(&self) -> Option<SosRecord> {
        self.lock().clone()
    }

    /// Bind a newer fix to the active record (last write wins).
    ///
    /// Returns the updated snapshot; `None` when nothing is active.
    pub fn attach_fix(&self, fix: LocationFix) -> Option<SosRecord> {
        let mut active = self.lock();
        if let Some(record) = active.as_mut() {
            record.attach_fix(fix);
        }
        active.clone()
    }

    /// Copy the session's cached fix into the active record.
    ///
    /// The fix may arrive long after the record was opened; the record
    /// absorbs whatever is current each time the screen refreshes.
    pub fn absorb_latest(&self, session: &LocationSession, max_age: Duration) -> Option<SosRecord> {
        match session.cached_fix(max_age) {
            Some(fix) => self.attach_fix(fix),
            None => self.active(),
        }
    }

    /// Attach a free-text message to the active record.
    pub fn set_message(&self, message: &str) -> Option<SosRecord> {
        let mut active = self.lock();
        if let Some(record) = active.as_mut() {
            record.message = if message.is_empty() {
                None
            } else {
                Some(message.to_string())
            };
        }
        active.clone()
    }

    /// Resolve and discard the active episode ("I am safe").
    ///
    /// Returns the final snapshot, or `None` when nothing was active.
    /// Calling again is harmless.
    pub fn resolve(&self) -> Option<SosRecord> {
        let mut active = self.lock();
        match active.take() {
            Some(mut record) => {
                record.resolve();
                tracing::info!(id = %record.id, "SOS alert resolved");
                Some(record)
            }
            None => None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<SosRecord>> {
        // A poisoned lock still holds a coherent record; take it.
        self.active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
