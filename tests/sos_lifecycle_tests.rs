// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tests for the SOS episode lifecycle.

mod common;

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Utc};
use common::{test_session, test_store, MockGeolocator};
use safedial_core::models::SosStatus;
use safedial_core::services::{FixOptions, SosService};

const FIVE_MINUTES: Duration = Duration::from_millis(300_000);

#[test]
fn open_generates_current_year_id() {
    let sos = SosService::new();
    let record = sos.open();

    let parts: Vec<&str> = record.id.split('-').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "SOS");
    assert_eq!(parts[1], Utc::now().year().to_string());
    assert_eq!(parts[2].len(), 3);
    assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(record.status, SosStatus::Active);
    assert!(record.fix.is_none());
}

#[test]
fn open_while_active_returns_the_same_episode() {
    let sos = SosService::new();
    let first = sos.open();
    let second = sos.open();

    assert_eq!(first.id, second.id);
    assert!(sos.active().is_some());
}

#[test]
fn resolve_discards_the_episode() {
    let sos = SosService::new();
    let opened = sos.open();

    let resolved = sos.resolve().expect("an episode was active");
    assert_eq!(resolved.id, opened.id);
    assert_eq!(resolved.status, SosStatus::Resolved);
    assert!(sos.active().is_none());

    // Resolving again is harmless
    assert!(sos.resolve().is_none());
}

#[test]
fn open_after_resolve_starts_a_fresh_episode() {
    let sos = SosService::new();
    let first = sos.open();
    sos.resolve();
    let second = sos.open();

    assert_ne!(first.created_at, second.created_at);
    assert_eq!(second.status, SosStatus::Active);
    assert!(second.fix.is_none());
}

#[test]
fn attach_fix_without_active_episode_is_noop() {
    let sos = SosService::new();
    let snapshot = sos.attach_fix(safedial_core::models::LocationFix::at(1.0, 1.0));
    assert!(snapshot.is_none());
}

#[test]
fn summary_degrades_without_fix() {
    let sos = SosService::new();
    let record = sos.open();

    let summary = record.shareable_summary();
    assert!(summary.contains("Location unavailable"));
    assert!(summary.contains("Emergency alert active"));
}

#[tokio::test]
async fn active_record_absorbs_latest_fix() {
    let store = test_store();
    let session = test_session(Arc::new(MockGeolocator::fixed(48.8584, 2.2945)), store);
    let sos = SosService::new();
    sos.open();

    session
        .request_current_fix(&FixOptions::default())
        .await
        .unwrap();
    let record = sos.absorb_latest(&session, FIVE_MINUTES).unwrap();

    let fix = record.fix.as_ref().expect("fix should be bound");
    assert_eq!(fix.latitude, 48.8584);
    assert!(record.shareable_summary().contains("Current Location"));
}

#[tokio::test]
async fn absorb_without_cached_fix_leaves_record_unbound() {
    let store = test_store();
    let session = test_session(Arc::new(MockGeolocator::fixed(0.0, 0.0)), store);
    let sos = SosService::new();
    sos.open();

    let record = sos.absorb_latest(&session, FIVE_MINUTES).unwrap();
    assert!(record.fix.is_none());
}

#[test]
fn message_rides_on_the_episode_to_resolution() {
    let sos = SosService::new();
    sos.open();
    sos.set_message("Trapped near the river bridge");

    let resolved = sos.resolve().unwrap();
    assert_eq!(
        resolved.message.as_deref(),
        Some("Trapped near the river bridge")
    );
}

#[test]
fn empty_message_clears_the_field() {
    let sos = SosService::new();
    sos.open();
    sos.set_message("something");
    let record = sos.set_message("").unwrap();
    assert!(record.message.is_none());
}
