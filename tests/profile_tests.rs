// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tests for profile persistence and validation.

mod common;

use common::test_store;
use safedial_core::models::UserProfile;
use safedial_core::services::ProfileService;
use safedial_core::store::{keys, KeyValueStore};

fn valid_profile() -> UserProfile {
    UserProfile {
        full_name: "John Doe".to_string(),
        phone_number: "+91 9876543210".to_string(),
        state: "Karnataka".to_string(),
        ..UserProfile::default()
    }
}

#[test]
fn save_and_load_roundtrip() {
    let store = test_store();
    let service = ProfileService::new(store.clone());

    service.save(&valid_profile()).unwrap();

    let loaded = service.load().unwrap().expect("profile should exist");
    assert_eq!(loaded.full_name, "John Doe");
    assert_eq!(loaded.state, "Karnataka");

    // Stored JSON uses the original camelCase names
    let raw = store.get(keys::USER_PROFILE).unwrap().unwrap();
    assert!(raw.contains("\"fullName\""));
    assert!(raw.contains("\"phoneNumber\""));
}

#[test]
fn invalid_profile_is_not_persisted() {
    let store = test_store();
    let service = ProfileService::new(store.clone());

    let profile = UserProfile {
        phone_number: "123".to_string(),
        ..valid_profile()
    };
    assert!(service.save(&profile).is_err());
    assert!(store.get(keys::USER_PROFILE).unwrap().is_none());
}

#[test]
fn missing_profile_loads_as_none() {
    let service = ProfileService::new(test_store());
    assert!(service.load().unwrap().is_none());
}

#[test]
fn corrupt_profile_loads_as_none() {
    let store = test_store();
    store.set(keys::USER_PROFILE, "{oops").unwrap();

    let service = ProfileService::new(store);
    assert!(service.load().unwrap().is_none());
}

#[test]
fn profile_image_encodes_as_data_url() {
    let encoded = ProfileService::encode_profile_image("image/png", &[0x89, 0x50, 0x4e, 0x47]);
    assert!(encoded.starts_with("data:image/png;base64,"));

    let store = test_store();
    let service = ProfileService::new(store);
    let profile = UserProfile {
        profile_image: Some(encoded),
        ..valid_profile()
    };
    service.save(&profile).unwrap();

    let loaded = service.load().unwrap().unwrap();
    assert!(loaded.profile_image.unwrap().starts_with("data:image/png"));
}

#[test]
fn first_time_user_flag_lifecycle() {
    let service = ProfileService::new(test_store());

    assert!(!service.is_first_time_user());
    service.mark_first_time_user().unwrap();
    assert!(service.is_first_time_user());
    service.complete_onboarding().unwrap();
    assert!(!service.is_first_time_user());
}
