// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Emergency service directory records.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One entry in the emergency-service directory.
///
/// Display-oriented data (icon, color) rides along so the screens need
/// no second lookup table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "client/src/lib/generated/")
)]
pub struct EmergencyService {
    pub id: String,
    pub name: String,
    pub category: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_phone: Option<String>,
    pub location: String,
    pub address: String,
    /// Site coordinates, when the service has a physical site.
    /// Nationwide helplines carry none and are skipped by distance
    /// ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub available: bool,
    pub icon: String,
    pub color: String,
}

impl EmergencyService {
    /// Coordinates as a point, when present.
    pub fn site(&self) -> Option<geo::Point<f64>> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(geo::Point::new(lng, lat)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_requires_both_coordinates() {
        let mut service = EmergencyService {
            id: "police".to_string(),
            name: "Police".to_string(),
            category: "Law Enforcement".to_string(),
            phone: "112".to_string(),
            alternate_phone: None,
            location: "Central Police Station".to_string(),
            address: "Main Street, City Center".to_string(),
            latitude: Some(12.97),
            longitude: None,
            available: true,
            icon: "police".to_string(),
            color: "blue".to_string(),
        };
        assert!(service.site().is_none());

        service.longitude = Some(77.59);
        let site = service.site().unwrap();
        assert_eq!(site.x(), 77.59);
        assert_eq!(site.y(), 12.97);
    }
}
