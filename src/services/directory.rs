// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Emergency service directory: lookup, search, and distance ranking.

use std::fs;
use std::path::Path;

use geo::{Distance, Haversine, Point};

use crate::models::{EmergencyService, LocationFix};

/// Minimum query length before search returns anything.
const MIN_QUERY_LEN: usize = 3;

/// Search results are capped for the suggestion list.
const MAX_SEARCH_RESULTS: usize = 5;

/// In-memory directory of emergency services.
#[derive(Debug, Clone, Default)]
pub struct DirectoryService {
    services: Vec<EmergencyService>,
}

impl DirectoryService {
    /// Directory with the built-in nationwide service table.
    pub fn with_default_directory() -> Self {
        Self {
            services: default_services(),
        }
    }

    /// Load a directory from a JSON file (an array of services).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| DirectoryError::Io(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a directory from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, DirectoryError> {
        let services: Vec<EmergencyService> =
            serde_json::from_str(json_data).map_err(|e| DirectoryError::Parse(e.to_string()))?;

        tracing::info!(count = services.len(), "Loaded emergency service directory");
        Ok(Self { services })
    }

    /// Get the list of services.
    pub fn services(&self) -> &[EmergencyService] {
        &self.services
    }

    /// Look up a service by its ID.
    pub fn find(&self, id: &str) -> Option<&EmergencyService> {
        self.services.iter().find(|service| service.id == id)
    }

    /// Case-insensitive search over name, category, and location.
    ///
    /// Queries below three characters return nothing (the suggestion
    /// box stays quiet while the user is still typing); results are
    /// capped at five.
    pub fn search(&self, query: &str) -> Vec<&EmergencyService> {
        let query = query.trim().to_lowercase();
        if query.len() < MIN_QUERY_LEN {
            return Vec::new();
        }

        self.services
            .iter()
            .filter(|service| {
                service.name.to_lowercase().contains(&query)
                    || service.category.to_lowercase().contains(&query)
                    || service.location.to_lowercase().contains(&query)
            })
            .take(MAX_SEARCH_RESULTS)
            .collect()
    }

    /// Services with a known site, ordered by distance from `fix`.
    ///
    /// Returns (service, meters) pairs. Helplines without coordinates
    /// are not ranked.
    pub fn nearest(&self, fix: &LocationFix) -> Vec<(&EmergencyService, f64)> {
        let origin = Point::new(fix.longitude, fix.latitude);
        let mut ranked: Vec<(&EmergencyService, f64)> = self
            .services
            .iter()
            .filter_map(|service| {
                service
                    .site()
                    .map(|site| (service, Haversine.distance(origin, site)))
            })
            .collect();

        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }

    /// Human-readable distance label ("350 m", "0.8 km", "12 km").
    pub fn distance_label(meters: f64) -> String {
        if meters < 1000.0 {
            format!("{:.0} m", meters)
        } else if meters < 10_000.0 {
            format!("{:.1} km", meters / 1000.0)
        } else {
            format!("{:.0} km", meters / 1000.0)
        }
    }
}

/// Errors from directory loading.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Failed to read file: {0}")]
    Io(String),

    #[error("Failed to parse directory JSON: {0}")]
    Parse(String),
}

/// The table the home screen has always shipped with.
fn default_services() -> Vec<EmergencyService> {
    vec![
        entry(
            "police",
            "Police",
            "Law Enforcement",
            "112",
            None,
            "Central Police Station",
            "Main Street, City Center",
            "police",
            "blue",
        ),
        entry(
            "fire",
            "Fire",
            "Fire Department",
            "101",
            None,
            "Fire Station",
            "Emergency Lane, Downtown",
            "fire",
            "red",
        ),
        entry(
            "medical",
            "Medical",
            "Emergency Medical",
            "102",
            Some("108"),
            "City Hospital",
            "Health Complex, Medical District",
            "medical",
            "red",
        ),
        entry(
            "cm",
            "CM Helpline",
            "Chief Minister Office",
            "1076",
            None,
            "CM Office",
            "Available 24x7",
            "disaster",
            "orange",
        ),
        entry(
            "women",
            "Women Help",
            "Women Safety",
            "1090",
            None,
            "Women Helpline",
            "Available 24x7",
            "women",
            "pink",
        ),
        entry(
            "child",
            "Child Help",
            "Child Protection",
            "1098",
            None,
            "Child Helpline",
            "Available 24x7",
            "child",
            "purple",
        ),
        entry(
            "nic",
            "NIC Helpline",
            "Technical Support",
            "1800 111 555",
            None,
            "NIC Support Center",
            "Available 24x7",
            "elderly",
            "indigo",
        ),
        entry(
            "railway",
            "Railway",
            "Railway Security",
            "182",
            None,
            "Railway Security",
            "Central Railway Station",
            "railway",
            "green",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    category: &str,
    phone: &str,
    alternate_phone: Option<&str>,
    location: &str,
    address: &str,
    icon: &str,
    color: &str,
) -> EmergencyService {
    EmergencyService {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        phone: phone.to_string(),
        alternate_phone: alternate_phone.map(str::to_string),
        location: location.to_string(),
        address: address.to_string(),
        latitude: None,
        longitude: None,
        available: true,
        icon: icon.to_string(),
        color: color.to_string(),
    }
}
