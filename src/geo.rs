//! Geospatial helpers: great-circle distance, walking estimates, map links

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Average walking speed (5 km/h) in meters per minute
pub const WALKING_SPEED_METERS_PER_MINUTE: f64 = 83.33;

/// A point on the Earth's surface in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Distance to another point in meters
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        distance_meters(*self, *other)
    }
}

/// Great-circle distance between two points in meters (Haversine).
///
/// Coordinates are not range checked. A NaN in either point yields NaN, which
/// callers must treat as "proximity cannot be verified".
pub fn distance_meters(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h just outside [0, 1]; clamp keeps NaN as NaN
    let h = h.clamp(0.0, 1.0);

    2.0 * h.sqrt().asin() * EARTH_RADIUS_METERS
}

/// Estimated walking time in whole minutes, always at least one
pub fn walking_time_minutes(distance_meters: f64) -> u32 {
    (distance_meters / WALKING_SPEED_METERS_PER_MINUTE) as u32 + 1
}

/// Deep links to external navigation apps
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavigationLinks {
    pub google_maps_url: String,
    pub waze_url: String,
}

/// Build walking-direction links from `origin` to `destination`
pub fn navigation_links(origin: Coordinates, destination: Coordinates) -> NavigationLinks {
    NavigationLinks {
        google_maps_url: format!(
            "https://www.google.com/maps/dir/?api=1&origin={},{}&destination={},{}&travelmode=walking",
            origin.latitude, origin.longitude, destination.latitude, destination.longitude
        ),
        waze_url: format!(
            "https://waze.com/ul?ll={},{}&navigate=yes",
            destination.latitude, destination.longitude
        ),
    }
}

/// Round a distance to one decimal place for display
pub fn round_distance(distance_meters: f64) -> f64 {
    (distance_meters * 10.0).round() / 10.0
}
