use serde::{Deserialize, Serialize};

const MILES_PER_DEGREE: f64 = 69.0;
const AVERAGE_SPEED_MPH: f64 = 30.0;
const MIN_ETA_MINUTES: u32 = 5;

/// Distance under which a worker en route counts as arrived.
pub const ARRIVAL_GEOFENCE_MILES: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub coordinates: GeoPoint,
    #[serde(default)]
    pub address: String,
}

/// Flat-earth approximation: euclidean distance in degrees scaled to miles.
/// Good enough for display, wrong for anything that needs real geodesy.
pub fn distance_miles(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = to.lat - from.lat;
    let d_lng = to.lng - from.lng;
    (d_lat * d_lat + d_lng * d_lng).sqrt() * MILES_PER_DEGREE
}

pub fn eta_minutes(distance_miles: f64) -> u32 {
    let minutes = (distance_miles / AVERAGE_SPEED_MPH * 60.0).round();
    if minutes.is_finite() && minutes > MIN_ETA_MINUTES as f64 {
        minutes as u32
    } else {
        MIN_ETA_MINUTES
    }
}

pub fn within_arrival_geofence(distance_miles: f64) -> bool {
    distance_miles <= ARRIVAL_GEOFENCE_MILES
}
