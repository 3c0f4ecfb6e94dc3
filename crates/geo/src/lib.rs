//! Geospatial primitives for Service Search.
//!
//! This crate provides:
//! - The [`GeoPoint`] type carried by every catalog document and query
//! - Great-circle distance via the spherical law of cosines
//! - Coordinate range validation
//!
//! # Example
//!
//! ```
//! use servicesearch_geo::{distance_km, GeoPoint};
//!
//! let stockholm = GeoPoint::new(59.3293, 18.0686);
//! let gothenburg = GeoPoint::new(57.7089, 11.9746);
//!
//! let km = distance_km(&stockholm, &gothenburg);
//! assert!((km - 398.0).abs() < 5.0);
//! ```

mod distance;
mod error;

pub use distance::{
    distance_km, distance_miles, KM_PER_MILE, MILES_PER_NAUTICAL_MILE, NAUTICAL_MILES_PER_DEGREE,
};
pub use error::{GeoError, GeoErrorCode, Result};

use serde::{Deserialize, Serialize};

/// A geographic point in degrees.
///
/// Serialized as `{"lat": .., "lng": ..}`, the shape used by the catalog feed
/// and the search response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    #[serde(rename = "lng", alias = "longitude")]
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new point.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if both components are finite and within range.
    ///
    /// Southern and western hemisphere points (negative components) are valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Checks the point and reports which component is out of range.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(GeoError::InvalidCoordinate(format!(
                "latitude {} is outside [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(GeoError::InvalidCoordinate(format!(
                "longitude {} is outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
