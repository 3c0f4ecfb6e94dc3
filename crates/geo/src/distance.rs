//! Great-circle distance using the spherical law of cosines.
//!
//! The central angle is converted to distance through the nautical-mile chain:
//! one degree of arc is 60 nautical miles, one nautical mile is 1.1515 statute
//! miles, one statute mile is 1.609344 km.

use crate::GeoPoint;

/// Nautical miles per degree of arc.
pub const NAUTICAL_MILES_PER_DEGREE: f64 = 60.0;

/// Statute miles per nautical mile, as used by the distance chain.
pub const MILES_PER_NAUTICAL_MILE: f64 = 1.1515;

/// Kilometers per statute mile.
pub const KM_PER_MILE: f64 = 1.609344;

/// Calculates the great-circle distance between two points in kilometers.
///
/// Identical points yield exactly `0.0`. The cosine of the central angle is
/// clamped to `[-1, 1]` so rounding never pushes `acos` out of its domain.
///
/// # Example
/// ```
/// use servicesearch_geo::{distance_km, GeoPoint};
///
/// let stockholm = GeoPoint::new(59.3293, 18.0686);
/// assert_eq!(distance_km(&stockholm, &stockholm), 0.0);
/// ```
#[inline]
pub fn distance_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    distance_miles(from, to) * KM_PER_MILE
}

/// Calculates the great-circle distance between two points in statute miles.
#[inline]
pub fn distance_miles(from: &GeoPoint, to: &GeoPoint) -> f64 {
    central_angle_degrees(from, to) * NAUTICAL_MILES_PER_DEGREE * MILES_PER_NAUTICAL_MILE
}

/// Central angle between two points, in degrees.
#[inline]
fn central_angle_degrees(from: &GeoPoint, to: &GeoPoint) -> f64 {
    if from == to {
        return 0.0;
    }

    let rlat1 = from.latitude.to_radians();
    let rlat2 = to.latitude.to_radians();
    let rtheta = (from.longitude - to.longitude).to_radians();

    let cos_angle = rlat1.sin() * rlat2.sin() + rlat1.cos() * rlat2.cos() * rtheta.cos();

    cos_angle.clamp(-1.0, 1.0).acos().to_degrees()
}
