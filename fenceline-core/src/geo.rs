//! Geographic Primitives
//!
//! Latitude/longitude value type and great-circle distance on a
//! spherical-earth approximation.
//!
//! The haversine distance is accurate to within the spherical approximation
//! error (about 0.5%), which is fine for geofence radii of 10 meters and up.

use serde::{Deserialize, Serialize};

use crate::error::EvaluateError;

/// Mean earth radius in meters (spherical approximation)
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A WGS-84 style latitude/longitude pair in decimal degrees.
///
/// Latitude must lie in [-90, 90] and longitude in [-180, 180]; construction
/// does not enforce this, [`distance_meters`] and the evaluator do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    /// Latitude in decimal degrees, positive north
    pub latitude: f64,
    /// Longitude in decimal degrees, positive east
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point from decimal degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    /// Check that both coordinates are within valid range
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    pub(crate) fn validate(&self) -> Result<(), EvaluateError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(EvaluateError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// Great-circle distance between two points in meters.
///
/// Haversine formula on a sphere of radius [`EARTH_RADIUS_METERS`].
/// Symmetric in its arguments; zero iff the points are equal.
///
/// Returns [`EvaluateError::InvalidCoordinate`] if either point is outside
/// the valid latitude/longitude range.
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> Result<f64, EvaluateError> {
    a.validate()?;
    b.validate()?;

    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Ok(EARTH_RADIUS_METERS * c)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SF: GeoPoint = GeoPoint {
        latitude: 37.7749,
        longitude: -122.4194,
    };

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(distance_meters(&SF, &SF).unwrap(), 0.0);

        let equator = GeoPoint::new(0.0, 0.0);
        assert_eq!(distance_meters(&equator, &equator).unwrap(), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let london = GeoPoint::new(51.5074, -0.1278);
        let d1 = distance_meters(&SF, &london).unwrap();
        let d2 = distance_meters(&london, &SF).unwrap();
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_known_distance() {
        // 0.0011 degrees of latitude is roughly 122 m
        let nearby = GeoPoint::new(37.7760, -122.4194);
        let d = distance_meters(&SF, &nearby).unwrap();
        assert!((d - 122.3).abs() < 1.0, "distance was {}", d);
    }

    #[test]
    fn test_long_distance() {
        // SF to London is about 8616 km; allow 1% for the spherical model
        let london = GeoPoint::new(51.5074, -0.1278);
        let d = distance_meters(&SF, &london).unwrap();
        assert!((d - 8_616_000.0).abs() < 86_000.0, "distance was {}", d);
    }

    #[test]
    fn test_monotonic_in_separation() {
        let near = GeoPoint::new(37.7755, -122.4194);
        let far = GeoPoint::new(37.7800, -122.4194);
        let d_near = distance_meters(&SF, &near).unwrap();
        let d_far = distance_meters(&SF, &far).unwrap();
        assert!(d_near < d_far);
    }

    #[test]
    fn test_invalid_latitude_rejected() {
        let bad = GeoPoint::new(95.0, 0.0);
        let err = distance_meters(&bad, &SF).unwrap_err();
        assert_eq!(
            err,
            EvaluateError::InvalidCoordinate {
                latitude: 95.0,
                longitude: 0.0
            }
        );
    }

    #[test]
    fn test_invalid_longitude_rejected() {
        let bad = GeoPoint::new(0.0, -181.0);
        assert!(distance_meters(&SF, &bad).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let bad = GeoPoint::new(f64::NAN, 0.0);
        assert!(!bad.is_valid());
        assert!(distance_meters(&bad, &SF).is_err());
    }

    #[test]
    fn test_boundary_coordinates_valid() {
        let pole = GeoPoint::new(90.0, 180.0);
        assert!(pole.is_valid());
        assert!(distance_meters(&pole, &SF).is_ok());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(SF).unwrap();
        assert_eq!(json["latitude"], 37.7749);
        assert_eq!(json["longitude"], -122.4194);
    }
}
