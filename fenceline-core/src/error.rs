//! Evaluation Errors
//!
//! The two validation failures surfaced by geofence evaluation. Everything
//! else (persistence, delivery, network) belongs to external collaborators
//! and never appears here.

use thiserror::Error;

/// Errors returned by distance computation and geofence evaluation.
///
/// Both variants are local validation failures reported synchronously to the
/// caller; neither is retried internally. An error aborts the call before any
/// membership state is mutated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluateError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180]
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Geofence radius is not a positive number of meters
    #[error("geofence {id:?} has non-positive radius {radius_meters}")]
    InvalidGeofence { id: String, radius_meters: f64 },
}
