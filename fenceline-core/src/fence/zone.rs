use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::EvaluateError;
use crate::geo::GeoPoint;

bitflags! {
    /// Which transition kinds a geofence reports.
    ///
    /// Filters reporting only: membership state always updates on a boundary
    /// crossing, so a fence masked to ENTER may legitimately report two
    /// ENTERs in a row (the EXIT between them was suppressed, not absent).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TransitionMask: u8 {
        /// Report transitions from outside to inside
        const ENTER = 0b01;
        /// Report transitions from inside to outside
        const EXIT = 0b10;
        /// Report both transition kinds
        const BOTH = Self::ENTER.bits() | Self::EXIT.bits();
    }
}

impl Serialize for TransitionMask {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for TransitionMask {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

impl Default for TransitionMask {
    fn default() -> Self {
        TransitionMask::BOTH
    }
}

/// A circular geofence region.
///
/// Immutable once created; replace it in the registry to change it.
/// The boundary counts as inside (closed disk).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geofence {
    /// Unique identifier
    pub id: String,

    /// Center of the circular region
    pub center: GeoPoint,

    /// Radius in meters, must be positive
    pub radius_meters: f64,

    /// Start of the activation window (ms since epoch), unbounded if unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_from: Option<u64>,

    /// End of the activation window (ms since epoch), unbounded if unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_to: Option<u64>,

    /// Which transitions this fence reports
    #[serde(default)]
    pub transitions: TransitionMask,
}

impl Geofence {
    /// Create an always-active geofence that reports both transition kinds
    pub fn new(id: impl Into<String>, center: GeoPoint, radius_meters: f64) -> Self {
        Geofence {
            id: id.into(),
            center,
            radius_meters,
            active_from: None,
            active_to: None,
            transitions: TransitionMask::BOTH,
        }
    }

    /// Set the activation window
    pub fn with_window(mut self, active_from: Option<u64>, active_to: Option<u64>) -> Self {
        self.active_from = active_from;
        self.active_to = active_to;
        self
    }

    /// Set the transition mask
    pub fn with_transitions(mut self, transitions: TransitionMask) -> Self {
        self.transitions = transitions;
        self
    }

    /// Whether the fence is active at the given timestamp (ms since epoch)
    ///
    /// Active iff `active_from <= timestamp <= active_to`, with either unset
    /// bound treated as unbounded.
    pub fn is_active_at(&self, timestamp: u64) -> bool {
        if let Some(from) = self.active_from {
            if timestamp < from {
                return false;
            }
        }
        if let Some(to) = self.active_to {
            if timestamp > to {
                return false;
            }
        }
        true
    }

    /// Validate radius and center coordinates
    pub fn validate(&self) -> Result<(), EvaluateError> {
        // NaN radius fails the comparison and is rejected too
        if !(self.radius_meters > 0.0) {
            return Err(EvaluateError::InvalidGeofence {
                id: self.id.clone(),
                radius_meters: self.radius_meters,
            });
        }
        self.center.validate()
    }
}
