//! Geofence Tracking
//!
//! High-level processor wiring a registry, an evaluator, and an activity
//! log together behind a single position-update call. This is the simple
//! API for applications that poll or stream device positions and want
//! transition events out.
//!
//! A reactive location stream maps onto this by calling
//! [`GeofenceTracker::process_position`] once per sample; per-subject
//! ordering is the caller's job (one queue or lock per subject).
//!
//! # Example
//!
//! ```rust,ignore
//! use fenceline_core::tracker::{GeofenceTracker, PositionSample};
//! use fenceline_core::fence::Geofence;
//! use fenceline_core::geo::GeoPoint;
//!
//! let mut tracker = GeofenceTracker::new();
//! tracker.registry_mut().add_or_update(
//!     Geofence::new("office", GeoPoint::new(37.7749, -122.4194), 100.0),
//! )?;
//!
//! let sample = PositionSample::new(GeoPoint::new(37.7749, -122.4194), 1700000000000);
//! let events = tracker.process_position("device-1", sample)?;
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::EvaluateError;
use crate::evaluate::{GeofenceEvaluator, MembershipState, TransitionEvent};
use crate::geo::GeoPoint;
use crate::registry::GeofenceRegistry;
use crate::sink::{ActivityLog, TransitionSink};

/// One position fix from a location source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSample {
    /// Reported position
    pub point: GeoPoint,

    /// Horizontal accuracy of the fix in meters, if the source reports it.
    /// Carried through for sinks and display; no filtering is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_meters: Option<f64>,

    /// Time of observation (ms since epoch)
    pub timestamp: u64,
}

impl PositionSample {
    /// Create a sample without accuracy information
    pub fn new(point: GeoPoint, timestamp: u64) -> Self {
        PositionSample {
            point,
            accuracy_meters: None,
            timestamp,
        }
    }

    /// Attach the source's reported accuracy
    pub fn with_accuracy(mut self, accuracy_meters: f64) -> Self {
        self.accuracy_meters = Some(accuracy_meters);
        self
    }
}

/// Registry, evaluator, and activity log behind one position-update call.
#[derive(Debug, Clone, Default)]
pub struct GeofenceTracker {
    registry: GeofenceRegistry,
    evaluator: GeofenceEvaluator,
    activity: ActivityLog,
}

impl GeofenceTracker {
    /// Create a tracker with an empty registry
    pub fn new() -> Self {
        GeofenceTracker::default()
    }

    /// Create a tracker whose activity log keeps `capacity` entries
    pub fn with_activity_capacity(capacity: usize) -> Self {
        GeofenceTracker {
            registry: GeofenceRegistry::new(),
            evaluator: GeofenceEvaluator::new(),
            activity: ActivityLog::with_capacity(capacity),
        }
    }

    /// Evaluate one position sample for a subject.
    ///
    /// Runs the evaluator over the current registry snapshot, records any
    /// transitions in the activity log, and returns them in fence order.
    ///
    /// # Errors
    ///
    /// Only [`EvaluateError::InvalidCoordinate`] for an out-of-range sample:
    /// registry contents were validated at admission.
    pub fn process_position(
        &mut self,
        subject_id: &str,
        sample: PositionSample,
    ) -> Result<Vec<TransitionEvent>, EvaluateError> {
        log::debug!(
            "position for {}: ({}, {}) accuracy {:?}",
            subject_id,
            sample.point.latitude,
            sample.point.longitude,
            sample.accuracy_meters
        );

        let events = self.evaluator.evaluate(
            subject_id,
            sample.point,
            self.registry.fences(),
            sample.timestamp,
        )?;

        for event in &events {
            self.activity.on_transition(subject_id, event);
        }
        Ok(events)
    }

    /// Remove a fence and forget its membership across all subjects, so a
    /// fence re-added under the same id starts from outside.
    pub fn remove_geofence(&mut self, id: &str) -> bool {
        let removed = self.registry.remove(id);
        if removed {
            self.evaluator.forget_geofence(id);
        }
        removed
    }

    /// Stop tracking a subject
    pub fn remove_subject(&mut self, subject_id: &str) -> bool {
        self.evaluator.remove_subject(subject_id)
    }

    /// The fence registry
    pub fn registry(&self) -> &GeofenceRegistry {
        &self.registry
    }

    /// Mutable access to the fence registry
    pub fn registry_mut(&mut self) -> &mut GeofenceRegistry {
        &mut self.registry
    }

    /// Membership state for a subject, if any samples have been processed
    pub fn membership(&self, subject_id: &str) -> Option<&MembershipState> {
        self.evaluator.membership(subject_id)
    }

    /// Recent transitions, newest first
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Convert to a map for a status display or API response
    pub fn to_status_map(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();

        map.insert(
            "geofences".to_string(),
            serde_json::json!(self.registry.len()),
        );
        map.insert(
            "subjects".to_string(),
            serde_json::json!(self.evaluator.subject_count()),
        );

        let recent: Vec<String> = self.activity.entries().map(|e| e.describe()).collect();
        map.insert("recentActivity".to_string(), serde_json::json!(recent));

        map
    }
}
