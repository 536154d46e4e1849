use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::EvaluateError;
use crate::fence::Geofence;
use crate::geo::{distance_meters, GeoPoint};

use super::event::{TransitionEvent, TransitionKind};
use super::state::MembershipState;

/// Membership and transition computation for tracked subjects.
///
/// Holds one [`MembershipState`] per subject id. States for different
/// subjects are fully isolated, so independent subjects may be evaluated in
/// parallel behind separate evaluators; concurrent calls for the *same*
/// subject must be serialized by the caller, or the strict ENTER/EXIT
/// alternation per fence can be violated by racing position reports.
///
/// No I/O, no internal locking, no clock reads. One `evaluate` call runs to
/// completion in O(number of geofences).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeofenceEvaluator {
    subjects: HashMap<String, MembershipState>,
}

impl GeofenceEvaluator {
    /// Create an evaluator with no tracked subjects
    pub fn new() -> Self {
        GeofenceEvaluator::default()
    }

    /// Evaluate one position sample against a snapshot of geofences.
    ///
    /// For each fence, in the order given:
    ///
    /// 1. A fence inactive at `observed_at` is skipped entirely — no
    ///    validation, no state change, no event.
    /// 2. Distance from `point` to the fence center is computed.
    /// 3. The subject is inside iff distance <= radius (closed disk).
    /// 4. On a membership change an ENTER or EXIT event is recorded, subject
    ///    to the fence's transition mask, and the state is updated.
    /// 5. Unchanged membership records nothing, so re-evaluating the same
    ///    sample never re-emits.
    ///
    /// Returned events follow the input fence order.
    ///
    /// # Errors
    ///
    /// [`EvaluateError::InvalidCoordinate`] if `point` or any active fence
    /// center is out of range, [`EvaluateError::InvalidGeofence`] if any
    /// active fence has a non-positive radius. All active fences are
    /// validated before any state is mutated: a failed call leaves the
    /// subject's membership exactly as it was.
    pub fn evaluate(
        &mut self,
        subject_id: &str,
        point: GeoPoint,
        geofences: &[Geofence],
        observed_at: u64,
    ) -> Result<Vec<TransitionEvent>, EvaluateError> {
        point.validate()?;

        // First pass: validate and measure every active fence before any
        // state mutation, so a late validation failure cannot leave
        // membership half-updated.
        let mut measured: Vec<(&Geofence, f64)> = Vec::with_capacity(geofences.len());
        for fence in geofences {
            if !fence.is_active_at(observed_at) {
                continue;
            }
            fence.validate()?;
            let d = distance_meters(&point, &fence.center)?;
            measured.push((fence, d));
        }

        // Second pass: apply transitions.
        let state = self.subjects.entry(subject_id.to_string()).or_default();
        let mut events = Vec::new();
        for (fence, d) in measured {
            let is_inside = d <= fence.radius_meters;
            let was_inside = state.is_inside(&fence.id);
            if is_inside == was_inside {
                continue;
            }

            state.set_inside(&fence.id, is_inside);

            let kind = if is_inside {
                TransitionKind::Enter
            } else {
                TransitionKind::Exit
            };
            if fence.transitions.contains(kind.mask()) {
                events.push(TransitionEvent {
                    geofence_id: fence.id.clone(),
                    kind,
                    at_point: point,
                    distance_meters: d,
                    timestamp: observed_at,
                });
            }
        }

        Ok(events)
    }

    /// Membership state for a subject, if any samples have been evaluated
    pub fn membership(&self, subject_id: &str) -> Option<&MembershipState> {
        self.subjects.get(subject_id)
    }

    /// Drop recorded membership for a fence across all subjects.
    ///
    /// Call when a fence is removed from the registry so that a fence
    /// re-added under the same id starts from outside.
    pub fn forget_geofence(&mut self, geofence_id: &str) {
        for state in self.subjects.values_mut() {
            state.forget(geofence_id);
        }
    }

    /// Stop tracking a subject, dropping all of its membership state
    pub fn remove_subject(&mut self, subject_id: &str) -> bool {
        self.subjects.remove(subject_id).is_some()
    }

    /// Number of subjects with recorded state
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}
