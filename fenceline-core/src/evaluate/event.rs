use serde::{Deserialize, Serialize};

use crate::fence::TransitionMask;
use crate::geo::GeoPoint;

/// Direction of a boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Subject moved from outside the fence to inside
    Enter,
    /// Subject moved from inside the fence to outside
    Exit,
}

impl TransitionKind {
    /// The opposite crossing direction
    pub fn inverse(&self) -> TransitionKind {
        match self {
            TransitionKind::Enter => TransitionKind::Exit,
            TransitionKind::Exit => TransitionKind::Enter,
        }
    }

    /// The mask bit matching this kind
    pub fn mask(&self) -> TransitionMask {
        match self {
            TransitionKind::Enter => TransitionMask::ENTER,
            TransitionKind::Exit => TransitionMask::EXIT,
        }
    }
}

/// A single boundary-crossing event.
///
/// Produced by the evaluator when a subject's membership in a fence changes;
/// consumed by a [`TransitionSink`](crate::sink::TransitionSink). Events are
/// not stored by the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionEvent {
    /// Id of the fence whose boundary was crossed
    pub geofence_id: String,

    /// Crossing direction
    pub kind: TransitionKind,

    /// The position sample that triggered the crossing
    pub at_point: GeoPoint,

    /// Distance from the sample to the fence center in meters
    pub distance_meters: f64,

    /// Observation timestamp (ms since epoch)
    pub timestamp: u64,
}
