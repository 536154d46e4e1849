//! Geofence Registry
//!
//! In-memory store of geofence definitions, keyed by id and kept in
//! insertion order. The evaluator treats the registry contents as a
//! read-only snapshot per call; persistence of definitions beyond the
//! process is the embedding application's concern.

use serde::{Deserialize, Serialize};

use crate::error::EvaluateError;
use crate::fence::Geofence;

/// Insertion-ordered, id-unique collection of geofences.
///
/// Definitions are validated at admission, so evaluation over registry
/// contents can only fail on the position sample itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeofenceRegistry {
    fences: Vec<Geofence>,
}

impl GeofenceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        GeofenceRegistry::default()
    }

    /// Add a fence, or replace the existing fence with the same id in place.
    ///
    /// Replacement keeps the fence's position in the evaluation order.
    ///
    /// # Errors
    ///
    /// Rejects fences with a non-positive radius or an out-of-range center;
    /// the registry is unchanged on error.
    pub fn add_or_update(&mut self, fence: Geofence) -> Result<(), EvaluateError> {
        fence.validate()?;

        if let Some(existing) = self.fences.iter_mut().find(|f| f.id == fence.id) {
            *existing = fence;
        } else {
            self.fences.push(fence);
        }
        Ok(())
    }

    /// Remove a fence by id, returning whether it was present
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.fences.len();
        self.fences.retain(|f| f.id != id);
        self.fences.len() != before
    }

    /// Remove all fences
    pub fn clear(&mut self) {
        self.fences.clear();
    }

    /// Look up a fence by id
    pub fn get(&self, id: &str) -> Option<&Geofence> {
        self.fences.iter().find(|f| f.id == id)
    }

    /// All fences in evaluation order
    pub fn fences(&self) -> &[Geofence] {
        &self.fences
    }

    /// Number of fences active at the given timestamp
    pub fn active_at(&self, timestamp: u64) -> usize {
        self.fences
            .iter()
            .filter(|f| f.is_active_at(timestamp))
            .count()
    }

    /// Total number of fences
    pub fn len(&self) -> usize {
        self.fences.len()
    }

    /// Whether the registry holds no fences
    pub fn is_empty(&self) -> bool {
        self.fences.is_empty()
    }
}
