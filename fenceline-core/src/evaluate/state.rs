use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-geofence inside/outside booleans for one tracked subject.
///
/// A fence not yet observed defaults to outside. The map is owned by the
/// evaluator and mutated only by [`evaluate`](super::GeofenceEvaluator::evaluate);
/// it lives for the subject's tracked lifetime (one device or session).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MembershipState {
    inside: HashMap<String, bool>,
}

impl MembershipState {
    /// Create an empty state (everything outside)
    pub fn new() -> Self {
        MembershipState::default()
    }

    /// Whether the subject is currently inside the given fence
    pub fn is_inside(&self, geofence_id: &str) -> bool {
        self.inside.get(geofence_id).copied().unwrap_or(false)
    }

    pub(crate) fn set_inside(&mut self, geofence_id: &str, inside: bool) {
        self.inside.insert(geofence_id.to_string(), inside);
    }

    /// Drop recorded membership for a fence, resetting it to outside
    pub fn forget(&mut self, geofence_id: &str) {
        self.inside.remove(geofence_id);
    }

    /// Ids of all fences the subject is currently inside
    pub fn inside_ids(&self) -> impl Iterator<Item = &str> {
        self.inside
            .iter()
            .filter(|(_, inside)| **inside)
            .map(|(id, _)| id.as_str())
    }

    /// Number of fences with recorded membership
    pub fn len(&self) -> usize {
        self.inside.len()
    }

    /// Whether no membership has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.inside.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_outside() {
        let state = MembershipState::new();
        assert!(!state.is_inside("never-seen"));
        assert!(state.is_empty());
    }

    #[test]
    fn test_set_and_query() {
        let mut state = MembershipState::new();
        state.set_inside("g1", true);
        state.set_inside("g2", false);

        assert!(state.is_inside("g1"));
        assert!(!state.is_inside("g2"));
        assert_eq!(state.len(), 2);

        let inside: Vec<&str> = state.inside_ids().collect();
        assert_eq!(inside, vec!["g1"]);
    }

    #[test]
    fn test_forget_resets_to_outside() {
        let mut state = MembershipState::new();
        state.set_inside("g1", true);
        state.forget("g1");
        assert!(!state.is_inside("g1"));
        assert!(state.is_empty());
    }
}
