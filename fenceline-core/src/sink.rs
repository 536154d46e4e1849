//! Transition Sinks
//!
//! Consumers of emitted transition events. The evaluator hands events to a
//! sink and forgets them; delivery, retry, and persistence semantics belong
//! to the sink implementation, not to this crate.
//!
//! Two implementations are provided: [`LogSink`] forwards events to the
//! `log` facade, and [`ActivityLog`] keeps a bounded newest-first record of
//! recent transitions for display.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::evaluate::{TransitionEvent, TransitionKind};

/// Receiver of transition events for one or more subjects.
pub trait TransitionSink {
    /// Called once per emitted event, in emission order
    fn on_transition(&mut self, subject_id: &str, event: &TransitionEvent);
}

/// Sink that forwards transitions to the `log` facade at info level.
///
/// The facade itself performs no I/O; the embedding binary chooses and
/// configures the logger backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TransitionSink for LogSink {
    fn on_transition(&mut self, subject_id: &str, event: &TransitionEvent) {
        let verb = match event.kind {
            TransitionKind::Enter => "entered",
            TransitionKind::Exit => "exited",
        };
        log::info!(
            "subject {} {} geofence {} at ({}, {}), {:.1} m from center",
            subject_id,
            verb,
            event.geofence_id,
            event.at_point.latitude,
            event.at_point.longitude,
            event.distance_meters
        );
    }
}

/// One recorded transition in the activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// Subject the transition belongs to
    pub subject_id: String,
    /// The transition itself
    pub event: TransitionEvent,
}

impl ActivityEntry {
    /// Human-readable one-line description
    pub fn describe(&self) -> String {
        let verb = match self.event.kind {
            TransitionKind::Enter => "entered",
            TransitionKind::Exit => "exited",
        };
        format!(
            "{} {} geofence {} ({:.1} m from center)",
            self.subject_id, verb, self.event.geofence_id, self.event.distance_meters
        )
    }
}

/// Default number of entries kept by [`ActivityLog`]
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 10;

/// Bounded record of recent transitions, newest first.
///
/// When full, recording a new entry drops the oldest one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        ActivityLog::new()
    }
}

impl ActivityLog {
    /// Create a log holding [`DEFAULT_ACTIVITY_CAPACITY`] entries
    pub fn new() -> Self {
        ActivityLog::with_capacity(DEFAULT_ACTIVITY_CAPACITY)
    }

    /// Create a log holding at most `capacity` entries (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        ActivityLog {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Entries newest first
    pub fn entries(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    /// Most recent entry, if any
    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.entries.front()
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl TransitionSink for ActivityLog {
    fn on_transition(&mut self, subject_id: &str, event: &TransitionEvent) {
        self.entries.push_front(ActivityEntry {
            subject_id: subject_id.to_string(),
            event: event.clone(),
        });
        self.entries.truncate(self.capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;

    fn event(id: &str, kind: TransitionKind, timestamp: u64) -> TransitionEvent {
        TransitionEvent {
            geofence_id: id.to_string(),
            kind,
            at_point: GeoPoint::new(37.7749, -122.4194),
            distance_meters: 42.0,
            timestamp,
        }
    }

    #[test]
    fn test_activity_log_newest_first() {
        let mut actlog = ActivityLog::new();
        actlog.on_transition("dev", &event("g1", TransitionKind::Enter, 100));
        actlog.on_transition("dev", &event("g1", TransitionKind::Exit, 200));

        assert_eq!(actlog.len(), 2);
        assert_eq!(actlog.latest().unwrap().event.timestamp, 200);

        let timestamps: Vec<u64> = actlog.entries().map(|e| e.event.timestamp).collect();
        assert_eq!(timestamps, vec![200, 100]);
    }

    #[test]
    fn test_activity_log_capacity_bound() {
        let mut actlog = ActivityLog::with_capacity(3);
        for i in 0..5 {
            actlog.on_transition("dev", &event("g1", TransitionKind::Enter, i));
        }

        assert_eq!(actlog.len(), 3);
        // Oldest entries dropped
        let timestamps: Vec<u64> = actlog.entries().map(|e| e.event.timestamp).collect();
        assert_eq!(timestamps, vec![4, 3, 2]);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut actlog = ActivityLog::with_capacity(0);
        actlog.on_transition("dev", &event("g1", TransitionKind::Enter, 1));
        assert_eq!(actlog.len(), 1);
    }

    #[test]
    fn test_describe() {
        let entry = ActivityEntry {
            subject_id: "dev-1".to_string(),
            event: event("office", TransitionKind::Enter, 0),
        };
        assert_eq!(
            entry.describe(),
            "dev-1 entered geofence office (42.0 m from center)"
        );

        let entry = ActivityEntry {
            subject_id: "dev-1".to_string(),
            event: event("office", TransitionKind::Exit, 0),
        };
        assert!(entry.describe().contains("exited"));
    }

    #[test]
    fn test_clear() {
        let mut actlog = ActivityLog::new();
        actlog.on_transition("dev", &event("g1", TransitionKind::Enter, 1));
        actlog.clear();
        assert!(actlog.is_empty());
        assert!(actlog.latest().is_none());
    }
}
