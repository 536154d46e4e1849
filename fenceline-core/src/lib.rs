//! Fenceline Core
//!
//! Platform-independent geofence evaluation: great-circle distance,
//! per-subject membership, and ENTER/EXIT transition events for circular
//! geofences. Pure computation only — no I/O, no async, no storage or
//! network coupling — so the same code runs in native services, mobile
//! bindings, and WASM.
//!
//! # Architecture
//!
//! - **geo**: latitude/longitude value type and haversine distance
//! - **fence**: geofence definitions, activation windows, transition masks
//! - **evaluate**: membership state and the transition evaluator
//! - **registry**: in-memory geofence store (add/update/remove/list)
//! - **sink**: transition consumers (log facade, bounded activity log)
//! - **tracker**: registry + evaluator + activity log behind one call
//! - **error**: the two validation failures evaluation can surface
//!
//! # Usage
//!
//! For the one-call API:
//!
//! ```rust,ignore
//! use fenceline_core::{Geofence, GeofenceTracker, GeoPoint, PositionSample};
//!
//! let mut tracker = GeofenceTracker::new();
//! tracker.registry_mut().add_or_update(
//!     Geofence::new("office", GeoPoint::new(37.7749, -122.4194), 100.0),
//! )?;
//!
//! for (subject, sample) in position_source {
//!     let events = tracker.process_position(&subject, sample)?;
//!     // forward events to notification / persistence
//! }
//! ```
//!
//! For direct control over state and fence snapshots:
//!
//! ```rust,ignore
//! use fenceline_core::{GeofenceEvaluator, GeoPoint};
//!
//! let mut evaluator = GeofenceEvaluator::new();
//! let events = evaluator.evaluate("device-1", point, &fences, observed_at)?;
//! ```
//!
//! # Concurrency
//!
//! Evaluation is single-threaded and synchronous. Subjects are isolated
//! from each other; calls for the same subject must be serialized by the
//! caller (a per-subject queue or lock preserves the strict ENTER/EXIT
//! alternation per fence).

pub mod error;
pub mod evaluate;
pub mod fence;
pub mod geo;
pub mod registry;
pub mod sink;
pub mod tracker;

pub use error::EvaluateError;
pub use evaluate::{GeofenceEvaluator, MembershipState, TransitionEvent, TransitionKind};
pub use fence::{Geofence, TransitionMask};
pub use geo::{distance_meters, GeoPoint, EARTH_RADIUS_METERS};
pub use registry::GeofenceRegistry;
pub use sink::{ActivityEntry, ActivityLog, LogSink, TransitionSink, DEFAULT_ACTIVITY_CAPACITY};
pub use tracker::{GeofenceTracker, PositionSample};
