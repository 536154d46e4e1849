//! Geofence Evaluation
//!
//! This module provides membership and transition computation: given a
//! position sample and a snapshot of geofence definitions, it decides which
//! fences the subject is inside and emits ENTER/EXIT events on changes.
//!
//! # Architecture
//!
//! - **event**: transition event types emitted to sinks
//! - **state**: per-subject membership bookkeeping
//! - **evaluator**: the evaluation algorithm itself
//!
//! Evaluation is pure and deterministic — no I/O, no clock reads, no storage
//! coupling. The caller supplies the observation timestamp and the geofence
//! snapshot; the evaluator owns only the membership state between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use fenceline_core::evaluate::GeofenceEvaluator;
//! use fenceline_core::fence::Geofence;
//! use fenceline_core::geo::GeoPoint;
//!
//! let mut evaluator = GeofenceEvaluator::new();
//! let fences = vec![Geofence::new("g1", GeoPoint::new(37.7749, -122.4194), 100.0)];
//!
//! let events = evaluator.evaluate("device-1", GeoPoint::new(37.7749, -122.4194), &fences, 0)?;
//! // First sample inside the fence: one ENTER event
//! ```

mod event;
mod evaluator;
mod state;

pub use event::{TransitionEvent, TransitionKind};
pub use evaluator::GeofenceEvaluator;
pub use state::MembershipState;
