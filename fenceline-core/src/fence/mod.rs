//! Geofence Definitions
//!
//! This module provides the circular geofence type used by the evaluator.
//! A geofence is a closed disk on the earth's surface that triggers
//! transition events when a tracked subject crosses its boundary.
//!
//! # Features
//!
//! - Circular zones (center point plus radius in meters)
//! - Optional activation window (a fence only fires while active)
//! - Per-fence transition mask (report ENTER, EXIT, or both)
//!
//! # Example
//!
//! ```rust,ignore
//! use fenceline_core::fence::{Geofence, TransitionMask};
//! use fenceline_core::geo::GeoPoint;
//!
//! let fence = Geofence::new("office", GeoPoint::new(37.7749, -122.4194), 100.0)
//!     .with_transitions(TransitionMask::ENTER);
//! assert!(fence.is_active_at(0));
//! ```

mod zone;

pub use zone::*;
