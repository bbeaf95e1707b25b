//! location-planner core
//!
//! Persisted, named map locations and a straight-line visiting order from the
//! user's current position.

pub mod traits;
pub mod error;
pub mod config;
pub mod location;
pub mod blob;
pub mod store;
pub mod haversine;
pub mod polyline;
pub mod origin;
pub mod planner;
