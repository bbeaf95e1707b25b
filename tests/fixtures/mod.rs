//! Test fixtures for location-planner.
//!
//! Provides realistic test data including:
//! - Real Turkish city centres and Ankara landmarks
//! - Helpers for building stores and stored locations

#![allow(dead_code)]

pub mod turkey_locations;

pub use turkey_locations::*;
