//! Polyline representation for route geometries.
//!
//! A route is drawn as straight segments between consecutive points, starting
//! at the origin. Encoding for a particular map library happens at the
//! presentation boundary, not here.

use serde::{Deserialize, Serialize};

use crate::haversine::path_length_km;
use crate::location::Position;

/// Route geometry: the origin followed by each stop, joined by straight segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Position>,
}

impl Polyline {
    pub fn new(points: Vec<Position>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Position> {
        self.points
    }

    /// Great-circle length of all segments.
    pub fn length_km(&self) -> f64 {
        path_length_km(&self.points)
    }

    /// A line needs at least two points to be drawn.
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 1
    }
}

impl FromIterator<Position> for Polyline {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
