//! Location records and the values used to create and edit them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::traits::Located;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Rejects coordinates outside lat [-90, 90] / lng [-180, 180], and NaN.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let lat_ok = (-90.0..=90.0).contains(&self.lat);
        let lng_ok = (-180.0..=180.0).contains(&self.lng);
        if lat_ok && lng_ok {
            Ok(())
        } else {
            Err(ValidationError::CoordinateOutOfRange {
                lat: self.lat,
                lng: self.lng,
            })
        }
    }
}

impl From<(f64, f64)> for Position {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// A persisted point of interest.
///
/// Serialized flat as `{id, name, lat, lng, color}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Display-only; never validated.
    #[serde(default)]
    pub color: String,
}

impl Location {
    pub fn position(&self) -> Position {
        Position::new(self.lat, self.lng)
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.lat = position.lat;
        self.lng = position.lng;
    }
}

impl Located for Location {
    fn position(&self) -> Position {
        Location::position(self)
    }
}

/// Fields to merge into an existing location. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub position: Option<Position>,
}

impl LocationPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none() && self.position.is_none()
    }
}

/// Trims a display name, rejecting names that are empty afterwards.
pub(crate) fn normalize_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Fresh random identifier for a new location.
pub(crate) fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
