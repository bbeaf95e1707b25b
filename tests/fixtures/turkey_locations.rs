//! Real Turkish locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap.

use location_planner::location::Position;

/// A named place with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn position(&self) -> Position {
        Position::new(self.lat, self.lng)
    }
}

// ============================================================================
// City centres
// ============================================================================

pub const ANKARA: Place = Place::new("Ankara", 39.925533, 32.866287);
pub const ISTANBUL: Place = Place::new("Istanbul", 41.015137, 28.979530);
pub const IZMIR: Place = Place::new("Izmir", 38.423733, 27.142826);
pub const BURSA: Place = Place::new("Bursa", 40.188528, 29.060964);
pub const ESKISEHIR: Place = Place::new("Eskisehir", 39.766706, 30.525631);
pub const KONYA: Place = Place::new("Konya", 37.874643, 32.493155);
pub const ANTALYA: Place = Place::new("Antalya", 36.896891, 30.713323);
pub const TRABZON: Place = Place::new("Trabzon", 41.002697, 39.716763);

pub const CITIES: &[Place] = &[ISTANBUL, IZMIR, BURSA, ESKISEHIR, KONYA, ANTALYA, TRABZON];

// ============================================================================
// Ankara landmarks (short distances)
// ============================================================================

pub const ANITKABIR: Place = Place::new("Anitkabir", 39.925018, 32.836956);
pub const KIZILAY: Place = Place::new("Kizilay Square", 39.920770, 32.854110);
pub const ANKARA_CASTLE: Place = Place::new("Ankara Castle", 39.941063, 32.864729);
pub const ATAKULE: Place = Place::new("Atakule", 39.885936, 32.855856);

pub const LANDMARKS: &[Place] = &[ANITKABIR, KIZILAY, ANKARA_CASTLE, ATAKULE];
