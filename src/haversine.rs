//! Great-circle distance helpers.
//!
//! Straight-line distance on a spherical Earth. Ignores roads entirely.

use crate::location::Position;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
///
/// The haversine term is clamped to `[0, 1]` so rounding near identical or
/// antipodal points cannot push `sqrt`/`asin` out of their domain.
pub fn distance_km(from: Position, to: Position) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Total length of an ordered path in kilometers.
///
/// Zero for paths with fewer than two points.
pub fn path_length_km(points: &[Position]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance_km(pair[0], pair[1]))
        .sum()
}
