//! Great-circle distance on a sphere

use super::Coord;

/// Haversine distance between two `(longitude, latitude)` points in degrees.
///
/// The result is in the unit of `radius` (kilometres for the Earth radius).
pub fn haversine(a: Coord, b: Coord, radius: f64) -> f64 {
    let (phi1, phi2) = (a.lat.to_radians(), b.lat.to_radians());
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * radius * h.sqrt().atan2((1.0 - h).max(0.0).sqrt())
}
