//! Road-network graph provider.
//!
//! Nodes are `(longitude, latitude)` points; each street segment becomes a
//! pair of arcs weighted by great-circle distance and labelled with the
//! street name.

pub mod geo;
pub mod load;
pub mod network;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaypathError};

pub use geo::haversine;
pub use load::{load_network, parse_network, RoadNetwork};
pub use network::{build_graph, find_street, RoadEdge, RoadGraph};

/// A `(longitude, latitude)` point in degrees.
///
/// Equality and hashing are exact on the bit pattern (with `-0.0` folded into
/// `0.0`), so two coordinates read from the same source compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

impl Coord {
    pub fn new(lon: f64, lat: f64) -> Self {
        Coord {
            lon: lon + 0.0,
            lat: lat + 0.0,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    fn key(&self) -> (u64, u64) {
        // -0.0 + 0.0 == +0.0
        ((self.lon + 0.0).to_bits(), (self.lat + 0.0).to_bits())
    }
}

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Coord {}

impl std::hash::Hash for Coord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lon, self.lat)
    }
}

impl std::str::FromStr for Coord {
    type Err = WaypathError;

    fn from_str(s: &str) -> Result<Self> {
        let (lon, lat) = s
            .split_once(',')
            .ok_or_else(|| WaypathError::malformed("coordinate", format!("expected LON,LAT, got '{}'", s)))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| WaypathError::malformed("coordinate", format!("'{}': {}", s, e)))
        };
        let coord = Coord::new(parse(lon)?, parse(lat)?);
        if !coord.is_finite() {
            return Err(WaypathError::malformed("coordinate", format!("'{}' is not finite", s)));
        }
        Ok(coord)
    }
}
