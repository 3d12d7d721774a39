use crate::{geopoint::GeoPoint, road_point::RoadPoint};

/// Result of matching a coordinate to the road network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    pub road_point: RoadPoint,
    /// Coordinates of `road_point`.
    pub coordinates: GeoPoint,
    /// Meters between the query and `coordinates`.
    pub distance: f64,
}

impl Snap {
    pub fn new(road_point: RoadPoint, coordinates: GeoPoint, distance: f64) -> Self {
        Snap {
            road_point,
            coordinates,
            distance,
        }
    }
}
