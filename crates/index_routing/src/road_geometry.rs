use serde::{Deserialize, Serialize};

use crate::{geopoint::GeoPoint, types::PointId};

fn default_is_road() -> bool {
    true
}

fn default_speed_kmh() -> f64 {
    50.0
}

/// Geometry and routing attributes of a single road (feature).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadGeometry {
    points: Vec<GeoPoint>,
    #[serde(default)]
    one_way: bool,
    #[serde(default = "default_is_road")]
    is_road: bool,
    #[serde(default = "default_speed_kmh")]
    speed_kmh: f64,
}

impl RoadGeometry {
    pub fn new(points: Vec<GeoPoint>, one_way: bool, speed_kmh: f64) -> Self {
        RoadGeometry {
            points,
            one_way,
            is_road: true,
            speed_kmh,
        }
    }

    /// A feature that is part of the geometry but cannot be routed on.
    pub fn non_road(points: Vec<GeoPoint>) -> Self {
        RoadGeometry {
            points,
            one_way: false,
            is_road: false,
            speed_kmh: 0.0,
        }
    }

    pub fn is_road(&self) -> bool {
        self.is_road
    }

    pub fn is_one_way(&self) -> bool {
        self.one_way
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    pub fn point(&self, point_id: PointId) -> &GeoPoint {
        &self.points[point_id as usize]
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn points_count(&self) -> usize {
        self.points.len()
    }
}
