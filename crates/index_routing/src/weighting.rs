use crate::{
    constants::{DEFAULT_MAX_SPEED_KMH, KMH_TO_MPS, MAX_WEIGHT},
    geopoint::GeoPoint,
    road_geometry::RoadGeometry,
    types::PointId,
};

/// Travel cost in seconds.
pub type Weight = f64;

pub trait EdgeEstimator {
    /// Cost of driving along `road` between two of its points. The order of the
    /// points does not matter, one-way restrictions are checked by the graph.
    fn calc_edges_weight(&self, road: &RoadGeometry, point_from: PointId, point_to: PointId)
    -> Weight;

    /// Lower bound of the cost between two coordinates.
    fn calc_heuristic(&self, from: &GeoPoint, to: &GeoPoint) -> Weight;
}

pub struct CarEstimator {
    max_speed_kmh: f64,
}

impl Default for CarEstimator {
    fn default() -> Self {
        CarEstimator::new(DEFAULT_MAX_SPEED_KMH)
    }
}

impl CarEstimator {
    pub fn new(max_speed_kmh: f64) -> Self {
        CarEstimator { max_speed_kmh }
    }

    pub fn max_speed_kmh(&self) -> f64 {
        self.max_speed_kmh
    }
}

impl EdgeEstimator for CarEstimator {
    fn calc_edges_weight(
        &self,
        road: &RoadGeometry,
        point_from: PointId,
        point_to: PointId,
    ) -> Weight {
        let start = point_from.min(point_to);
        let finish = point_from.max(point_to);

        let speed_mps = road.speed_kmh().min(self.max_speed_kmh) * KMH_TO_MPS;
        if speed_mps <= 0.0 {
            return MAX_WEIGHT;
        }

        (start..finish)
            .map(|point_id| {
                road.point(point_id)
                    .haversine_distance(road.point(point_id + 1))
            })
            .sum::<f64>()
            / speed_mps
    }

    fn calc_heuristic(&self, from: &GeoPoint, to: &GeoPoint) -> Weight {
        from.haversine_distance(to) / (self.max_speed_kmh * KMH_TO_MPS)
    }
}
