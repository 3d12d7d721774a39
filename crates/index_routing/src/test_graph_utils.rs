#[cfg(test)]
pub mod test_graph {
    use crate::{
        geopoint::GeoPoint,
        road_geometry::RoadGeometry,
        road_graph::RoadGraph,
        road_point::RoadPoint,
        types::PointId,
        weighting::{EdgeEstimator, Weight},
    };

    /// Every road segment costs `50 / speed_kmh`, one per segment at 50 km/h.
    pub struct TestEstimator;

    impl EdgeEstimator for TestEstimator {
        fn calc_edges_weight(
            &self,
            road: &RoadGeometry,
            point_from: PointId,
            point_to: PointId,
        ) -> Weight {
            point_from.abs_diff(point_to) as f64 * 50.0 / road.speed_kmh()
        }

        fn calc_heuristic(&self, _from: &GeoPoint, _to: &GeoPoint) -> Weight {
            0.0
        }
    }

    fn line(from: (f64, f64), to: (f64, f64), points: usize) -> Vec<GeoPoint> {
        let steps = (points - 1) as f64;
        (0..points)
            .map(|i| {
                let t = i as f64 / steps;
                GeoPoint::new(
                    from.0 + (to.0 - from.0) * t,
                    from.1 + (to.1 - from.1) * t,
                )
            })
            .collect()
    }

    /// A single two-way road of five points with joints at both ends.
    ///
    /// ```text
    ///  J0 --- 1 --- 2 --- 3 --- J1
    /// ```
    pub fn create_single_road_graph() -> RoadGraph<TestEstimator> {
        RoadGraph::build(
            vec![RoadGeometry::new(line((0.0, 0.0), (0.0, 0.04), 5), false, 50.0)],
            vec![vec![RoadPoint::new(0, 0)], vec![RoadPoint::new(0, 4)]],
            TestEstimator,
        )
        .unwrap()
    }

    /// Road 0 is two-way and goes west to east, road 1 is one-way and goes
    /// south to north. Both have five points and cross at their point 2.
    ///
    /// ```text
    ///              J3
    ///              ^
    ///  J0 -------- J4 -------- J1
    ///              ^
    ///              J2
    /// ```
    pub fn create_cross_graph() -> RoadGraph<TestEstimator> {
        RoadGraph::build(
            vec![
                RoadGeometry::new(line((0.0, 0.0), (0.0, 0.04), 5), false, 50.0),
                RoadGeometry::new(line((-0.02, 0.02), (0.02, 0.02), 5), true, 50.0),
            ],
            vec![
                vec![RoadPoint::new(0, 0)],
                vec![RoadPoint::new(0, 4)],
                vec![RoadPoint::new(1, 0)],
                vec![RoadPoint::new(1, 4)],
                vec![RoadPoint::new(0, 2), RoadPoint::new(1, 2)],
            ],
            TestEstimator,
        )
        .unwrap()
    }

    /// Two joints connected by two parallel roads of three points, road 0
    /// listed first in both joints.
    pub fn create_parallel_graph(
        (speed_0, one_way_0): (f64, bool),
        (speed_1, one_way_1): (f64, bool),
    ) -> RoadGraph<TestEstimator> {
        RoadGraph::build(
            vec![
                RoadGeometry::new(line((0.0, 0.0), (0.0, 0.02), 3), one_way_0, speed_0),
                RoadGeometry::new(line((0.0, 0.0), (0.0, 0.02), 3), one_way_1, speed_1),
            ],
            vec![
                vec![RoadPoint::new(0, 0), RoadPoint::new(1, 0)],
                vec![RoadPoint::new(0, 2), RoadPoint::new(1, 2)],
            ],
            TestEstimator,
        )
        .unwrap()
    }
}
