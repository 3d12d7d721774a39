use rstar::{RStarInsertionStrategy, RTree, RTreeParams, primitives::GeomWithData};
use tracing::debug;

use crate::{
    geopoint::GeoPoint, graph::IndexGraph, road_graph::RoadGraph, road_point::RoadPoint,
    snap::Snap, stopwatch::Stopwatch, types::{FeatureId, PointId}, weighting::EdgeEstimator,
};

// [lng, lat] so that the tree's x axis is the longitude.
type LocationIndexObject = GeomWithData<[f64; 2], RoadPoint>;

struct LocationIndexTreeParams;

impl RTreeParams for LocationIndexTreeParams {
    type DefaultInsertionStrategy = RStarInsertionStrategy;

    const MAX_SIZE: usize = 64;
    const MIN_SIZE: usize = 28;
    const REINSERTION_COUNT: usize = 5;
}

/// Nearest road point lookup over every point of every routable road.
pub struct LocationIndex {
    tree: RTree<LocationIndexObject, LocationIndexTreeParams>,
}

impl LocationIndex {
    pub fn build_from_graph<E: EdgeEstimator>(graph: &RoadGraph<E>) -> LocationIndex {
        let mut stopwatch = Stopwatch::new("location_index/build");
        stopwatch.start();

        let objects: Vec<LocationIndexObject> = graph
            .roads()
            .iter()
            .enumerate()
            .filter(|(_, road)| road.is_road())
            .flat_map(|(feature_id, road)| {
                road.points()
                    .iter()
                    .enumerate()
                    .map(move |(point_id, point)| {
                        LocationIndexObject::new(
                            [point.lng, point.lat],
                            RoadPoint::new(feature_id as FeatureId, point_id as PointId),
                        )
                    })
            })
            .collect();

        debug!(points = objects.len(), "building location index");
        let tree = RTree::bulk_load_with_params(objects);

        stopwatch.stop();
        stopwatch.report();

        LocationIndex { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Nearest road point to `coordinates`, `None` when nothing is routable.
    pub fn snap(&self, graph: &impl IndexGraph, coordinates: &GeoPoint) -> Option<Snap> {
        self.tree
            .nearest_neighbor(&[coordinates.lng, coordinates.lat])
            .map(|nearest| {
                let road_point = nearest.data;
                let snapped = *graph.road_point_geometry(road_point);

                Snap::new(
                    road_point,
                    snapped,
                    coordinates.haversine_distance(&snapped),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        road_geometry::RoadGeometry,
        test_graph_utils::test_graph::{TestEstimator, create_cross_graph},
    };

    #[test]
    fn snaps_to_closest_road_point() {
        let graph = create_cross_graph();
        let index = LocationIndex::build_from_graph(&graph);

        assert_eq!(index.len(), 10);

        let snap = index
            .snap(&graph, &GeoPoint::new(0.0001, 0.0098))
            .unwrap();
        assert_eq!(snap.road_point, RoadPoint::new(0, 1));
        assert_eq!(
            snap.coordinates,
            *graph.road_point_geometry(RoadPoint::new(0, 1))
        );
        assert!(snap.distance > 0.0 && snap.distance < 50.0);
    }

    #[test]
    fn skips_non_road_features() {
        let graph = RoadGraph::build(
            vec![
                RoadGeometry::non_road(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.001)]),
                RoadGeometry::new(
                    vec![GeoPoint::new(1.0, 1.0), GeoPoint::new(1.0, 1.001)],
                    false,
                    50.0,
                ),
            ],
            vec![vec![RoadPoint::new(1, 0)], vec![RoadPoint::new(1, 1)]],
            TestEstimator,
        )
        .unwrap();
        let index = LocationIndex::build_from_graph(&graph);

        let snap = index.snap(&graph, &GeoPoint::new(0.0, 0.0)).unwrap();
        assert_eq!(snap.road_point.feature_id(), 1);
    }

    #[test]
    fn empty_index_returns_none() {
        let graph = RoadGraph::build(
            vec![RoadGeometry::non_road(vec![GeoPoint::new(0.0, 0.0)])],
            vec![],
            TestEstimator,
        )
        .unwrap();
        let index = LocationIndex::build_from_graph(&graph);

        assert!(index.is_empty());
        assert!(index.snap(&graph, &GeoPoint::new(0.0, 0.0)).is_none());
    }
}
