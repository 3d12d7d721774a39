use index_routing::{
    error::RouteError,
    geopoint::GeoPoint,
    road_point::RoadPoint,
    router::{Router, RouterOptions},
    routing::routing_request::{RoutingAlgorithm, RoutingEndpoint, RoutingRequest},
};

const ALGORITHMS: [RoutingAlgorithm; 3] = [
    RoutingAlgorithm::Dijkstra,
    RoutingAlgorithm::AStar,
    RoutingAlgorithm::BidirectionalDijkstra,
];

/// ```text
///  J3 (D) ----------------- road 2 --+
///   ^                                |
///   | road 1 (one-way)               |
///   |                                |
///  J1 (B) --- road 0 --- J0 (A) -----+
///   |
///   +--- road 0 --- J2 (C)
/// ```
fn small_router() -> Router {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/small_graph.json");
    Router::from_json_file(path, RouterOptions::default()).unwrap()
}

#[test]
fn routes_through_shared_joint() {
    let router = small_router();

    for algorithm in ALGORITHMS {
        let request =
            RoutingRequest::between_road_points(RoadPoint::new(0, 1), RoadPoint::new(1, 1))
                .with_algorithm(algorithm);
        let route = router.route(&request).unwrap();

        assert_eq!(
            route.road_points,
            vec![
                RoadPoint::new(0, 1),
                RoadPoint::new(0, 2),
                RoadPoint::new(1, 1)
            ],
            "{algorithm:?}"
        );
        assert_eq!(route.points.len(), route.road_points.len());
        assert!(route.weight > 0.0);
    }
}

#[test]
fn one_way_road_forces_detour() {
    let router = small_router();
    let request = RoutingRequest::between_road_points(RoadPoint::new(1, 1), RoadPoint::new(0, 1));

    let route = router.route(&request).unwrap();

    assert_eq!(
        route.road_points,
        vec![
            RoadPoint::new(1, 1),
            RoadPoint::new(1, 2),
            RoadPoint::new(2, 1),
            RoadPoint::new(2, 0),
            RoadPoint::new(0, 1)
        ]
    );
}

#[test]
fn algorithms_agree_on_weight() {
    let router = small_router();
    let points = [
        RoadPoint::new(0, 0),
        RoadPoint::new(0, 1),
        RoadPoint::new(0, 3),
        RoadPoint::new(1, 1),
        RoadPoint::new(2, 1),
    ];

    for &start in &points {
        for &finish in &points {
            let weights: Vec<f64> = ALGORITHMS
                .iter()
                .map(|&algorithm| {
                    let request = RoutingRequest::between_road_points(start, finish)
                        .with_algorithm(algorithm);
                    router.route(&request).unwrap().weight
                })
                .collect();

            assert!((weights[0] - weights[1]).abs() < 1e-9, "{start} -> {finish}");
            assert!((weights[0] - weights[2]).abs() < 1e-9, "{start} -> {finish}");
        }
    }
}

#[test]
fn never_snaps_to_non_road_features() {
    let router = small_router();
    let request = RoutingRequest {
        start: RoutingEndpoint::Coordinates(GeoPoint::new(0.009, 0.02)),
        finish: RoutingEndpoint::Coordinates(GeoPoint::new(0.0001, 0.0)),
        algorithm: None,
    };

    let route = router.route(&request).unwrap();

    assert_eq!(route.road_points.first(), Some(&RoadPoint::new(0, 4)));
    assert_eq!(route.road_points.last(), Some(&RoadPoint::new(0, 0)));
    assert!(route.road_points.iter().all(|rp| rp.feature_id() != 3));
}

#[test]
fn batch_routing() {
    let router = small_router();
    let requests = vec![
        RoutingRequest::between_road_points(RoadPoint::new(0, 1), RoadPoint::new(1, 1)),
        RoutingRequest::between_road_points(RoadPoint::new(3, 0), RoadPoint::new(0, 1)),
        RoutingRequest::between_road_points(RoadPoint::new(0, 0), RoadPoint::new(7, 0)),
    ];

    let results = router.route_many(&requests);

    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(RouteError::RouteNotFound { .. })));
    assert!(matches!(results[2], Err(RouteError::InvalidRoadPoint { .. })));
}
