use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    constants::DEFAULT_MAX_SPEED_KMH,
    error::{ImportError, RouteError},
    geopoint::GeoPoint,
    graph::IndexGraph,
    index_graph_starter::IndexGraphStarter,
    location_index::LocationIndex,
    road_graph::RoadGraph,
    road_point::RoadPoint,
    routing::{
        astar::{AStar, EstimatorHeuristic},
        bidirectional_dijkstra::BidirectionalDijkstra,
        dijkstra::Dijkstra,
        routing_request::{RoutingAlgorithm, RoutingEndpoint, RoutingRequest},
        shortest_path_algorithm::{ShortestPathAlgorithm, ShortestPathResult},
    },
    stopwatch::Stopwatch,
    types::JointId,
    weighting::{CarEstimator, EdgeEstimator, Weight},
};

fn default_max_speed_kmh() -> f64 {
    DEFAULT_MAX_SPEED_KMH
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterOptions {
    /// Used when a request doesn't name one.
    #[serde(default)]
    pub algorithm: RoutingAlgorithm,
    /// Upper bound on speeds, also drives the A* heuristic.
    #[serde(default = "default_max_speed_kmh")]
    pub max_speed_kmh: f64,
}

impl Default for RouterOptions {
    fn default() -> Self {
        RouterOptions {
            algorithm: RoutingAlgorithm::default(),
            max_speed_kmh: DEFAULT_MAX_SPEED_KMH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Searched path. The two endpoints may carry reserved ids past the
    /// network's joints when they don't lie on a joint.
    pub joints: Vec<JointId>,
    pub road_points: Vec<RoadPoint>,
    pub points: Vec<GeoPoint>,
    pub weight: Weight,
}

pub struct Router<E: EdgeEstimator = CarEstimator> {
    graph: RoadGraph<E>,
    index: LocationIndex,
    options: RouterOptions,
}

impl Router<CarEstimator> {
    pub fn from_json_file(
        path: impl AsRef<Path>,
        options: RouterOptions,
    ) -> Result<Self, ImportError> {
        let estimator = CarEstimator::new(options.max_speed_kmh);
        let graph = RoadGraph::from_json_file(path, estimator)?;
        Ok(Router::new(graph, options))
    }
}

impl<E: EdgeEstimator> Router<E> {
    pub fn new(graph: RoadGraph<E>, options: RouterOptions) -> Self {
        let index = LocationIndex::build_from_graph(&graph);
        info!(
            joints = graph.num_joints(),
            indexed_points = index.len(),
            "Router ready"
        );

        Router {
            graph,
            index,
            options,
        }
    }

    pub fn graph(&self) -> &RoadGraph<E> {
        &self.graph
    }

    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    fn resolve(&self, endpoint: &RoutingEndpoint) -> Result<RoadPoint, RouteError> {
        match *endpoint {
            RoutingEndpoint::RoadPoint(road_point) => {
                if self.graph.is_valid_road_point(road_point) {
                    Ok(road_point)
                } else {
                    Err(RouteError::InvalidRoadPoint { road_point })
                }
            }
            RoutingEndpoint::Coordinates(coordinates) => {
                let mut stopwatch = Stopwatch::new("router/snap");
                let snap = crate::timed!(stopwatch, { self.index.snap(&self.graph, &coordinates) });
                stopwatch.report();

                let snap = snap.ok_or(RouteError::SnapFailed { coordinates })?;
                debug!(
                    road_point = %snap.road_point,
                    distance = snap.distance,
                    "Snapped {:?}",
                    coordinates
                );
                Ok(snap.road_point)
            }
        }
    }

    fn calc_path(
        &self,
        starter: &IndexGraphStarter<'_, RoadGraph<E>>,
        algorithm: RoutingAlgorithm,
    ) -> Option<ShortestPathResult> {
        let (start, finish) = (starter.start_joint(), starter.finish_joint());

        match algorithm {
            RoutingAlgorithm::Dijkstra => Dijkstra::new().calc_path(starter, start, finish),
            RoutingAlgorithm::AStar => {
                AStar::with_heuristic(EstimatorHeuristic::new(self.graph.estimator()))
                    .calc_path(starter, start, finish)
            }
            RoutingAlgorithm::BidirectionalDijkstra => {
                BidirectionalDijkstra::new().calc_path(starter, start, finish)
            }
        }
    }

    pub fn route(&self, request: &RoutingRequest) -> Result<Route, RouteError> {
        let start = self.resolve(&request.start)?;
        let finish = self.resolve(&request.finish)?;
        let algorithm = request.algorithm.unwrap_or(self.options.algorithm);

        let starter = IndexGraphStarter::new(&self.graph, start, finish);

        let result = self
            .calc_path(&starter, algorithm)
            .ok_or(RouteError::RouteNotFound { start, finish })?;

        debug!(
            ?algorithm,
            visited_nodes = result.visited_nodes,
            duration = ?result.duration,
            "Found path of {} joints",
            result.joints.len()
        );

        let road_points = starter.redress_route(&result.joints)?;
        let points = road_points
            .iter()
            .map(|&road_point| *self.graph.road_point_geometry(road_point))
            .collect();

        Ok(Route {
            joints: result.joints,
            road_points,
            points,
            weight: result.weight,
        })
    }
}

impl<E: EdgeEstimator + Sync> Router<E> {
    /// Routes every request in parallel, results keep the order of `requests`.
    pub fn route_many(&self, requests: &[RoutingRequest]) -> Vec<Result<Route, RouteError>> {
        requests
            .par_iter()
            .map(|request| self.route(request))
            .collect()
    }
}
