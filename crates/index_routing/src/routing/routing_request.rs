use serde::{Deserialize, Serialize};

use crate::{geopoint::GeoPoint, road_point::RoadPoint};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingAlgorithm {
    #[default]
    Dijkstra,
    AStar,
    BidirectionalDijkstra,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingEndpoint {
    RoadPoint(RoadPoint),
    Coordinates(GeoPoint),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoutingRequest {
    pub start: RoutingEndpoint,
    pub finish: RoutingEndpoint,
    #[serde(default)]
    pub algorithm: Option<RoutingAlgorithm>,
}

impl RoutingRequest {
    pub fn between_road_points(start: RoadPoint, finish: RoadPoint) -> Self {
        RoutingRequest {
            start: RoutingEndpoint::RoadPoint(start),
            finish: RoutingEndpoint::RoadPoint(finish),
            algorithm: None,
        }
    }

    pub fn with_algorithm(mut self, algorithm: RoutingAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }
}
