use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::ImportError, road_geometry::RoadGeometry, road_graph::RoadGraph,
    road_point::RoadPoint, weighting::EdgeEstimator,
};

/// On-disk layout of a road graph: the roads, then every joint as the list of
/// road points it glues together. Joint ids are positions in `joints`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RoadGraphFile {
    pub roads: Vec<RoadGeometry>,
    #[serde(default)]
    pub joints: Vec<Vec<RoadPoint>>,
}

impl RoadGraphFile {
    pub fn into_graph<E: EdgeEstimator>(self, estimator: E) -> Result<RoadGraph<E>, ImportError> {
        RoadGraph::build(self.roads, self.joints, estimator)
    }
}

impl<E: EdgeEstimator> RoadGraph<E> {
    pub fn from_json_str(json: &str, estimator: E) -> Result<Self, ImportError> {
        let file: RoadGraphFile = serde_json::from_str(json)?;
        file.into_graph(estimator)
    }

    pub fn from_json_file(path: impl AsRef<Path>, estimator: E) -> Result<Self, ImportError> {
        let path = path.as_ref();
        info!("Reading road graph from {}", path.display());

        let file = File::open(path).map_err(|source| ImportError::ReadGraph {
            path: path.to_path_buf(),
            source,
        })?;

        let graph_file: RoadGraphFile = serde_json::from_reader(BufReader::new(file))?;
        graph_file.into_graph(estimator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::IndexGraph, test_graph_utils::test_graph::TestEstimator};

    const GRAPH: &str = r#"{
        "roads": [
            {
                "points": [{"lat": 0.0, "lng": 0.0}, {"lat": 0.0, "lng": 0.01}, {"lat": 0.0, "lng": 0.02}],
                "one_way": true,
                "speed_kmh": 90.0
            },
            {
                "points": [{"lat": 0.0, "lng": 0.02}, {"lat": 0.01, "lng": 0.02}],
                "is_road": false
            }
        ],
        "joints": [
            [{"feature_id": 0, "point_id": 0}],
            [{"feature_id": 0, "point_id": 2}, {"feature_id": 1, "point_id": 0}]
        ]
    }"#;

    #[test]
    fn parses_roads_and_joints() {
        let graph = RoadGraph::from_json_str(GRAPH, TestEstimator).unwrap();

        assert_eq!(graph.num_joints(), 2);
        assert!(graph.road(0).is_one_way());
        assert_eq!(graph.road(0).speed_kmh(), 90.0);
        assert!(!graph.road(1).is_road());
        assert_eq!(graph.road(1).speed_kmh(), 50.0);
        assert_eq!(graph.joint_id(RoadPoint::new(1, 0)), Some(1));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let result = RoadGraph::from_json_str("{\"roads\": 3}", TestEstimator);
        assert!(matches!(result, Err(ImportError::ParseGraph(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = RoadGraph::from_json_file("/nonexistent/graph.json", TestEstimator);
        assert!(matches!(result, Err(ImportError::ReadGraph { .. })));
    }

    #[test]
    fn joints_are_validated() {
        let json = r#"{"roads": [{"points": [{"lat": 0.0, "lng": 0.0}]}], "joints": [[{"feature_id": 0, "point_id": 5}]]}"#;
        let result = RoadGraph::from_json_str(json, TestEstimator);
        assert!(matches!(result, Err(ImportError::PointOutOfRange { .. })));
    }
}
