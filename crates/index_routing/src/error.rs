use std::path::PathBuf;

use thiserror::Error;

use crate::{
    geopoint::GeoPoint,
    road_point::RoadPoint,
    types::{FeatureId, JointId, PointId},
};

/// The joint path handed to the redress does not match the road geometry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RedressError {
    #[error("can't find common feature for joints {joint0} and {joint1}")]
    NoCommonFeature { joint0: JointId, joint1: JointId },
    #[error("wrong equality point_from = point_to = {point_id}, feature_id = {feature_id}")]
    EqualPoints {
        feature_id: FeatureId,
        point_id: PointId,
    },
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("failed to read graph file {path}")]
    ReadGraph {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse graph file")]
    ParseGraph(#[from] serde_json::Error),
    #[error("joint {joint} has no points")]
    EmptyJoint { joint: usize },
    #[error("joint {joint} references unknown road {feature_id}")]
    UnknownRoad { joint: usize, feature_id: FeatureId },
    #[error("joint {joint} references {road_point} outside of the road")]
    PointOutOfRange { joint: usize, road_point: RoadPoint },
    #[error("{road_point} belongs to both joints {first} and {second}")]
    SharedRoadPoint {
        road_point: RoadPoint,
        first: JointId,
        second: JointId,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("no road found near {coordinates:?}")]
    SnapFailed { coordinates: GeoPoint },
    #[error("{road_point} is not a point of a known road")]
    InvalidRoadPoint { road_point: RoadPoint },
    #[error("no route found between {start} and {finish}")]
    RouteNotFound { start: RoadPoint, finish: RoadPoint },
    #[error("route reconstruction failed")]
    Redress(#[from] RedressError),
}
