pub mod constants;
pub mod edge_direction;
pub mod error;
pub mod fake_joint;
pub mod geopoint;
pub mod graph;
pub mod index_graph_starter;
pub mod joint_edge;
pub mod joint_index;
pub mod location_index;
pub mod road_geometry;
pub mod road_graph;
pub mod road_index;
pub mod road_point;
pub mod router;
pub mod routing;
pub mod snap;
pub mod stopwatch;
pub mod storage;
pub mod types;
pub mod weighting;

#[cfg(test)]
pub(crate) mod test_graph_utils;
