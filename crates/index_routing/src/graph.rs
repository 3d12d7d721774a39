use crate::{
    edge_direction::EdgeDirection,
    geopoint::GeoPoint,
    joint_edge::JointEdge,
    road_geometry::RoadGeometry,
    road_point::RoadPoint,
    types::{FeatureId, JointId, PointId},
    weighting::EdgeEstimator,
};

/// Read-only road network with joints at road intersections.
///
/// Joint ids are dense, `0..num_joints()`. Edge lists only ever append to the
/// buffer they are given.
pub trait IndexGraph {
    type Estimator: EdgeEstimator;

    fn num_joints(&self) -> usize;

    fn estimator(&self) -> &Self::Estimator;

    fn road(&self, feature_id: FeatureId) -> &RoadGeometry;

    /// Joint located exactly at `road_point`, if any.
    fn joint_id(&self, road_point: RoadPoint) -> Option<JointId>;

    fn joint_points(&self, joint_id: JointId) -> &[RoadPoint];

    /// Edges to the closest joints along the road of `road_point`, in both road
    /// directions unless the road is one-way.
    fn neighboring_edges(
        &self,
        road_point: RoadPoint,
        direction: EdgeDirection,
        edges: &mut Vec<JointEdge>,
    );

    /// The edge between two points of the same road, pointing at `target`, if the
    /// road can be driven that way.
    fn directed_edge(
        &self,
        feature_id: FeatureId,
        point_from: PointId,
        point_to: PointId,
        target: JointId,
        direction: EdgeDirection,
        edges: &mut Vec<JointEdge>,
    );

    fn edges_list(&self, joint_id: JointId, direction: EdgeDirection, edges: &mut Vec<JointEdge>) {
        for &road_point in self.joint_points(joint_id) {
            self.neighboring_edges(road_point, direction, edges);
        }
    }

    fn road_point_geometry(&self, road_point: RoadPoint) -> &GeoPoint {
        self.road(road_point.feature_id())
            .point(road_point.point_id())
    }

    fn joint_geometry(&self, joint_id: JointId) -> &GeoPoint {
        self.road_point_geometry(self.joint_points(joint_id)[0])
    }

    fn joint_lies_on_road(&self, joint_id: JointId, feature_id: FeatureId) -> bool {
        self.joint_points(joint_id)
            .iter()
            .any(|road_point| road_point.feature_id() == feature_id)
    }
}

/// The view of a graph a shortest path search needs: coordinates and directed
/// edge lists of flat integer node ids.
pub trait JointGraph {
    /// Upper bound of the node ids this graph hands out.
    fn num_joints(&self) -> usize;

    fn joint_geometry(&self, joint_id: JointId) -> &GeoPoint;

    /// Clears `edges` and fills it with the edges of `joint_id` in `direction`.
    fn edges_list(&self, joint_id: JointId, direction: EdgeDirection, edges: &mut Vec<JointEdge>);
}
