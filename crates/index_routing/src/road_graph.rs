use tracing::debug;

use crate::{
    edge_direction::EdgeDirection,
    error::ImportError,
    graph::IndexGraph,
    joint_edge::JointEdge,
    joint_index::JointIndex,
    road_geometry::RoadGeometry,
    road_index::RoadIndex,
    road_point::RoadPoint,
    types::{FeatureId, JointId, PointId},
    weighting::{CarEstimator, EdgeEstimator},
};

/// In-memory road network: road geometries plus the joints connecting them.
pub struct RoadGraph<E = CarEstimator> {
    roads: Vec<RoadGeometry>,
    joint_index: JointIndex,
    road_index: RoadIndex,
    estimator: E,
}

impl<E: EdgeEstimator> RoadGraph<E> {
    /// Builds the graph, joint `i` of `joints` gets the id `i`.
    pub fn build(
        roads: Vec<RoadGeometry>,
        joints: Vec<Vec<RoadPoint>>,
        estimator: E,
    ) -> Result<Self, ImportError> {
        let mut graph = RoadGraph {
            roads,
            joint_index: JointIndex::default(),
            road_index: RoadIndex::default(),
            estimator,
        };

        for (joint, points) in joints.into_iter().enumerate() {
            graph.add_joint(joint, points)?;
        }

        debug!(
            roads = graph.roads.len(),
            joints = graph.joint_index.num_joints(),
            "Built road graph"
        );

        Ok(graph)
    }

    fn add_joint(&mut self, joint: usize, points: Vec<RoadPoint>) -> Result<(), ImportError> {
        if points.is_empty() {
            return Err(ImportError::EmptyJoint { joint });
        }

        for &road_point in &points {
            let road = self.roads.get(road_point.feature_id() as usize).ok_or(
                ImportError::UnknownRoad {
                    joint,
                    feature_id: road_point.feature_id(),
                },
            )?;

            if road_point.point_id() as usize >= road.points_count() {
                return Err(ImportError::PointOutOfRange { joint, road_point });
            }

            if let Some(first) = self.road_index.add_joint(road_point, joint) {
                return Err(ImportError::SharedRoadPoint {
                    road_point,
                    first,
                    second: joint,
                });
            }
        }

        let joint_id = self.joint_index.add_joint(points);
        debug_assert_eq!(joint_id, joint);
        Ok(())
    }

    pub fn roads(&self) -> &[RoadGeometry] {
        &self.roads
    }

    pub fn is_valid_road_point(&self, road_point: RoadPoint) -> bool {
        self.roads
            .get(road_point.feature_id() as usize)
            .is_some_and(|road| (road_point.point_id() as usize) < road.points_count())
    }

    fn neighboring_edge(
        &self,
        road: &RoadGeometry,
        road_point: RoadPoint,
        forward: bool,
        edges: &mut Vec<JointEdge>,
    ) {
        if let Some((neighbor, neighbor_point)) = self.road_index.find_neighbor(road_point, forward)
        {
            let weight =
                self.estimator
                    .calc_edges_weight(road, road_point.point_id(), neighbor_point);
            edges.push(JointEdge::new(neighbor, weight));
        }
    }
}

impl<E: EdgeEstimator> IndexGraph for RoadGraph<E> {
    type Estimator = E;

    fn num_joints(&self) -> usize {
        self.joint_index.num_joints()
    }

    fn estimator(&self) -> &E {
        &self.estimator
    }

    fn road(&self, feature_id: FeatureId) -> &RoadGeometry {
        &self.roads[feature_id as usize]
    }

    fn joint_id(&self, road_point: RoadPoint) -> Option<JointId> {
        self.road_index.joint_id(road_point)
    }

    fn joint_points(&self, joint_id: JointId) -> &[RoadPoint] {
        self.joint_index.points(joint_id)
    }

    fn neighboring_edges(
        &self,
        road_point: RoadPoint,
        direction: EdgeDirection,
        edges: &mut Vec<JointEdge>,
    ) {
        let road = self.road(road_point.feature_id());
        if !road.is_road() {
            return;
        }

        let bidirectional = !road.is_one_way();

        // Going backward along the road: reaching the previous joint when two-way,
        // or being reached from it when looking at incoming edges.
        if !direction.is_outgoing() || bidirectional {
            self.neighboring_edge(road, road_point, false, edges);
        }

        if direction.is_outgoing() || bidirectional {
            self.neighboring_edge(road, road_point, true, edges);
        }
    }

    fn directed_edge(
        &self,
        feature_id: FeatureId,
        point_from: PointId,
        point_to: PointId,
        target: JointId,
        direction: EdgeDirection,
        edges: &mut Vec<JointEdge>,
    ) {
        let road = self.road(feature_id);
        if !road.is_road() {
            return;
        }

        if road.is_one_way() && direction.is_outgoing() != (point_from < point_to) {
            return;
        }

        let weight = self
            .estimator
            .calc_edges_weight(road, point_from, point_to);
        edges.push(JointEdge::new(target, weight));
    }
}
