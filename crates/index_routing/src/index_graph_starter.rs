use std::cmp::Ordering;

use tracing::trace;

use crate::{
    edge_direction::EdgeDirection,
    error::RedressError,
    fake_joint::FakeJoint,
    geopoint::GeoPoint,
    graph::{IndexGraph, JointGraph},
    joint_edge::JointEdge,
    road_point::RoadPoint,
    types::JointId,
    weighting::{EdgeEstimator, Weight},
};

/// Makes an arbitrary start and finish searchable on top of a read-only graph.
///
/// The start and finish get the ids `num_joints` and `num_joints + 1` of the
/// underlying graph. Edge lists of every node, real or not, are built through
/// [`IndexGraphStarter::edges_list`]: the reserved ids get the partial edges to
/// the neighboring joints of their road, and real joints next to an endpoint get
/// the mirrored edges towards it. The graph itself is never modified.
pub struct IndexGraphStarter<'a, G: IndexGraph> {
    graph: &'a G,
    start: FakeJoint,
    finish: FakeJoint,
}

impl<'a, G: IndexGraph> IndexGraphStarter<'a, G> {
    pub fn new(graph: &'a G, start_point: RoadPoint, finish_point: RoadPoint) -> Self {
        let start = FakeJoint::new(
            start_point,
            graph.num_joints(),
            graph.joint_id(start_point),
        );

        // Same point: the finish must be the very same node for the search to
        // end right where it starts.
        let finish_suggested_id = if start_point == finish_point {
            Some(start.joint_id())
        } else {
            graph.joint_id(finish_point)
        };
        let finish = FakeJoint::new(finish_point, graph.num_joints() + 1, finish_suggested_id);

        trace!(
            start = start.joint_id(),
            finish = finish.joint_id(),
            "Created graph starter"
        );

        IndexGraphStarter {
            graph,
            start,
            finish,
        }
    }

    pub fn graph(&self) -> &G {
        self.graph
    }

    pub fn start(&self) -> &FakeJoint {
        &self.start
    }

    pub fn finish(&self) -> &FakeJoint {
        &self.finish
    }

    pub fn start_joint(&self) -> JointId {
        self.start.joint_id()
    }

    pub fn finish_joint(&self) -> JointId {
        self.finish.joint_id()
    }

    /// Joints of the graph plus the two reserved ids.
    pub fn num_joints(&self) -> usize {
        self.graph.num_joints() + 2
    }

    pub fn joint_geometry(&self, joint_id: JointId) -> &GeoPoint {
        if joint_id == self.start.fake_id() {
            return self.graph.road_point_geometry(self.start.point());
        }

        if joint_id == self.finish.fake_id() {
            return self.graph.road_point_geometry(self.finish.point());
        }

        self.graph.joint_geometry(joint_id)
    }

    /// Road points of a joint, a reserved id only has the point of its endpoint.
    pub fn joint_points(&self, joint_id: JointId) -> &[RoadPoint] {
        if joint_id == self.start.fake_id() {
            return self.start.points();
        }

        if joint_id == self.finish.fake_id() {
            return self.finish.points();
        }

        self.graph.joint_points(joint_id)
    }

    pub fn edges_list(&self, joint_id: JointId, direction: EdgeDirection, edges: &mut Vec<JointEdge>) {
        edges.clear();

        if joint_id == self.start.fake_id() {
            self.fake_edges(&self.start, &self.finish, direction, edges);
            return;
        }

        if joint_id == self.finish.fake_id() {
            self.fake_edges(&self.finish, &self.start, direction, edges);
            return;
        }

        self.graph.edges_list(joint_id, direction, edges);
        self.arrival_fake_edges(joint_id, &self.start, direction, edges);
        self.arrival_fake_edges(joint_id, &self.finish, direction, edges);
    }

    fn fake_edges(
        &self,
        from: &FakeJoint,
        to: &FakeJoint,
        direction: EdgeDirection,
        edges: &mut Vec<JointEdge>,
    ) {
        self.graph.neighboring_edges(from.point(), direction, edges);

        // Both endpoints on the same road: the route may not need any real joint.
        if to.is_fake() && from.point().feature_id() == to.point().feature_id() {
            self.graph.directed_edge(
                from.point().feature_id(),
                from.point().point_id(),
                to.point().point_id(),
                to.joint_id(),
                direction,
                edges,
            );
        }
    }

    /// Edges between a real joint and an endpoint lying on one of its roads.
    fn arrival_fake_edges(
        &self,
        joint_id: JointId,
        fake_joint: &FakeJoint,
        direction: EdgeDirection,
        edges: &mut Vec<JointEdge>,
    ) {
        if !fake_joint.is_fake() {
            return;
        }

        if !self
            .graph
            .joint_lies_on_road(joint_id, fake_joint.point().feature_id())
        {
            return;
        }

        let mut fake_edges = Vec::new();
        self.graph
            .neighboring_edges(fake_joint.point(), direction.opposite(), &mut fake_edges);

        edges.extend(
            fake_edges
                .into_iter()
                .filter(|edge| edge.target() == joint_id)
                .map(|edge| JointEdge::new(fake_joint.joint_id(), edge.weight())),
        );
    }

    /// Turns a joint path into every road point it goes through.
    pub fn redress_route(&self, route: &[JointId]) -> Result<Vec<RoadPoint>, RedressError> {
        match route.len() {
            0 => return Ok(Vec::new()),
            // Only possible when the start and finish are the same node.
            1 => return Ok(vec![self.start.point()]),
            _ => {}
        }

        let mut road_points = Vec::with_capacity(route.len() * 2);

        for (i, joints) in route.windows(2).enumerate() {
            let (road_point0, road_point1) =
                self.find_points_with_common_feature(joints[0], joints[1])?;

            if i == 0 {
                road_points.push(road_point0);
            }

            let feature_id = road_point0.feature_id();
            let point_from = road_point0.point_id();
            let point_to = road_point1.point_id();

            match point_from.cmp(&point_to) {
                Ordering::Less => road_points.extend(
                    (point_from + 1..point_to).map(|point_id| RoadPoint::new(feature_id, point_id)),
                ),
                Ordering::Greater => road_points.extend(
                    (point_to + 1..point_from)
                        .rev()
                        .map(|point_id| RoadPoint::new(feature_id, point_id)),
                ),
                Ordering::Equal => {
                    return Err(RedressError::EqualPoints {
                        feature_id,
                        point_id: point_from,
                    });
                }
            }

            road_points.push(road_point1);
        }

        Ok(road_points)
    }

    /// Finds the road connecting two consecutive joints of a route.
    ///
    /// Candidates are visited in the order of the points of `joint_id0`, then of
    /// `joint_id1`. The cheapest one wins, ties keep the first candidate found.
    pub fn find_points_with_common_feature(
        &self,
        joint_id0: JointId,
        joint_id1: JointId,
    ) -> Result<(RoadPoint, RoadPoint), RedressError> {
        let estimator = self.graph.estimator();

        let mut result: Option<(RoadPoint, RoadPoint)> = None;
        let mut min_weight: Option<Weight> = None;

        for &road_point0 in self.joint_points(joint_id0) {
            for &road_point1 in self.joint_points(joint_id1) {
                if road_point0.feature_id() != road_point1.feature_id() {
                    continue;
                }

                let road = self.graph.road(road_point0.feature_id());
                if !road.is_road() {
                    continue;
                }

                if road.is_one_way() && road_point0.point_id() > road_point1.point_id() {
                    continue;
                }

                let Some((best0, best1)) = result else {
                    result = Some((road_point0, road_point1));
                    continue;
                };

                // Weights are expensive, only compute them once a second common
                // feature shows up.
                let current_min = match min_weight {
                    Some(weight) => weight,
                    None => estimator.calc_edges_weight(
                        self.graph.road(best0.feature_id()),
                        best0.point_id(),
                        best1.point_id(),
                    ),
                };

                let weight = estimator.calc_edges_weight(
                    road,
                    road_point0.point_id(),
                    road_point1.point_id(),
                );

                if weight < current_min {
                    min_weight = Some(weight);
                    result = Some((road_point0, road_point1));
                } else {
                    min_weight = Some(current_min);
                }
            }
        }

        result.ok_or(RedressError::NoCommonFeature {
            joint0: joint_id0,
            joint1: joint_id1,
        })
    }
}

impl<G: IndexGraph> JointGraph for IndexGraphStarter<'_, G> {
    fn num_joints(&self) -> usize {
        IndexGraphStarter::num_joints(self)
    }

    fn joint_geometry(&self, joint_id: JointId) -> &GeoPoint {
        IndexGraphStarter::joint_geometry(self, joint_id)
    }

    fn edges_list(&self, joint_id: JointId, direction: EdgeDirection, edges: &mut Vec<JointEdge>) {
        IndexGraphStarter::edges_list(self, joint_id, direction, edges)
    }
}
