use fxhash::FxHashMap;

use crate::{
    constants::INVALID_JOINT,
    road_point::RoadPoint,
    types::{FeatureId, JointId, PointId},
};

/// Joint ids of the points of a single road, indexed by point id.
#[derive(Default)]
struct RoadJointIds {
    joint_ids: Vec<JointId>,
}

impl RoadJointIds {
    fn joint_id(&self, point_id: PointId) -> Option<JointId> {
        self.joint_ids
            .get(point_id as usize)
            .copied()
            .filter(|&joint_id| joint_id != INVALID_JOINT)
    }

    fn add_joint(&mut self, point_id: PointId, joint_id: JointId) -> Option<JointId> {
        let index = point_id as usize;
        if index >= self.joint_ids.len() {
            self.joint_ids.resize(index + 1, INVALID_JOINT);
        }

        let previous = std::mem::replace(&mut self.joint_ids[index], joint_id);
        (previous != INVALID_JOINT).then_some(previous)
    }

    fn find_neighbor(&self, point_id: PointId, forward: bool) -> Option<(JointId, PointId)> {
        let index = point_id as usize;

        if forward {
            self.joint_ids
                .iter()
                .enumerate()
                .skip(index + 1)
                .find(|(_, joint_id)| **joint_id != INVALID_JOINT)
                .map(|(point, &joint_id)| (joint_id, point as PointId))
        } else {
            self.joint_ids
                .iter()
                .enumerate()
                .take(index.min(self.joint_ids.len()))
                .rev()
                .find(|(_, joint_id)| **joint_id != INVALID_JOINT)
                .map(|(point, &joint_id)| (joint_id, point as PointId))
        }
    }
}

/// Maps road points back to joints.
#[derive(Default)]
pub struct RoadIndex {
    roads: FxHashMap<FeatureId, RoadJointIds>,
}

impl RoadIndex {
    /// Registers `road_point` as part of `joint_id`. Returns the joint that
    /// previously owned the point, if any.
    pub fn add_joint(&mut self, road_point: RoadPoint, joint_id: JointId) -> Option<JointId> {
        self.roads
            .entry(road_point.feature_id())
            .or_default()
            .add_joint(road_point.point_id(), joint_id)
    }

    pub fn joint_id(&self, road_point: RoadPoint) -> Option<JointId> {
        self.roads
            .get(&road_point.feature_id())
            .and_then(|road| road.joint_id(road_point.point_id()))
    }

    /// Closest joint on the same road strictly after (`forward`) or strictly
    /// before `road_point`, with the point id where it lies.
    pub fn find_neighbor(&self, road_point: RoadPoint, forward: bool) -> Option<(JointId, PointId)> {
        self.roads
            .get(&road_point.feature_id())
            .and_then(|road| road.find_neighbor(road_point.point_id(), forward))
    }
}
