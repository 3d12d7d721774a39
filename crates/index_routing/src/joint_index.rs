use crate::{road_point::RoadPoint, types::JointId};

/// Maps every joint to the road points it is made of.
#[derive(Default)]
pub struct JointIndex {
    joints: Vec<Vec<RoadPoint>>,
}

impl JointIndex {
    pub fn add_joint(&mut self, points: Vec<RoadPoint>) -> JointId {
        let joint_id = self.joints.len();
        self.joints.push(points);
        joint_id
    }

    pub fn num_joints(&self) -> usize {
        self.joints.len()
    }

    pub fn points(&self, joint_id: JointId) -> &[RoadPoint] {
        &self.joints[joint_id]
    }
}
