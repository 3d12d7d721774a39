use crate::{road_point::RoadPoint, types::JointId};

/// The start or finish of a route: an arbitrary point of a road, spliced into
/// the graph under a reserved id that no real joint uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeJoint {
    point: RoadPoint,
    fake_id: JointId,
    joint_id: JointId,
}

impl FakeJoint {
    /// `suggested_id` is the real joint located at `point`, if there is one. In
    /// that case the search goes through the real joint instead of the reserved id.
    pub fn new(point: RoadPoint, fake_id: JointId, suggested_id: Option<JointId>) -> Self {
        FakeJoint {
            point,
            fake_id,
            joint_id: suggested_id.unwrap_or(fake_id),
        }
    }

    pub fn point(&self) -> RoadPoint {
        self.point
    }

    pub fn points(&self) -> &[RoadPoint] {
        std::slice::from_ref(&self.point)
    }

    /// The reserved id.
    pub fn fake_id(&self) -> JointId {
        self.fake_id
    }

    /// The id the search should use for this endpoint.
    pub fn joint_id(&self) -> JointId {
        self.joint_id
    }

    pub fn is_fake(&self) -> bool {
        self.joint_id == self.fake_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_reserved_id_without_real_joint() {
        let joint = FakeJoint::new(RoadPoint::new(3, 7), 100, None);

        assert_eq!(joint.joint_id(), 100);
        assert!(joint.is_fake());
    }

    #[test]
    fn resolves_to_real_joint() {
        let joint = FakeJoint::new(RoadPoint::new(3, 7), 100, Some(12));

        assert_eq!(joint.fake_id(), 100);
        assert_eq!(joint.joint_id(), 12);
        assert!(!joint.is_fake());
    }
}
