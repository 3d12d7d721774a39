use crate::{types::JointId, weighting::Weight};

/// A directed edge as seen from the joint whose edge list contains it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointEdge {
    target: JointId,
    weight: Weight,
}

impl JointEdge {
    pub fn new(target: JointId, weight: Weight) -> Self {
        JointEdge { target, weight }
    }

    pub fn target(&self) -> JointId {
        self.target
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}
