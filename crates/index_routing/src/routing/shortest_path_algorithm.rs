use std::time::Duration;

use crate::{graph::JointGraph, types::JointId, weighting::Weight};

pub struct ShortestPathResult {
    /// Node ids from start to end, both included
    pub joints: Vec<JointId>,
    pub weight: Weight,
    pub visited_nodes: usize,
    pub duration: Duration,
}

pub trait ShortestPathAlgorithm {
    /// Returns `None` when `end` can't be reached from `start`.
    fn calc_path(
        &mut self,
        graph: &impl JointGraph,
        start: JointId,
        end: JointId,
    ) -> Option<ShortestPathResult>;
}
