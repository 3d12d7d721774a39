use std::cmp::Ordering;

use crate::{
    constants::{INVALID_JOINT, MAX_WEIGHT},
    types::JointId,
    weighting::Weight,
};

#[derive(Copy, Clone, Debug)]
pub(super) struct HeapItem {
    pub node_id: JointId,

    /// Current cheapest weight from the search origin to `node_id`
    pub g_score: Weight,

    /// g_score plus the heuristic estimate to the target
    pub f_score: Weight,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.g_score.total_cmp(&self.g_score))
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

pub(super) struct NodeData {
    pub settled: bool,
    pub weight: Weight,
    pub parent: JointId,
}

impl NodeData {
    pub fn new() -> Self {
        NodeData {
            settled: false,
            weight: MAX_WEIGHT,
            parent: INVALID_JOINT,
        }
    }
}
