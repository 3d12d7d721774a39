use crate::{graph::JointGraph, types::JointId, weighting::Weight};

pub trait AStarHeuristic {
    fn estimate(&self, graph: &impl JointGraph, start: JointId, end: JointId) -> Weight;
}
