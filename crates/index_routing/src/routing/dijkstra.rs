use super::{astar::AStar, astar_heuristic::AStarHeuristic};
use crate::{graph::JointGraph, types::JointId, weighting::Weight};

pub struct DijkstraHeuristic;

impl AStarHeuristic for DijkstraHeuristic {
    #[inline(always)]
    fn estimate(&self, _graph: &impl JointGraph, _start: JointId, _end: JointId) -> Weight {
        0.0
    }
}

pub struct Dijkstra;

/// Dijkstra is A* with a zero heuristic
impl Dijkstra {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> AStar<DijkstraHeuristic> {
        AStar::with_heuristic(DijkstraHeuristic)
    }
}
