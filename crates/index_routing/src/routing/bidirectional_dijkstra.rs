use std::collections::BinaryHeap;

use fxhash::FxHashMap;

use crate::{
    constants::{INVALID_JOINT, MAX_WEIGHT},
    edge_direction::EdgeDirection,
    graph::JointGraph,
    joint_edge::JointEdge,
    stopwatch::Stopwatch,
    types::JointId,
    weighting::Weight,
};

use super::{
    heap_item::{HeapItem, NodeData},
    shortest_path_algorithm::{ShortestPathAlgorithm, ShortestPathResult},
};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum SearchDirection {
    Forward,
    Backward,
}

impl SearchDirection {
    fn edge_direction(self) -> EdgeDirection {
        match self {
            SearchDirection::Forward => EdgeDirection::Outgoing,
            SearchDirection::Backward => EdgeDirection::Incoming,
        }
    }
}

#[derive(Default)]
struct SearchState {
    heap: BinaryHeap<HeapItem>,
    data: FxHashMap<JointId, NodeData>,
}

impl SearchState {
    fn reset(&mut self, origin: JointId) {
        self.heap.clear();
        self.data.clear();
        self.heap.push(HeapItem {
            node_id: origin,
            g_score: 0.0,
            f_score: 0.0,
        });
        self.data.insert(
            origin,
            NodeData {
                settled: false,
                weight: 0.0,
                parent: INVALID_JOINT,
            },
        );
    }

    fn min_weight(&self) -> Option<Weight> {
        self.heap.peek().map(|item| item.g_score)
    }

    fn weight(&self, node: JointId) -> Weight {
        self.data.get(&node).map_or(MAX_WEIGHT, |data| data.weight)
    }

    /// Parents from `node` back to the origin of this search, `node` excluded.
    fn parents(&self, node: JointId) -> Vec<JointId> {
        let mut chain = Vec::new();
        let mut current = node;

        while let Some(data) = self.data.get(&current) {
            if data.parent == INVALID_JOINT {
                break;
            }

            chain.push(data.parent);
            current = data.parent;
        }

        chain
    }
}

/// Runs a forward search over outgoing edges from the start and a backward
/// search over incoming edges from the finish until the frontiers can no
/// longer improve the best meeting point.
pub struct BidirectionalDijkstra {
    forward: SearchState,
    backward: SearchState,

    best_meeting_node: JointId,
    best_path_weight: Weight,
    visited_nodes: usize,

    edges: Vec<JointEdge>,
}

impl Default for BidirectionalDijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl BidirectionalDijkstra {
    pub fn new() -> Self {
        BidirectionalDijkstra {
            forward: SearchState::default(),
            backward: SearchState::default(),
            best_meeting_node: INVALID_JOINT,
            best_path_weight: MAX_WEIGHT,
            visited_nodes: 0,
            edges: Vec::new(),
        }
    }

    fn init(&mut self, start: JointId, end: JointId) {
        self.forward.reset(start);
        self.backward.reset(end);
        self.best_meeting_node = INVALID_JOINT;
        self.best_path_weight = MAX_WEIGHT;
        self.visited_nodes = 0;
    }

    fn states_mut(&mut self, dir: SearchDirection) -> (&mut SearchState, &SearchState) {
        match dir {
            SearchDirection::Forward => (&mut self.forward, &self.backward),
            SearchDirection::Backward => (&mut self.backward, &self.forward),
        }
    }

    /// Picks the side to expand next, or `None` once the search is finished.
    fn next_direction(&self) -> Option<SearchDirection> {
        let best = self.best_path_weight;

        match (self.forward.min_weight(), self.backward.min_weight()) {
            (None, None) => None,
            (Some(f), Some(b)) if f + b >= best => None,
            (Some(f), Some(b)) => Some(if f <= b {
                SearchDirection::Forward
            } else {
                SearchDirection::Backward
            }),
            (Some(f), None) if f < best => Some(SearchDirection::Forward),
            (None, Some(b)) if b < best => Some(SearchDirection::Backward),
            _ => None,
        }
    }

    fn step(&mut self, graph: &impl JointGraph, dir: SearchDirection) {
        let mut edges = std::mem::take(&mut self.edges);
        let mut best_meeting_node = self.best_meeting_node;
        let mut best_path_weight = self.best_path_weight;

        let (state, other) = self.states_mut(dir);

        let Some(HeapItem {
            node_id, g_score, ..
        }) = state.heap.pop()
        else {
            self.edges = edges;
            return;
        };

        let node_data = state.data.entry(node_id).or_insert_with(NodeData::new);
        if node_data.settled || g_score > node_data.weight {
            self.edges = edges;
            return;
        }
        node_data.settled = true;

        graph.edges_list(node_id, dir.edge_direction(), &mut edges);

        for edge in &edges {
            let adj_node = edge.target();
            let next_weight = g_score + edge.weight();

            let adj_data = state.data.entry(adj_node).or_insert_with(NodeData::new);
            if adj_data.settled || next_weight >= adj_data.weight {
                continue;
            }

            adj_data.weight = next_weight;
            adj_data.parent = node_id;
            state.heap.push(HeapItem {
                node_id: adj_node,
                g_score: next_weight,
                f_score: next_weight,
            });

            let total = next_weight + other.weight(adj_node);
            if total < best_path_weight {
                best_path_weight = total;
                best_meeting_node = adj_node;
            }
        }

        self.visited_nodes += 1;
        self.best_meeting_node = best_meeting_node;
        self.best_path_weight = best_path_weight;
        self.edges = edges;
    }

    fn build_path(&self) -> Vec<JointId> {
        let meeting = self.best_meeting_node;

        let mut path = self.forward.parents(meeting);
        path.reverse();
        path.push(meeting);
        path.extend(self.backward.parents(meeting));
        path
    }
}

impl ShortestPathAlgorithm for BidirectionalDijkstra {
    fn calc_path(
        &mut self,
        graph: &impl JointGraph,
        start: JointId,
        end: JointId,
    ) -> Option<ShortestPathResult> {
        let mut stopwatch = Stopwatch::new("bidirectional_dijkstra/calc_path");
        stopwatch.start();

        self.init(start, end);

        if start == end {
            self.best_meeting_node = start;
            self.best_path_weight = 0.0;
        }

        while let Some(dir) = self.next_direction() {
            self.step(graph, dir);
        }

        stopwatch.stop();
        stopwatch.report();

        if self.best_meeting_node == INVALID_JOINT {
            return None;
        }

        Some(ShortestPathResult {
            joints: self.build_path(),
            weight: self.best_path_weight,
            visited_nodes: self.visited_nodes,
            duration: stopwatch.total_duration(),
        })
    }
}
