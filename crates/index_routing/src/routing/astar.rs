use std::collections::BinaryHeap;

use fxhash::FxHashMap;

use crate::{
    constants::INVALID_JOINT,
    edge_direction::EdgeDirection,
    graph::JointGraph,
    stopwatch::Stopwatch,
    types::JointId,
    weighting::{EdgeEstimator, Weight},
};

use super::{
    astar_heuristic::AStarHeuristic,
    heap_item::{HeapItem, NodeData},
    shortest_path_algorithm::{ShortestPathAlgorithm, ShortestPathResult},
};

/// https://en.wikipedia.org/wiki/A*_search_algorithm
pub struct AStar<H: AStarHeuristic> {
    heap: BinaryHeap<HeapItem>,
    // Node ids are dense but a vector sized for the whole network per query doesn't scale.
    data: FxHashMap<JointId, NodeData>,
    visited_nodes: usize,

    heuristic: H,
}

/// Straight line lower bound of the estimator.
pub struct EstimatorHeuristic<'a, E: EdgeEstimator> {
    estimator: &'a E,
}

impl<'a, E: EdgeEstimator> EstimatorHeuristic<'a, E> {
    pub fn new(estimator: &'a E) -> Self {
        EstimatorHeuristic { estimator }
    }
}

impl<E: EdgeEstimator> AStarHeuristic for EstimatorHeuristic<'_, E> {
    fn estimate(&self, graph: &impl JointGraph, start: JointId, end: JointId) -> Weight {
        self.estimator
            .calc_heuristic(graph.joint_geometry(start), graph.joint_geometry(end))
    }
}

impl<H: AStarHeuristic> AStar<H> {
    pub fn with_heuristic(heuristic: H) -> AStar<H> {
        AStar {
            heap: BinaryHeap::with_capacity(1024),
            data: FxHashMap::default(),
            visited_nodes: 0,
            heuristic,
        }
    }

    fn init(&mut self, graph: &impl JointGraph, start: JointId, end: JointId) {
        self.heap.clear();
        self.data.clear();
        self.visited_nodes = 0;

        let h_score = self.heuristic.estimate(graph, start, end);
        self.heap.push(HeapItem {
            node_id: start,
            g_score: 0.0,
            f_score: h_score,
        });
        self.update_node_data(start, 0.0, INVALID_JOINT);
    }

    fn update_node_data(&mut self, node: JointId, weight: Weight, parent: JointId) {
        let data = self.data.entry(node).or_insert_with(NodeData::new);
        data.weight = weight;
        data.settled = false;
        data.parent = parent;
    }

    fn node_data(&mut self, node: JointId) -> &NodeData {
        self.data.entry(node).or_insert_with(NodeData::new)
    }

    fn build_path(&self, end: JointId) -> Vec<JointId> {
        let mut path = vec![end];
        let mut current = end;

        while let Some(data) = self.data.get(&current) {
            if data.parent == INVALID_JOINT {
                break;
            }

            path.push(data.parent);
            current = data.parent;
        }

        path.reverse();
        path
    }
}

impl<H: AStarHeuristic> ShortestPathAlgorithm for AStar<H> {
    fn calc_path(
        &mut self,
        graph: &impl JointGraph,
        start: JointId,
        end: JointId,
    ) -> Option<ShortestPathResult> {
        let mut stopwatch = Stopwatch::new("astar/calc_path");
        stopwatch.start();

        self.init(graph, start, end);

        let mut edges = Vec::new();

        while let Some(HeapItem {
            node_id, g_score, ..
        }) = self.heap.pop()
        {
            let node_data = self.node_data(node_id);
            if node_data.settled || g_score > node_data.weight {
                continue;
            }

            if let Some(data) = self.data.get_mut(&node_id) {
                data.settled = true;
            }
            self.visited_nodes += 1;

            if node_id == end {
                stopwatch.stop();
                stopwatch.report();

                return Some(ShortestPathResult {
                    joints: self.build_path(end),
                    weight: g_score,
                    visited_nodes: self.visited_nodes,
                    duration: stopwatch.total_duration(),
                });
            }

            graph.edges_list(node_id, EdgeDirection::Outgoing, &mut edges);

            for edge in &edges {
                let adj_node = edge.target();
                let adj_data = self.node_data(adj_node);

                if adj_data.settled {
                    continue;
                }

                let next_weight = g_score + edge.weight();

                if next_weight < adj_data.weight {
                    self.update_node_data(adj_node, next_weight, node_id);

                    let h_score = self.heuristic.estimate(graph, adj_node, end);
                    self.heap.push(HeapItem {
                        node_id: adj_node,
                        g_score: next_weight,
                        f_score: next_weight + h_score,
                    });
                }
            }
        }

        stopwatch.stop();
        stopwatch.report();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::IndexGraph,
        index_graph_starter::IndexGraphStarter,
        road_point::RoadPoint,
        test_graph_utils::test_graph::{create_cross_graph, create_single_road_graph},
    };

    #[test]
    fn finds_path_through_the_center() {
        let graph = create_cross_graph();
        let starter = IndexGraphStarter::new(&graph, RoadPoint::new(0, 1), RoadPoint::new(1, 3));

        let mut astar = AStar::with_heuristic(EstimatorHeuristic::new(graph.estimator()));
        let result = astar
            .calc_path(&starter, starter.start_joint(), starter.finish_joint())
            .unwrap();

        assert_eq!(
            result.joints,
            vec![starter.start_joint(), 4, starter.finish_joint()]
        );
        assert_eq!(result.weight, 2.0);
    }

    #[test]
    fn direct_edge_between_endpoints() {
        let graph = create_single_road_graph();
        let starter = IndexGraphStarter::new(&graph, RoadPoint::new(0, 1), RoadPoint::new(0, 3));

        let mut astar = AStar::with_heuristic(EstimatorHeuristic::new(graph.estimator()));
        let result = astar
            .calc_path(&starter, starter.start_joint(), starter.finish_joint())
            .unwrap();

        assert_eq!(result.joints, vec![2, 3]);
        assert_eq!(result.weight, 2.0);
    }

    #[test]
    fn unreachable_finish() {
        let graph = create_cross_graph();
        // Behind the start on a one-way road.
        let starter = IndexGraphStarter::new(&graph, RoadPoint::new(1, 3), RoadPoint::new(1, 1));

        let mut astar = AStar::with_heuristic(EstimatorHeuristic::new(graph.estimator()));
        assert!(
            astar
                .calc_path(&starter, starter.start_joint(), starter.finish_joint())
                .is_none()
        );
    }
}
