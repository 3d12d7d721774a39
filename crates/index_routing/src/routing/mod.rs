pub mod astar;
pub mod astar_heuristic;
pub mod bidirectional_dijkstra;
pub mod dijkstra;
mod heap_item;
pub mod routing_request;
pub mod shortest_path_algorithm;
