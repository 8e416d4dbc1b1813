use crate::core::Vec2;
use crate::state_graph::StateGraph;
use petgraph::Directed;
use petgraph::algo::astar;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

pub struct Solution {
    pub activations: Vec<Vec2>,
}

impl Solution {
    pub fn to_human_string(&self) -> String {
        self.activations
            .iter()
            .map(|a| format!("({}, {})", a.i, a.j))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Shortest activation sequence from the start board to the all-unlit board,
/// if the all-unlit board is reachable at all. Expects a fully populated graph.
pub fn find_solution(graph: &StateGraph, start_id: usize) -> Option<Solution> {
    let solved_id = graph
        .nodes
        .iter()
        .find_map(|(grid, &id)| grid.is_solved().then_some(id))?;

    let (petgraph, node_map) = convert_to_petgraph(graph);
    let start = *node_map.get(&start_id)?;
    let goal = *node_map.get(&solved_id)?;

    let (_, path) = astar(&petgraph, start, |finish| finish == goal, |_| 1usize, |_| {
        0usize
    })?;

    let mut activations = Vec::new();
    for pair in path.windows(2) {
        let edge = petgraph.find_edge(pair[0], pair[1])?;
        activations.push(*petgraph.edge_weight(edge)?);
    }
    Some(Solution { activations })
}

pub fn convert_to_petgraph(
    graph: &StateGraph,
) -> (
    petgraph::Graph<usize, Vec2, Directed>,
    HashMap<usize, NodeIndex>,
) {
    let mut petgraph = petgraph::Graph::new();

    let node_map: HashMap<usize, NodeIndex> = graph
        .nodes
        .iter()
        .map(|(_, &node_id)| {
            let index = petgraph.add_node(node_id);
            (node_id, index)
        })
        .collect();

    for edge in &graph.edges {
        petgraph.add_edge(node_map[&edge.from], node_map[&edge.to], edge.action);
    }

    (petgraph, node_map)
}
