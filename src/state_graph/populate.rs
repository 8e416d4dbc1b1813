use crate::core::{Vec2, activate};
use crate::state_graph::Edge;
use crate::state_graph::models::{PopulateResult, StateGraph};

/// Expand one node: every board coordinate is a possible activation, and each
/// one leads to exactly one successor state.
pub fn populate_node(graph: &mut StateGraph, from_id: usize) {
    let Some(from_grid) = graph.get_state(from_id) else {
        return;
    };
    let from_grid = from_grid.clone();

    for i in 0..from_grid.height() {
        for j in 0..from_grid.width() {
            let new_grid = activate(&from_grid, i, j);
            let to_id = graph.upsert_state(new_grid);
            let edge = Edge {
                from: from_id,
                to: to_id,
                action: Vec2 { i, j },
            };
            graph.add_edge(edge);
        }
    }

    graph.mark_visited(from_id);
}

pub fn populate_step(graph: &mut StateGraph) -> PopulateResult {
    let picked_node = graph.get_unvisited_node();

    let Some(node_id) = picked_node else {
        return PopulateResult::AllVisited;
    };
    populate_node(graph, node_id);
    PopulateResult::Populated
}
