
#[cfg(test)]
mod test {
    use crate::console_interface::parse_board;
    use crate::core::*;
    use crate::state_graph::{
        GraphInfo, PopulateResult, StateGraph, find_solution, get_json_data, populate_step,
    };

    fn populate_fully(graph: &mut StateGraph) {
        loop {
            if let PopulateResult::AllVisited = populate_step(graph) {
                break;
            }
        }
        graph.assert_all_visited();
    }

    #[test]
    fn one_by_one_board_reaches_exactly_two_states() {
        let mut graph = StateGraph::new();
        graph.upsert_state(parse_board("O"));
        populate_fully(&mut graph);

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 2);

        let info = GraphInfo::new(&graph);
        assert_eq!(info.visited, 2);
        assert!(info.has_solved);
    }

    #[test]
    fn lit_one_by_one_board_solves_in_one_activation() {
        let mut graph = StateGraph::new();
        let start_id = graph.upsert_state(parse_board("O"));
        populate_fully(&mut graph);

        let solution = find_solution(&graph, start_id).unwrap();
        assert_eq!(solution.activations, vec![Vec2 { i: 0, j: 0 }]);
        assert_eq!(solution.to_human_string(), "(0, 0)");
    }

    #[test]
    fn solved_start_needs_no_activations() {
        let mut graph = StateGraph::new();
        let start_id = graph.upsert_state(parse_board("."));
        populate_fully(&mut graph);

        let solution = find_solution(&graph, start_id).unwrap();
        assert!(solution.activations.is_empty());
    }

    #[test]
    fn board_one_activation_from_solved_solves_in_that_activation() {
        let level = r#"
.O.
OOO
.O.
"#;
        let mut graph = StateGraph::new();
        let start_id = graph.upsert_state(parse_board(level));
        populate_fully(&mut graph);

        // every 3x3 board is reachable from every other one
        assert_eq!(graph.nodes.len(), 512);
        assert_eq!(graph.edges.len(), 512 * 9);

        let solution = find_solution(&graph, start_id).unwrap();
        assert_eq!(solution.activations, vec![Vec2 { i: 1, j: 1 }]);
    }

    #[test]
    fn lit_domino_board_is_unsolvable() {
        // on a 1x2 board both activations toggle both cells, so a single lit
        // cell can never be switched off
        let mut graph = StateGraph::new();
        let start_id = graph.upsert_state(parse_board("O."));
        populate_fully(&mut graph);

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 4);

        let info = GraphInfo::new(&graph);
        assert!(!info.has_solved);
        assert!(find_solution(&graph, start_id).is_none());
    }

    #[test]
    fn json_export_lists_every_board() {
        let mut graph = StateGraph::new();
        graph.upsert_state(parse_board("O"));
        populate_fully(&mut graph);

        let json_data = get_json_data(&graph);
        let parsed: serde_json::Value = serde_json::from_str(&json_data).unwrap();

        assert_eq!(parsed["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["links"].as_array().unwrap().len(), 2);
    }
}
