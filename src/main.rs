// Simple CLI Lights Out with ratatui
// Controls: W/A/S/D or arrow keys move the cursor, Space or Enter toggles (immediate response). Q to quit.
// Symbols: 'O' lit, '.' unlit, brackets mark the cursor cell.

use LightsEngine::console_interface::ConsoleInput::*;
use LightsEngine::console_interface::{
    cleanup_terminal, handle_input, move_cursor, render_game, setup_terminal,
};
use LightsEngine::core::{
    DEFAULT_COLS, DEFAULT_LIGHT_CHANCE, DEFAULT_ROWS, GridConfig, Vec2, activate, create_random,
};
use LightsEngine::models::GameRenderState;
use LightsEngine::state_graph::{
    GraphRenderState, PopulateResult, StateGraph, find_solution, get_graph_info, get_json_data,
    populate_step, render_graph,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let switch = args.get(1).cloned().unwrap_or("interactive".to_string());

    let rows = args
        .get(2)
        .map(|s| s.parse::<usize>())
        .transpose()?
        .unwrap_or(DEFAULT_ROWS);
    let cols = args
        .get(3)
        .map(|s| s.parse::<usize>())
        .transpose()?
        .unwrap_or(DEFAULT_COLS);
    let light_chance = args
        .get(4)
        .map(|s| s.parse::<f64>())
        .transpose()?
        .unwrap_or(DEFAULT_LIGHT_CHANCE);

    let config = GridConfig::new(rows, cols, light_chance)?;
    let mut terminal = setup_terminal()?;

    match switch.as_str() {
        "graph" => {
            run_state_graph(&config, &mut terminal)?;
        }
        "interactive" => {
            run_interactive(&config, &mut terminal)?;
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive' or 'graph'. defaulting to interactive",
                switch
            );
            run_interactive(&config, &mut terminal)?;
        }
    }

    Ok(())
}

fn run_state_graph(
    config: &GridConfig,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let start_grid = create_random(config);
    let mut state_graph = StateGraph::new();
    let first_state_id = state_graph.upsert_state(start_grid);

    let start_time = std::time::Instant::now();
    let mut last_render_time = start_time;
    let mut processed_since_last_render = 0;

    std::fs::create_dir_all("exports")?;
    let mut log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open("exports/solve_log.log")?;

    render_graph(
        terminal,
        &mut log_out,
        GraphRenderState {
            graph: &state_graph,
            processed_since_last_render,
            start_time,
            last_render_time,
            current_time: last_render_time,
        },
    )?;

    'outer: loop {
        let stop_time = std::time::Instant::now() + std::time::Duration::from_millis(1000);
        while std::time::Instant::now() < stop_time {
            let PopulateResult::Populated = populate_step(&mut state_graph) else {
                break 'outer;
            };
            processed_since_last_render += 1;
        }

        let current_time = std::time::Instant::now();
        render_graph(
            terminal,
            &mut log_out,
            GraphRenderState {
                graph: &state_graph,
                processed_since_last_render,
                start_time,
                last_render_time,
                current_time,
            },
        )?;

        last_render_time = current_time;
        processed_since_last_render = 0;
    }

    cleanup_terminal()?;

    println!("{}", get_graph_info(&state_graph));

    match find_solution(&state_graph, first_state_id) {
        Some(solution) => {
            println!("Shortest solution: {} activations", solution.activations.len());
            println!("{}", solution.to_human_string());
        }
        None => {
            println!("No solution reachable from the starting board");
        }
    }

    let json_data = get_json_data(&state_graph);
    let mut f = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open("exports/state_graph.json")?;
    f.write_all(json_data.as_bytes())?;
    println!("State graph exported to exports/state_graph.json");

    Ok(())
}

fn run_interactive(
    config: &GridConfig,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = create_random(config);
    let mut cursor = Vec2 { i: 0, j: 0 };
    let mut activations = 0;
    let mut last_activated = None;

    // Initial render
    let first_render = GameRenderState {
        grid: grid.clone(),
        cursor,
        won: grid.is_solved(),
        activations,
        last_activated,
    };
    render_game(terminal, &first_render)?;

    if first_render.won {
        // A board can start all-unlit; keep showing the win screen until user inputs
        loop {
            match handle_input() {
                Ok(Timeout) => {}
                Ok(_) => break,
                Err(_) => {
                    println!("error reading input");
                    break;
                }
            }
        }
        cleanup_terminal()?;
        return Ok(());
    }

    loop {
        match handle_input() {
            Ok(Quit) => break,
            Ok(MoveCursor(direction)) => {
                cursor = move_cursor(cursor, direction, &grid);
                let to_render = GameRenderState {
                    grid: grid.clone(),
                    cursor,
                    won: false,
                    activations,
                    last_activated,
                };
                render_game(terminal, &to_render)?;
            }
            Ok(Activate) => {
                grid = activate(&grid, cursor.i, cursor.j);
                activations += 1;
                last_activated = Some(cursor);
                let to_render = GameRenderState {
                    grid: grid.clone(),
                    cursor,
                    won: grid.is_solved(),
                    activations,
                    last_activated,
                };
                render_game(terminal, &to_render)?;

                if to_render.won {
                    // Keep showing the win screen until user inputs
                    loop {
                        match handle_input() {
                            Ok(Timeout) => {}
                            Ok(_) => break,
                            Err(_) => {
                                println!("error reading input");
                                break;
                            }
                        }
                    }
                    break;
                }
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(_) => {
                println!("error reading input");
                break;
            }
        }
    }

    cleanup_terminal()?;

    Ok(())
}
