mod console_interface;
mod graph;
mod json_export;
mod models;
mod populate;
mod solve;

pub use console_interface::*;
pub use json_export::get_json_data;
pub use models::{Edge, PopulateResult, StateGraph};
pub use populate::{populate_node, populate_step};
pub use solve::{Solution, convert_to_petgraph, find_solution};
