mod consts;
mod create;
mod model_helpers;
mod models;
mod update;

pub use consts::*;
pub use create::{create, create_random};
pub use models::{Grid, GridConfig, Vec2};
pub use update::activate;
