pub(crate) use crate::core::{Grid, Vec2};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub struct GameRenderState {
    pub grid: Grid,
    pub cursor: Vec2,
    pub won: bool,
    pub activations: usize,
    pub last_activated: Option<Vec2>,
}
