use anyhow::{Result, anyhow};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

/// A board of lit/unlit cells, row-major. Dimensions are fixed once created;
/// every change goes through `activate`, which returns a fresh value.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Grid {
    pub cells: Vec<Vec<bool>>,
}

#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub light_chance: f64,
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize, light_chance: f64) -> Result<GridConfig> {
        if rows < 1 {
            return Err(anyhow!("row count must be at least 1, got {}", rows));
        }
        if cols < 1 {
            return Err(anyhow!("column count must be at least 1, got {}", cols));
        }
        if !(0.0..=1.0).contains(&light_chance) {
            return Err(anyhow!(
                "light chance must be within 0.0..=1.0, got {}",
                light_chance
            ));
        }
        Ok(GridConfig {
            rows,
            cols,
            light_chance,
        })
    }
}
