use crate::core::{Grid, GridConfig};
use rand::Rng;

/// Build a board from a validated config, each cell independently lit with
/// probability `light_chance`. Generic over the random source so callers can
/// supply a seeded generator.
pub fn create<R: Rng + ?Sized>(config: &GridConfig, rng: &mut R) -> Grid {
    let cells = (0..config.rows)
        .map(|_| {
            (0..config.cols)
                .map(|_| rng.random::<f64>() < config.light_chance)
                .collect()
        })
        .collect();
    Grid { cells }
}

pub fn create_random(config: &GridConfig) -> Grid {
    let mut rng = rand::rng();
    create(config, &mut rng)
}
