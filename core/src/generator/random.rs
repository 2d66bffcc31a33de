use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Fills every cell with a value drawn uniformly from `MIN_CELL_VALUE..=MAX_CELL_VALUE`.
#[derive(Clone, Debug)]
pub struct RandomGridGenerator {
    rng: SmallRng,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl Default for RandomGridGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(&mut self, config: GameConfig) -> Grid {
        let size = usize::from(config.size);
        let rng = &mut self.rng;
        let mut serial = 0;

        let cells = Array2::from_shape_fn((size, size), |_| {
            let value = rng.random_range(MIN_CELL_VALUE..=MAX_CELL_VALUE);
            let cell = Cell::new(value, CellId::new(serial));
            serial += 1;
            cell
        });
        log::trace!("Generated {0}x{0} grid", size);

        Grid::from_cells(cells)
    }
}
