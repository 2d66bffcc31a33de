use ndarray::Array2;

use crate::*;
pub use random::*;

mod random;

pub trait GridGenerator {
    fn generate(&mut self, config: GameConfig) -> Grid;
}

/// Always produces the same grid, useful for preset puzzles.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedGridGenerator {
    grid: Grid,
}

impl FixedGridGenerator {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn from_values(values: Array2<u8>) -> Result<Self> {
        Grid::from_values(values).map(Self::new)
    }
}

impl GridGenerator for FixedGridGenerator {
    fn generate(&mut self, config: GameConfig) -> Grid {
        if config.size != self.grid.size() {
            log::warn!(
                "Fixed grid is {0}x{0}, ignoring requested size {1}",
                self.grid.size(),
                config.size
            );
        }
        self.grid.clone()
    }
}
