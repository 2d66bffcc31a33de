use serde::{Deserialize, Serialize};

pub use cell::*;
pub use direction::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use terminal::*;
pub use types::*;

mod cell;
mod direction;
mod engine;
mod error;
mod generator;
mod grid;
mod terminal;
mod types;

/// Side length used when nothing else is requested.
pub const DEFAULT_GRID_SIZE: Coord = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord) -> Self {
        Self { size }
    }

    pub fn new(size: Coord) -> Self {
        let clamped = size.clamp(1, MAX_GRID_SIZE);
        if clamped != size {
            log::warn!(
                "Grid size {} out of range, using {} instead",
                size,
                clamped
            );
        }
        Self::new_unchecked(clamped)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_GRID_SIZE)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    NoChange,
    Selected,
    Applied(Operation),
    /// The move was accepted and left nothing to play. Holds no operation when the very first
    /// selection already ended the game.
    Finished(Option<Operation>),
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Selected => true,
            Applied(_) => true,
            Finished(_) => true,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }

    pub const fn operation(self) -> Option<Operation> {
        match self {
            Self::Applied(op) | Self::Finished(Some(op)) => Some(op),
            _ => None,
        }
    }
}
