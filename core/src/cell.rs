use core::fmt;

use serde::{Deserialize, Serialize};

/// Smallest value a generated cell can hold.
pub const MIN_CELL_VALUE: u8 = 1;

/// Largest value a generated cell can hold.
pub const MAX_CELL_VALUE: u8 = 9;

/// Identifier unique within one generated grid, meant for keying rendered cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(u32);

impl CellId {
    pub const fn new(serial: u32) -> Self {
        Self(serial)
    }

    pub const fn serial(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell-{}", self.0)
    }
}

/// A single square of the playing field.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    value: u8,
    used: bool,
    id: CellId,
}

impl Cell {
    pub const fn new(value: u8, id: CellId) -> Self {
        Self {
            value,
            used: false,
            id,
        }
    }

    pub const fn value(self) -> u8 {
        self.value
    }

    pub const fn is_used(self) -> bool {
        self.used
    }

    pub const fn is_unused(self) -> bool {
        !self.used
    }

    pub const fn id(self) -> CellId {
        self.id
    }

    /// Same cell with the used flag set; the flag never goes back.
    pub(crate) const fn into_used(self) -> Self {
        Self { used: true, ..self }
    }
}

pub(crate) const fn is_playable_value(value: u8) -> bool {
    value >= MIN_CELL_VALUE && value <= MAX_CELL_VALUE
}
