use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid must be square and non-empty")]
    InvalidGridShape,
    #[error("Cell value {value} is outside the playable range")]
    InvalidCellValue { value: u8 },
    #[error("Grid size {size} is not supported")]
    InvalidGridSize { size: usize },
    #[error("Game state is inconsistent: {0}")]
    InconsistentState(&'static str),
}

pub type Result<T> = core::result::Result<T, GameError>;

impl GameError {
    pub(crate) fn grid_size(size: usize) -> Self {
        Self::InvalidGridSize { size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            GameError::InvalidCellValue { value: 12 }.to_string(),
            "Cell value 12 is outside the playable range"
        );
        assert_eq!(
            GameError::grid_size(Coord::MAX as usize + 1).to_string(),
            "Grid size 256 is not supported"
        );
    }
}
