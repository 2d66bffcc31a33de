use core::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Largest supported side length of a grid.
pub const MAX_GRID_SIZE: Coord = 16;

/// Square, row-major playing field.
///
/// A grid is a value: marking a cell as used produces a new grid and leaves the receiver
/// untouched, so earlier snapshots held by a renderer never change underneath it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    cells: Array2<Cell>,
}

/// Unchecked wire form of [`Grid`].
#[derive(Deserialize)]
struct GridRepr {
    cells: Array2<Cell>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = GameError;

    fn try_from(repr: GridRepr) -> Result<Self> {
        let cells = repr.cells;
        check_shape(cells.dim())?;
        if let Some(cell) = cells.iter().find(|cell| !is_playable_value(cell.value())) {
            return Err(GameError::InvalidCellValue {
                value: cell.value(),
            });
        }
        Ok(Self { cells })
    }
}

fn check_shape((rows, cols): (usize, usize)) -> Result<()> {
    if rows == 0 || rows != cols {
        return Err(GameError::InvalidGridShape);
    }
    if rows > usize::from(MAX_GRID_SIZE) {
        return Err(GameError::grid_size(rows));
    }
    Ok(())
}

impl Grid {
    /// Builds a grid from raw cell values, assigning ids in row-major order.
    pub fn from_values(values: Array2<u8>) -> Result<Self> {
        let (rows, cols) = values.dim();
        check_shape((rows, cols))?;
        if let Some(&value) = values.iter().find(|&&value| !is_playable_value(value)) {
            return Err(GameError::InvalidCellValue { value });
        }

        let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
            let serial = (row * cols + col) as u32;
            Cell::new(values[[row, col]], CellId::new(serial))
        });
        Ok(Self { cells })
    }

    pub fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Result<Self> {
        let values = Array2::from_shape_fn((N, N), |(row, col)| rows[row][col]);
        Self::from_values(values)
    }

    pub(crate) fn from_cells(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    pub fn size(&self) -> Coord {
        // construction caps the side length at MAX_GRID_SIZE
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size && coords.1 < size
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.contains(coords)
            .then(|| self.cells[coords.to_nd_index()])
    }

    pub fn used_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_used())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn unused_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.used_count())
    }

    pub fn all_used(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_used())
    }

    /// Returns a copy of this grid with the cell at `coords` marked as used.
    pub fn with_used(&self, coords: Coord2) -> Result<Self> {
        let coords = self.validate_coords(coords)?;
        let mut cells = self.cells.clone();
        let index = coords.to_nd_index();
        cells[index] = cells[index].into_used();
        Ok(Self { cells })
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn has_unused_neighbor(&self, coords: Coord2) -> bool {
        self.iter_neighbors(coords).any(|pos| self[pos].is_unused())
    }

    /// All cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows([[5, 3, 1], [7, 2, 9], [4, 4, 8]]).unwrap()
    }

    #[test]
    fn from_rows_assigns_row_major_ids() {
        let grid = sample();

        assert_eq!(grid.size(), 3);
        assert_eq!(grid.total_cells(), 9);
        assert_eq!(grid[(0, 0)].id(), CellId::new(0));
        assert_eq!(grid[(1, 2)].id(), CellId::new(5));
        assert_eq!(grid[(1, 2)].value(), 9);
        assert!(grid.iter().all(|(_, cell)| cell.is_unused()));
    }

    #[test]
    fn from_values_rejects_bad_input() {
        assert_eq!(
            Grid::from_values(Array2::from_elem((2, 3), 1)),
            Err(GameError::InvalidGridShape)
        );
        assert_eq!(
            Grid::from_values(Array2::from_elem((0, 0), 1)),
            Err(GameError::InvalidGridShape)
        );
        assert_eq!(
            Grid::from_rows([[1, 0], [1, 1]]),
            Err(GameError::InvalidCellValue { value: 0 })
        );
        assert_eq!(
            Grid::from_values(Array2::from_elem((17, 17), 1)),
            Err(GameError::InvalidGridSize { size: 17 })
        );
    }

    #[test]
    fn with_used_leaves_previous_snapshot_untouched() {
        let before = sample();

        let after = before.with_used((1, 1)).unwrap();

        assert!(after[(1, 1)].is_used());
        assert!(before[(1, 1)].is_unused());
        assert_eq!(after.used_count(), 1);
        assert_eq!(before.used_count(), 0);
        assert_eq!(after.unused_count(), 8);
    }

    #[test]
    fn with_used_rejects_out_of_bounds() {
        assert_eq!(sample().with_used((3, 0)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn deserialize_checks_like_from_values() {
        let grid = sample().with_used((0, 0)).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);

        let mut value = serde_json::to_value(&grid).unwrap();
        value["cells"]["dim"] = serde_json::json!([1, 9]);
        let err = serde_json::from_value::<Grid>(value).unwrap_err();
        assert!(err.to_string().contains("square"), "{err}");

        let mut value = serde_json::to_value(&grid).unwrap();
        value["cells"]["data"][4]["value"] = serde_json::json!(0);
        let err = serde_json::from_value::<Grid>(value).unwrap_err();
        assert!(err.to_string().contains("Cell value 0"), "{err}");
    }

    #[test]
    fn get_returns_none_outside_grid() {
        let grid = sample();

        assert_eq!(grid.get((0, 1)).map(Cell::value), Some(3));
        assert_eq!(grid.get((0, 3)), None);
        assert_eq!(grid.get((9, 9)), None);
    }

    #[test]
    fn unused_neighbor_check_follows_used_flags() {
        let mut grid = Grid::from_rows([[1, 1], [1, 1]]).unwrap();
        for coords in [(0, 1), (1, 0)] {
            grid = grid.with_used(coords).unwrap();
        }
        assert!(grid.has_unused_neighbor((0, 0)));

        grid = grid.with_used((1, 1)).unwrap();
        assert!(!grid.has_unused_neighbor((0, 0)));
        assert!(!grid.all_used());
    }
}
