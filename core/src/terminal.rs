use serde::{Deserialize, Serialize};

use crate::*;

/// A legal target next to the current selection and the operation moving there would apply.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableMove {
    pub coords: Coord2,
    pub operation: Operation,
}

/// Whether no further move is possible from `state`.
///
/// Nothing is terminal before the first selection. Afterwards only the neighborhood of the
/// selected cell matters, since every move has to be adjacent to it.
pub fn is_terminal(state: &GameState) -> bool {
    let Some(selected) = state.selected_cell() else {
        return false;
    };
    let grid = state.grid();
    grid.all_used() || !grid.has_unused_neighbor(selected)
}

/// Unused in-bounds neighbors of the selected cell, in row-major order.
pub fn available_moves(state: &GameState) -> Vec<AvailableMove> {
    if state.is_game_over() {
        return Vec::new();
    }
    let Some(selected) = state.selected_cell() else {
        return Vec::new();
    };
    let grid = state.grid();

    grid.iter_neighbors(selected)
        .filter(|&pos| grid[pos].is_unused())
        .filter_map(|coords| {
            resolve(selected, coords).map(|operation| AvailableMove { coords, operation })
        })
        .collect()
}

pub fn is_available_target(state: &GameState, coords: Coord2) -> bool {
    operation_for_cell(state, coords).is_some()
}

pub fn operation_for_cell(state: &GameState, coords: Coord2) -> Option<Operation> {
    available_moves(state)
        .into_iter()
        .find(|available| available.coords == coords)
        .map(|available| available.operation)
}
