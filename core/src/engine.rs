use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot of one game session.
///
/// States are never edited in place: every accepted move builds a new state around a new grid,
/// so a renderer can keep the previous snapshot around and diff against it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    grid: Grid,
    current_value: Option<f64>,
    selected_cell: Option<Coord2>,
    score: f64,
    move_count: u32,
    game_over: bool,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct GameStateRepr {
    grid: Grid,
    current_value: Option<f64>,
    selected_cell: Option<Coord2>,
    score: f64,
    move_count: u32,
    game_over: bool,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = GameError;

    fn try_from(repr: GameStateRepr) -> Result<Self> {
        let state = Self {
            grid: repr.grid,
            current_value: repr.current_value,
            selected_cell: repr.selected_cell,
            score: repr.score,
            move_count: repr.move_count,
            game_over: repr.game_over,
        };

        if state.selected_cell.is_some() != state.current_value.is_some() {
            return Err(GameError::InconsistentState(
                "selected cell and running value must be set together",
            ));
        }
        if let Some(selected) = state.selected_cell {
            match state.grid.get(selected) {
                Some(cell) if cell.is_used() => {}
                Some(_) => {
                    return Err(GameError::InconsistentState("selected cell is not used"));
                }
                None => return Err(GameError::InvalidCoords),
            }
        }
        if state.game_over != is_terminal(&state) {
            return Err(GameError::InconsistentState(
                "game over flag disagrees with the board",
            ));
        }
        Ok(state)
    }
}

impl GameState {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            current_value: None,
            selected_cell: None,
            score: 0.0,
            move_count: 0,
            game_over: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_value(&self) -> Option<f64> {
        self.current_value
    }

    pub fn selected_cell(&self) -> Option<Coord2> {
        self.selected_cell
    }

    pub fn has_selection(&self) -> bool {
        self.selected_cell.is_some()
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn available_moves(&self) -> Vec<AvailableMove> {
        available_moves(self)
    }

    pub fn is_available_target(&self, coords: Coord2) -> bool {
        is_available_target(self, coords)
    }

    pub fn operation_for_cell(&self, coords: Coord2) -> Option<Operation> {
        operation_for_cell(self, coords)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            move_count: self.move_count,
            cells_used: self.grid.used_count(),
            total_cells: self.grid.total_cells(),
        }
    }

    fn select_first(&self, coords: Coord2) -> Option<Self> {
        if self.game_over || self.has_selection() {
            return None;
        }
        let cell = self.grid.get(coords).filter(|cell| cell.is_unused())?;

        let next = Self {
            grid: self.grid.with_used(coords).ok()?,
            current_value: Some(f64::from(cell.value())),
            selected_cell: Some(coords),
            score: self.score,
            move_count: self.move_count.saturating_add(1),
            game_over: false,
        };
        Some(next.with_terminal_check())
    }

    fn advance(&self, coords: Coord2) -> Option<(Self, Operation)> {
        if self.game_over {
            return None;
        }
        let (from, current) = self.selected_cell.zip(self.current_value)?;
        let operation = resolve(from, coords)?;
        let target = self.grid.get(coords).filter(|cell| cell.is_unused())?;

        let value = operation.apply(current, f64::from(target.value()));
        let next = Self {
            grid: self.grid.with_used(coords).ok()?,
            current_value: Some(value),
            selected_cell: Some(coords),
            score: if value > self.score { value } else { self.score },
            move_count: self.move_count.saturating_add(1),
            game_over: false,
        };
        Some((next.with_terminal_check(), operation))
    }

    fn with_terminal_check(mut self) -> Self {
        self.game_over = is_terminal(&self);
        self
    }
}

/// Figures shown on the end screen.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: f64,
    pub move_count: u32,
    pub cells_used: CellCount,
    pub total_cells: CellCount,
}

/// Owns the live session and turns taps into state transitions.
#[derive(Clone, Debug)]
pub struct PlayEngine<G = RandomGridGenerator> {
    config: GameConfig,
    generator: G,
    state: GameState,
}

impl PlayEngine<RandomGridGenerator> {
    /// Engine over random grids, reproducible when `seed` is given.
    pub fn random(config: GameConfig, seed: Option<u64>) -> Self {
        let generator = match seed {
            Some(seed) => RandomGridGenerator::new(seed),
            None => RandomGridGenerator::from_entropy(),
        };
        Self::new(config, generator)
    }
}

impl<G: GridGenerator> PlayEngine<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Self {
        let state = GameState::new(generator.generate(config));
        Self {
            config,
            generator,
            state,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Routes a tap to [`Self::select_first`] or [`Self::attempt_move`] depending on whether a
    /// cell is already selected.
    pub fn on_cell_tapped(&mut self, coords: Coord2) -> MoveOutcome {
        if self.state.has_selection() {
            self.attempt_move(coords)
        } else {
            self.select_first(coords)
        }
    }

    pub fn on_reset_requested(&mut self) {
        self.reset();
    }

    pub fn select_first(&mut self, coords: Coord2) -> MoveOutcome {
        let Some(next) = self.state.select_first(coords) else {
            log::trace!("Ignored first selection at {:?}", coords);
            return MoveOutcome::NoChange;
        };
        log::debug!(
            "Selected {:?} as start, value: {:?}",
            coords,
            next.current_value
        );

        self.state = next;
        if self.state.game_over {
            self.log_game_over();
            MoveOutcome::Finished(None)
        } else {
            MoveOutcome::Selected
        }
    }

    pub fn attempt_move(&mut self, coords: Coord2) -> MoveOutcome {
        let Some((next, operation)) = self.state.advance(coords) else {
            log::trace!(
                "Rejected move from {:?} to {:?}",
                self.state.selected_cell,
                coords
            );
            return MoveOutcome::NoChange;
        };
        log::debug!(
            "Moved to {:?} with {:?}, value: {:?}",
            coords,
            operation,
            next.current_value
        );

        self.state = next;
        if self.state.game_over {
            self.log_game_over();
            MoveOutcome::Finished(Some(operation))
        } else {
            MoveOutcome::Applied(operation)
        }
    }

    /// Starts over on a freshly generated grid.
    pub fn reset(&mut self) {
        self.state = GameState::new(self.generator.generate(self.config));
        log::info!("New game on a {0}x{0} grid", self.state.grid.size());
    }

    fn log_game_over(&self) {
        let summary = self.state.summary();
        log::info!(
            "Game over, score: {}, moves: {}, cells used: {}/{}",
            summary.score,
            summary.move_count,
            summary.cells_used,
            summary.total_cells
        );
    }
}
