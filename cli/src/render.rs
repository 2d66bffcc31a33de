use std::fmt::Write;

use numpath_core::*;

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}

/// Draws the grid as text.
///
/// The selection shows as `<v>`, used cells as `.`, and legal targets carry the glyph of the
/// operation moving there would apply.
pub fn render_state(state: &GameState) -> String {
    let grid = state.grid();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "value {}  best {}  moves {}",
        format_value(state.current_value()),
        state.score(),
        state.move_count()
    );

    out.push_str("   ");
    for col in 0..grid.size() {
        let _ = write!(out, "{col:>4}");
    }
    out.push('\n');

    for row in 0..grid.size() {
        let _ = write!(out, "{row:>3}");
        for col in 0..grid.size() {
            let coords = (row, col);
            let cell = grid[coords];
            let token = if state.selected_cell() == Some(coords) {
                format!("<{}>", cell.value())
            } else if cell.is_used() {
                ".".to_string()
            } else if let Some(op) = state.operation_for_cell(coords) {
                format!("{}{}", op.symbol(), cell.value())
            } else {
                cell.value().to_string()
            };
            let _ = write!(out, "{token:>4}");
        }
        out.push('\n');
    }

    if state.is_game_over() {
        let summary = state.summary();
        let _ = writeln!(
            out,
            "game over: score {}, moves {}, cells used {}/{}. type `reset` to play again",
            summary.score, summary.move_count, summary.cells_used, summary.total_cells
        );
    } else if !state.has_selection() {
        out.push_str("pick a starting cell\n");
    }

    out
}

pub fn render_moves(state: &GameState) -> String {
    let moves = state.available_moves();
    if moves.is_empty() {
        return "no legal targets\n".to_string();
    }

    let mut out = String::new();
    for AvailableMove { coords, operation } in moves {
        let _ = writeln!(
            out,
            "{} {}  {}{}",
            coords.0,
            coords.1,
            operation.symbol(),
            state.grid()[coords].value()
        );
    }
    out
}
