use core::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// Arithmetic applied when moving from the selected cell onto a neighbor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Glyph shown next to a legal target.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Combines the running value with the value of the cell being moved onto.
    ///
    /// Division rounds to two decimal places, and dividing by zero keeps `current` as is.
    pub fn apply(self, current: f64, operand: f64) -> f64 {
        match self {
            Self::Add => current + operand,
            Self::Subtract => current - operand,
            Self::Multiply => current * operand,
            Self::Divide if operand == 0.0 => current,
            Self::Divide => round_to_hundredths(current / operand),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Rounds to the nearest hundredth, ties toward positive infinity.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Classifies the move `from -> to` by its direction of travel.
///
/// Up means decreasing row and right means increasing column. Straight moves right or up add,
/// straight moves left or down subtract, diagonals toward higher columns multiply, and diagonals
/// toward lower columns divide. Anything that is not an 8-neighbor resolves to `None`.
pub fn resolve(from: Coord2, to: Coord2) -> Option<Operation> {
    if chebyshev_distance(from, to) != 1 {
        return None;
    }

    let dr = i16::from(to.0) - i16::from(from.0);
    let dc = i16::from(to.1) - i16::from(from.1);

    Some(match (dr, dc) {
        (0, 1) | (-1, 0) => Operation::Add,
        (0, -1) | (1, 0) => Operation::Subtract,
        (_, 1) => Operation::Multiply,
        _ => Operation::Divide,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_moves_add_or_subtract_by_direction() {
        assert_eq!(resolve((1, 1), (1, 2)), Some(Operation::Add));
        assert_eq!(resolve((1, 1), (0, 1)), Some(Operation::Add));
        assert_eq!(resolve((1, 1), (1, 0)), Some(Operation::Subtract));
        assert_eq!(resolve((1, 1), (2, 1)), Some(Operation::Subtract));
    }

    #[test]
    fn diagonals_split_on_column_direction() {
        assert_eq!(resolve((1, 1), (0, 2)), Some(Operation::Multiply));
        assert_eq!(resolve((1, 1), (2, 2)), Some(Operation::Multiply));
        assert_eq!(resolve((1, 1), (0, 0)), Some(Operation::Divide));
        assert_eq!(resolve((1, 1), (2, 0)), Some(Operation::Divide));
    }

    #[test]
    fn non_neighbors_resolve_to_none() {
        assert_eq!(resolve((1, 1), (1, 1)), None);
        assert_eq!(resolve((0, 0), (0, 2)), None);
        assert_eq!(resolve((0, 0), (2, 1)), None);
        assert_eq!(resolve((3, 3), (0, 0)), None);
    }

    #[test]
    fn resolution_is_total_and_only_hits_neighbors() {
        for from_row in 0..6 {
            for from_col in 0..6 {
                for to_row in 0..6 {
                    for to_col in 0..6 {
                        let from = (from_row, from_col);
                        let to = (to_row, to_col);
                        let op = resolve(from, to);

                        assert_eq!(op, resolve(from, to));
                        assert_eq!(op.is_some(), chebyshev_distance(from, to) == 1);
                    }
                }
            }
        }
    }

    #[test]
    fn reversing_a_straight_move_flips_add_and_subtract() {
        assert_eq!(resolve((2, 2), (2, 3)), Some(Operation::Add));
        assert_eq!(resolve((2, 3), (2, 2)), Some(Operation::Subtract));
        assert_eq!(resolve((2, 2), (1, 2)), Some(Operation::Add));
        assert_eq!(resolve((1, 2), (2, 2)), Some(Operation::Subtract));
    }

    #[test]
    fn apply_uses_running_value_as_left_operand() {
        assert_eq!(Operation::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operation::Subtract.apply(2.0, 7.0), -5.0);
        assert_eq!(Operation::Multiply.apply(-4.0, 3.0), -12.0);
        assert_eq!(Operation::Divide.apply(10.0, 4.0), 2.5);
    }

    #[test]
    fn divide_rounds_to_two_places() {
        assert_eq!(Operation::Divide.apply(10.0, 3.0), 3.33);
        assert_eq!(Operation::Divide.apply(2.0, 3.0), 0.67);
        assert_eq!(Operation::Divide.apply(-10.0, 3.0), -3.33);
        assert_eq!(Operation::Divide.apply(1.0, 8.0), 0.13);
    }

    #[test]
    fn divide_by_zero_keeps_value() {
        assert_eq!(Operation::Divide.apply(7.5, 0.0), 7.5);
    }

    #[test]
    fn rounding_breaks_ties_upward() {
        assert_eq!(round_to_hundredths(0.125), 0.13);
        assert_eq!(round_to_hundredths(-0.125), -0.12);
        assert_eq!(round_to_hundredths(4.0), 4.0);
    }

    #[test]
    fn symbols_match_operations() {
        let symbols: String = Operation::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, "+−×÷");
        assert_eq!(Operation::Multiply.to_string(), "×");
    }
}
